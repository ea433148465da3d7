//! Prompt element type registry.
//!
//! A [`Catalog`] is an ordered, immutable list of [`ElementType`]s plus an
//! advisory set of names before which a palette UI draws a group separator.
//! The process-wide built-in catalog is available through [`catalog()`]; it is
//! built once on first use and never mutated afterwards, so `&'static`
//! references to its element types are stable and may serve as map keys.

mod builtin;

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::clock::{DateTimeSource, SystemClock};
use crate::error::CatalogError;
use crate::generator::Generator;
use crate::params::{ParameterSpec, Params};

/// One kind of prompt element.
#[derive(Debug, Clone)]
pub struct ElementType {
    name: Cow<'static, str>,
    char_generator: Generator,
    parameters: Vec<ParameterSpec>,
    printable: bool,
    description: Cow<'static, str>,
    preview_generator: Generator,
}

impl ElementType {
    /// New printable element type without parameters. The preview defaults
    /// to the prompt fragment itself until [`ElementType::preview`] is set.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        char_generator: impl Into<Generator>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        let char_generator = char_generator.into();
        Self {
            name: name.into(),
            preview_generator: char_generator.clone(),
            char_generator,
            parameters: Vec::new(),
            printable: true,
            description: description.into(),
        }
    }

    pub fn preview(mut self, preview_generator: impl Into<Generator>) -> Self {
        self.preview_generator = preview_generator.into();
        self
    }

    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Mark as whitespace/control: styling is not offered for it.
    pub fn non_printable(mut self) -> Self {
        self.printable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn printable(&self) -> bool {
        self.printable
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Literal prompt fragment for `params`.
    pub fn generate_char(&self, params: &Params) -> String {
        self.char_generator.generate(params)
    }

    /// Human-readable sample for `params`.
    pub fn generate_preview(&self, params: &Params) -> String {
        self.preview_generator.generate(params)
    }

    /// Serializable view with fragment and preview for empty parameters.
    pub fn summary(&self) -> ElementSummary<'_> {
        let empty = Params::new();
        ElementSummary {
            name: self.name(),
            parameters: self.parameters(),
            printable: self.printable,
            description: self.description(),
            fragment: self.generate_char(&empty),
            preview: self.generate_preview(&empty),
        }
    }
}

/// Element type metadata as emitted by `promptgen list --json`.
#[derive(Debug, Serialize)]
pub struct ElementSummary<'a> {
    pub name: &'a str,
    pub parameters: &'a [ParameterSpec],
    pub printable: bool,
    pub description: &'a str,
    pub fragment: String,
    pub preview: String,
}

/// Ordered, immutable set of element types.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<ElementType>,
    separators: BTreeSet<String>,
}

impl Catalog {
    /// Build a catalog from caller-supplied element types, checking names and
    /// parameter ids.
    pub fn new(types: Vec<ElementType>) -> Result<Self, CatalogError> {
        let catalog = Self {
            types,
            separators: BTreeSet::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in element types, with date/time previews drawn from `clock`.
    pub fn builtin(clock: Arc<dyn DateTimeSource>) -> Self {
        let catalog = Self {
            types: builtin::element_types(&clock),
            separators: builtin::separator_before_labels(),
        };
        debug_assert!(catalog.validate().is_ok(), "built-in catalog is invalid");
        tracing::debug!(
            element_types = catalog.types.len(),
            separators = catalog.separators.len(),
            "built prompt element catalog"
        );
        catalog
    }

    /// Replace the advisory separator labels. Unknown names are allowed.
    pub fn with_separators<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = labels.into_iter().map(Into::into).collect();
        self
    }

    /// All element types in display order.
    pub fn list(&self) -> &[ElementType] {
        &self.types
    }

    /// Names before which a palette should draw a separator.
    pub fn separator_before_labels(&self) -> &BTreeSet<String> {
        &self.separators
    }

    /// Element type by exact name.
    pub fn get(&self, name: &str) -> Option<&ElementType> {
        self.types.iter().find(|element_type| element_type.name() == name)
    }

    /// Display order split at the separator labels. Labels that match no
    /// element type have no effect.
    pub fn groups(&self) -> Vec<&[ElementType]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for (index, element_type) in self.types.iter().enumerate() {
            if index > start && self.separators.contains(element_type.name()) {
                groups.push(&self.types[start..index]);
                start = index;
            }
        }
        if start < self.types.len() {
            groups.push(&self.types[start..]);
        }
        groups
    }

    /// Check the construction invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = BTreeSet::new();
        for (index, element_type) in self.types.iter().enumerate() {
            let name = element_type.name();
            if name.is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if !names.insert(name) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }
            if element_type.description().trim().is_empty() {
                return Err(CatalogError::EmptyDescription(name.to_string()));
            }
            let mut ids = BTreeSet::new();
            for spec in element_type.parameters() {
                if !ids.insert(spec.id) {
                    return Err(CatalogError::DuplicateParameter {
                        element: name.to_string(),
                        id: spec.id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The process-wide built-in catalog, using the local system clock.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::builtin(Arc::new(SystemClock)))
}
