//! Ordered prompt compositions.
//!
//! A [`Composition`] owns the placed elements of one prompt and hands out
//! ids that stay unique for its lifetime. The prompt string is the
//! concatenation of every element's fragment in order.

use crate::catalog::ElementType;
use crate::element::{PromptElement, UniquePromptElement};
use crate::textutil::BACKSPACE;

#[derive(Debug, Clone, Default)]
pub struct Composition<'c> {
    elements: Vec<UniquePromptElement<'c>>,
    next_id: u64,
}

impl<'c> Composition<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh instance of `element_type` and return its id.
    pub fn push(&mut self, element_type: &'c ElementType) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.push(UniquePromptElement {
            id,
            data: PromptElement::new(element_type),
        });
        tracing::trace!(id, element_type = element_type.name(), "added prompt element");
        id
    }

    pub fn get(&self, id: u64) -> Option<&PromptElement<'c>> {
        self.position(id).map(|index| &self.elements[index].data)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut PromptElement<'c>> {
        self.position(id).map(|index| &mut self.elements[index].data)
    }

    /// Remove one element. Its id is not handed out again.
    pub fn remove(&mut self, id: u64) -> Option<PromptElement<'c>> {
        let index = self.position(id)?;
        Some(self.elements.remove(index).data)
    }

    /// Move an element to `index`, clamped to the last position. Returns
    /// false when the id is unknown.
    pub fn move_to(&mut self, id: u64, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let element = self.elements.remove(from);
        let to = index.min(self.elements.len());
        self.elements.insert(to, element);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &UniquePromptElement<'c>> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The prompt string: every fragment, in composition order.
    pub fn prompt_string(&self) -> String {
        assemble(self.elements.iter().map(|element| &element.data))
    }

    /// What the prompt looks like on screen. Each element's backspace count
    /// erases that many trailing characters.
    pub fn preview(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            for ch in element.data.render_preview().chars() {
                if ch == BACKSPACE {
                    out.pop();
                } else {
                    out.push(ch);
                }
            }
            for _ in 0..element.data.backspaces {
                if out.pop().is_none() {
                    break;
                }
            }
        }
        out
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }
}

/// Concatenate the fragments of `elements` in iteration order.
pub fn assemble<'a, 'c: 'a>(elements: impl IntoIterator<Item = &'a PromptElement<'c>>) -> String {
    elements
        .into_iter()
        .map(PromptElement::render_char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn element_type(name: &str) -> &'static ElementType {
        catalog().get(name).unwrap_or_else(|| panic!("missing element type {name}"))
    }

    #[test]
    fn ids_are_unique_and_not_reused() {
        let mut composition = Composition::new();
        let a = composition.push(element_type("Username"));
        let b = composition.push(element_type("Username"));
        assert_ne!(a, b);
        composition.remove(b);
        let c = composition.push(element_type("@"));
        assert_ne!(b, c);
        assert_eq!(composition.len(), 2);
    }

    #[test]
    fn prompt_string_concatenates_in_order() {
        let mut composition = Composition::new();
        composition.push(element_type("Username"));
        composition.push(element_type("@"));
        composition.push(element_type("Hostname (short)"));
        let text = composition.push(element_type("Text"));
        composition
            .get_mut(text)
            .expect("text element")
            .set_parameter("text", " $ ");
        assert_eq!(composition.prompt_string(), "\\u@\\h \\$ ");
    }

    #[test]
    fn reordering_changes_prompt_string() {
        let mut composition = Composition::new();
        let user = composition.push(element_type("Username"));
        composition.push(element_type("Working directory"));
        let before = composition.prompt_string();
        assert!(composition.move_to(user, 5));
        assert_eq!(composition.prompt_string(), "\\w\\u");
        assert_ne!(composition.prompt_string(), before);
        assert!(!composition.move_to(99, 0));
    }

    #[test]
    fn assemble_matches_manual_concatenation() {
        let elements: Vec<_> = ["Date", "Space", "Time (HH:MM)", "Newline"]
            .into_iter()
            .map(|name| PromptElement::new(element_type(name)))
            .collect();
        let expected: String = elements.iter().map(|e| e.render_char()).collect();
        assert_eq!(assemble(&elements), expected);
        assert_eq!(assemble(&elements), "\\d \\A\\n");
    }

    #[test]
    fn preview_applies_element_backspaces() {
        let mut composition = Composition::new();
        composition.push(element_type("Username"));
        let colon = composition.push(element_type(":"));
        composition.push(element_type("Working directory (basename)"));
        composition.get_mut(colon).expect("colon").backspaces = 1;
        assert_eq!(composition.preview(), "userDocuments");
    }

    #[test]
    fn preview_applies_backspace_elements() {
        let mut composition = Composition::new();
        composition.push(element_type("User sign"));
        composition.push(element_type("Backspace"));
        composition.push(element_type("#"));
        assert_eq!(composition.preview(), "#");
        assert_eq!(composition.prompt_string(), "\\$\\010#");
    }

    #[test]
    fn preview_with_huge_backspace_count_erases_everything() {
        let mut composition = Composition::new();
        composition.push(element_type("Username"));
        let at = composition.push(element_type("@"));
        composition.push(element_type("Hostname (short)"));
        composition.get_mut(at).expect("at").backspaces = usize::MAX;
        assert_eq!(composition.preview(), "host");
        assert_eq!(composition.prompt_string(), "\\u@\\h");
    }

    #[test]
    fn backspaces_past_the_start_are_ignored() {
        let mut composition = Composition::new();
        let first = composition.push(element_type("Jobs"));
        composition.push(element_type("Backspace"));
        composition.push(element_type("?"));
        composition.get_mut(first).expect("jobs").backspaces = 3;
        assert_eq!(composition.preview(), "?");
    }

    #[test]
    fn empty_composition_renders_empty() {
        let composition = Composition::new();
        assert!(composition.is_empty());
        assert_eq!(composition.prompt_string(), "");
        assert_eq!(composition.preview(), "");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use crate::catalog::catalog;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prompt_string_follows_composition_order(
                picks in proptest::collection::vec(0usize..1000, 0..12),
                target in 0usize..12,
            ) {
                let types = catalog().list();
                let mut composition = Composition::new();
                for pick in &picks {
                    composition.push(&types[pick % types.len()]);
                }
                if let Some(first) = composition.iter().next().map(|e| e.id) {
                    prop_assert!(composition.move_to(first, target));
                }
                let expected: String = composition.iter().map(|e| e.data.render_char()).collect();
                prop_assert_eq!(composition.prompt_string(), expected);
                prop_assert_eq!(composition.len(), picks.len());
            }

            #[test]
            fn preview_matches_stripping_explicit_backspaces(
                picks in proptest::collection::vec((0usize..1000, 0usize..6), 0..12),
            ) {
                let clock = crate::clock::FixedClock::from_ymd_hms_milli(2024, 2, 28, 14, 22, 3, 45)
                    .expect("instant");
                let fixed = crate::catalog::Catalog::builtin(std::sync::Arc::new(clock));
                let types = fixed.list();
                let mut composition = Composition::new();
                let mut raw = String::new();
                for (pick, backspaces) in &picks {
                    let id = composition.push(&types[pick % types.len()]);
                    let element = composition.get_mut(id).expect("pushed element");
                    element.backspaces = *backspaces;
                    raw.push_str(&element.render_preview());
                    raw.extend(std::iter::repeat(BACKSPACE).take(*backspaces));
                }
                prop_assert_eq!(composition.preview(), crate::textutil::strip_backspaces(&raw));
            }
        }
    }
}
