//! Error types for catalog construction and configuration loading.

use std::fmt;

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// A catalog built from caller-supplied element types broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Element type at this catalog position has an empty name.
    EmptyName(usize),
    /// Two element types share a name.
    DuplicateName(String),
    /// One element type declares the same parameter id twice.
    DuplicateParameter { element: String, id: String },
    /// Element type has no description text.
    EmptyDescription(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(index) => write!(f, "element type #{index} has an empty name"),
            Self::DuplicateName(name) => write!(f, "duplicate element type name `{name}`"),
            Self::DuplicateParameter { element, id } => {
                write!(f, "element type `{element}` declares parameter `{id}` twice")
            }
            Self::EmptyDescription(name) => {
                write!(f, "element type `{name}` has an empty description")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
