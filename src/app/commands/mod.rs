//! Subcommand implementations.

pub(crate) mod list;
pub(crate) mod render;
pub(crate) mod show;

use promptgen::catalog::{Catalog, ElementType};

/// Resolve an element type by exact name, suggesting a case-insensitive match.
pub(crate) fn lookup<'c>(catalog: &'c Catalog, name: &str) -> Result<&'c ElementType, String> {
    if let Some(element_type) = catalog.get(name) {
        return Ok(element_type);
    }
    let suggestion = catalog
        .list()
        .iter()
        .find(|element_type| element_type.name().eq_ignore_ascii_case(name.trim()));
    match suggestion {
        Some(element_type) => Err(format!(
            "unknown element type `{name}`; did you mean `{}`?",
            element_type.name()
        )),
        None => Err(format!(
            "unknown element type `{name}`. Run `promptgen list` to see available types."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgen::catalog::catalog;

    #[test]
    fn lookup_finds_exact_name() {
        assert_eq!(lookup(catalog(), "Jobs").expect("jobs").name(), "Jobs");
    }

    #[test]
    fn lookup_suggests_case_insensitive_match() {
        let err = lookup(catalog(), "username").expect_err("case mismatch");
        assert!(err.contains("did you mean `Username`"), "got: {err}");
    }

    #[test]
    fn lookup_reports_unknown_name() {
        let err = lookup(catalog(), "Git branch").expect_err("missing");
        assert!(err.contains("promptgen list"), "got: {err}");
    }
}
