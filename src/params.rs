//! Parameter definitions and the parameter-value mapping passed to generators.
//!
//! Generators share one signature, so values travel in an open string-keyed
//! map. A key that is absent reads as the empty string; generators must
//! never treat a missing key as an error.

use serde::Serialize;
use std::collections::BTreeMap;

/// Parameter values keyed by [`ParameterSpec::id`].
pub type Params = BTreeMap<String, String>;

/// Read one parameter value, treating an absent key as `""`.
pub fn param<'a>(params: &'a Params, id: &str) -> &'a str {
    params.get(id).map(String::as_str).unwrap_or("")
}

/// One named, user-editable string input accepted by an element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub id: &'static str,
    pub label: &'static str,
}

impl ParameterSpec {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}
