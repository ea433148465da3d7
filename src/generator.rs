//! Text generators attached to element types.
//!
//! An element type produces its prompt fragment and its preview through a
//! [`Generator`]: either a fixed string or a function of the parameter map.
//! Call sites only ever use [`Generator::generate`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::params::Params;

type GenFn = dyn Fn(&Params) -> String + Send + Sync;

/// Constant text or a function of the element's parameters.
#[derive(Clone)]
pub enum Generator {
    Constant(Cow<'static, str>),
    Function(Arc<GenFn>),
}

impl Generator {
    /// Wrap a function of the parameter map.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Produce text for `params`. Constants ignore their argument.
    pub fn generate(&self, params: &Params) -> String {
        match self {
            Self::Constant(text) => text.to_string(),
            Self::Function(f) => f(params),
        }
    }
}

impl From<&'static str> for Generator {
    fn from(text: &'static str) -> Self {
        Self::Constant(Cow::Borrowed(text))
    }
}

impl From<String> for Generator {
    fn from(text: String) -> Self {
        Self::Constant(Cow::Owned(text))
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(text) => f.debug_tuple("Constant").field(text).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::param;

    #[test]
    fn constant_ignores_parameters() {
        let generator = Generator::from("\\u");
        let mut params = Params::new();
        params.insert("text".into(), "ignored".into());
        assert_eq!(generator.generate(&Params::new()), "\\u");
        assert_eq!(generator.generate(&params), "\\u");
    }

    #[test]
    fn function_reads_parameters() {
        let generator = Generator::function(|params| format!("<{}>", param(params, "x")));
        let mut params = Params::new();
        params.insert("x".into(), "1".into());
        assert_eq!(generator.generate(&params), "<1>");
        assert_eq!(generator.generate(&Params::new()), "<>");
    }

    #[test]
    fn debug_hides_function_body() {
        let generator = Generator::function(|_| String::new());
        assert_eq!(format!("{generator:?}"), "Function(..)");
    }
}
