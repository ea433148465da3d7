//! promptgen: building blocks for Bash prompt strings.
//!
//! The crate exposes a [`catalog`] of prompt element types (user name, clock
//! formats, punctuation, free text, ...). Each type turns a parameter map into
//! a literal prompt fragment and into a human-readable preview of what the
//! shell would draw. Placed instances live in a [`composition`].
//!
//! # Quick start
//!
//! ```
//! use promptgen::catalog::catalog;
//! use promptgen::composition::Composition;
//!
//! let catalog = catalog();
//! let mut prompt = Composition::new();
//! for name in ["Username", "@", "Hostname (short)", "Space", "User sign", "Space"] {
//!     prompt.push(catalog.get(name).expect("built-in type"));
//! }
//! assert_eq!(prompt.prompt_string(), "\\u@\\h \\$ ");
//! assert_eq!(prompt.preview(), "user@host $ ");
//! ```

pub mod build_info;
pub mod catalog;
pub mod clock;
pub mod composition;
pub mod config;
pub mod element;
pub mod error;
pub mod generator;
pub mod params;
pub mod render;
pub mod style;
pub mod textutil;
