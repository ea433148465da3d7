//! Placed prompt element instances.
//!
//! A [`PromptElement`] borrows its [`ElementType`] from a catalog and carries
//! everything a user edits: parameter values, attributes, backspaces and
//! colors. All fields are plain data; writes never validate against each
//! other.

use crate::catalog::ElementType;
use crate::params::Params;
use crate::style::{Attribute, Attributes, Color};

/// One occurrence of an element type in a composed prompt.
#[derive(Debug, Clone)]
pub struct PromptElement<'c> {
    element_type: &'c ElementType,
    pub parameters: Params,
    pub attributes: Attributes,
    /// Trailing backspace controls attached to this element.
    pub backspaces: usize,
    pub foreground_color: Option<Color>,
    pub background_color: Option<Color>,
}

impl<'c> PromptElement<'c> {
    /// Fresh instance: no parameters, attributes off, no colors.
    pub fn new(element_type: &'c ElementType) -> Self {
        Self {
            element_type,
            parameters: Params::new(),
            attributes: Attributes::default(),
            backspaces: 0,
            foreground_color: None,
            background_color: None,
        }
    }

    pub fn element_type(&self) -> &'c ElementType {
        self.element_type
    }

    /// Set one parameter value. Ids the element type does not declare are
    /// stored too; generators simply never read them.
    pub fn set_parameter(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(id.into(), value.into());
    }

    pub fn set_attribute(&mut self, attribute: Attribute, on: bool) {
        self.attributes.set(attribute, on);
    }

    /// Literal prompt fragment for the current parameters.
    pub fn render_char(&self) -> String {
        self.element_type.generate_char(&self.parameters)
    }

    /// Human-readable sample for the current parameters.
    pub fn render_preview(&self) -> String {
        self.element_type.generate_preview(&self.parameters)
    }
}

/// A prompt element tagged with an id unique within its composition.
#[derive(Debug, Clone)]
pub struct UniquePromptElement<'c> {
    pub id: u64,
    pub data: PromptElement<'c>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn text_type() -> &'static ElementType {
        catalog().get("Text").expect("text type")
    }

    #[test]
    fn new_instance_has_neutral_defaults() {
        let element = PromptElement::new(text_type());
        assert!(element.parameters.is_empty());
        assert!(element.attributes.is_plain());
        for attribute in Attribute::ALL {
            assert!(!element.attributes.get(attribute));
        }
        assert_eq!(element.backspaces, 0);
        assert_eq!(element.foreground_color, None);
        assert_eq!(element.background_color, None);
    }

    #[test]
    fn render_uses_element_type_generators() {
        let mut element = PromptElement::new(text_type());
        element.set_parameter("text", "$HOME");
        assert_eq!(element.render_char(), "\\$HOME");
        assert_eq!(element.render_preview(), "$HOME");
    }

    #[test]
    fn render_with_missing_parameter_is_empty() {
        let element = PromptElement::new(text_type());
        assert_eq!(element.render_char(), "");
        assert_eq!(element.render_preview(), "");
    }

    #[test]
    fn color_writes_are_independent() {
        let mut element = PromptElement::new(text_type());
        element.foreground_color = Some(Color::Green);
        element.background_color = Some(Color::Black);
        element.background_color = None;
        assert_eq!(element.foreground_color, Some(Color::Green));
        assert_eq!(element.background_color, None);
    }

    #[test]
    fn styling_does_not_change_rendered_fragment() {
        let mut element = PromptElement::new(catalog().get("Username").expect("username"));
        let before = element.render_char();
        element.set_attribute(Attribute::Bold, true);
        element.foreground_color = Some(Color::LightBlue);
        element.backspaces = 2;
        assert_eq!(element.render_char(), before);
    }

    #[test]
    fn element_type_reference_is_the_catalog_entry() {
        let element = PromptElement::new(text_type());
        assert!(std::ptr::eq(element.element_type(), text_type()));
    }
}
