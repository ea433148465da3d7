//! `promptgen render <NAME>...`.

use std::io::Write;
use std::str::FromStr;

use promptgen::catalog::Catalog;
use promptgen::composition::Composition;
use promptgen::element::PromptElement;
use promptgen::render::{visible, Renderer};
use promptgen::style::{Attribute, Color};

use super::list::write_error;
use super::lookup;

/// `-p N:KEY=VALUE`: a parameter value for the N-th element (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementParam {
    pub index: usize,
    pub key: String,
    pub value: String,
}

impl FromStr for ElementParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, rest) = split_index(s)?;
        let (key, value) = rest
            .split_once('=')
            .ok_or_else(|| format!("expected N:KEY=VALUE, got `{s}`"))?;
        if key.is_empty() {
            return Err(format!("missing parameter name in `{s}`"));
        }
        Ok(Self {
            index,
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// `-b N:COUNT`: trailing backspaces for the N-th element (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementBackspaces {
    pub index: usize,
    pub count: usize,
}

impl FromStr for ElementBackspaces {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, rest) = split_index(s)?;
        let count = rest
            .trim()
            .parse()
            .map_err(|_| format!("invalid backspace count in `{s}`"))?;
        Ok(Self { index, count })
    }
}

/// `-s N:STYLE`: an attribute name, `fg=COLOR` or `bg=COLOR` for the N-th element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    pub index: usize,
    pub change: StyleChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Attribute(Attribute),
    Foreground(Color),
    Background(Color),
}

impl FromStr for ElementStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, rest) = split_index(s)?;
        let change = match rest.split_once('=') {
            Some((key, color)) => match key.trim() {
                "fg" => StyleChange::Foreground(color.parse()?),
                "bg" => StyleChange::Background(color.parse()?),
                other => return Err(format!("unknown style key `{other}`; use fg or bg")),
            },
            None => StyleChange::Attribute(rest.parse()?),
        };
        Ok(Self { index, change })
    }
}

fn split_index(s: &str) -> Result<(usize, &str), String> {
    let (index, rest) = s
        .split_once(':')
        .ok_or_else(|| format!("expected an element position before `:` in `{s}`"))?;
    match index.trim().parse::<usize>() {
        Ok(index) if index >= 1 => Ok((index, rest)),
        _ => Err(format!("element position must be a number from 1, got `{index}`")),
    }
}

pub(crate) struct RenderRequest<'a> {
    pub elements: &'a [String],
    pub params: &'a [ElementParam],
    pub backspaces: &'a [ElementBackspaces],
    pub styles: &'a [ElementStyle],
    pub raw: bool,
}

pub(crate) fn run_render(
    renderer: &Renderer,
    catalog: &Catalog,
    request: &RenderRequest<'_>,
    out: &mut dyn Write,
) -> Result<(), String> {
    let composition = compose(catalog, request)?;
    let prompt = composition.prompt_string();
    if request.raw {
        if !request.backspaces.is_empty() {
            renderer.warn("backspaces only change the preview; the prompt string is unaffected");
        }
        return writeln!(out, "{prompt}").map_err(write_error);
    }
    renderer.section(out, "Prompt").map_err(write_error)?;
    renderer
        .field(out, "PS1", &visible(&prompt))
        .map_err(write_error)?;
    renderer
        .field(out, "preview", &visible(&composition.preview()))
        .map_err(write_error)?;

    let styled: Vec<(usize, &PromptElement<'_>)> = composition
        .iter()
        .map(|element| &element.data)
        .enumerate()
        .filter(|(_, element)| is_styled(element))
        .collect();
    if styled.is_empty() {
        return Ok(());
    }
    renderer.section(out, "Styles").map_err(write_error)?;
    for (index, element) in styled {
        let key = format!("{}. {}", index + 1, element.element_type().name());
        renderer
            .field(out, &key, &describe_style(element))
            .map_err(write_error)?;
    }
    Ok(())
}

fn is_styled(element: &PromptElement<'_>) -> bool {
    !element.attributes.is_plain()
        || element.foreground_color.is_some()
        || element.background_color.is_some()
}

fn describe_style(element: &PromptElement<'_>) -> String {
    let mut parts: Vec<String> = element
        .attributes
        .enabled()
        .map(|attribute| attribute.to_string())
        .collect();
    if let Some(color) = element.foreground_color {
        parts.push(format!("fg={color}"));
    }
    if let Some(color) = element.background_color {
        parts.push(format!("bg={color}"));
    }
    parts.join(", ")
}

fn compose<'c>(
    catalog: &'c Catalog,
    request: &RenderRequest<'_>,
) -> Result<Composition<'c>, String> {
    let mut composition = Composition::new();
    let mut ids = Vec::with_capacity(request.elements.len());
    for name in request.elements {
        ids.push(composition.push(lookup(catalog, name)?));
    }

    let position = |index: usize| {
        ids.get(index - 1).copied().ok_or_else(|| {
            format!(
                "element position {index} is out of range; {} element(s) given",
                ids.len()
            )
        })
    };

    for param in request.params {
        let id = position(param.index)?;
        let Some(element) = composition.get_mut(id) else {
            continue;
        };
        let element_type = element.element_type();
        if !element_type
            .parameters()
            .iter()
            .any(|spec| spec.id == param.key)
        {
            return Err(format!(
                "`{}` has no parameter `{}`",
                element_type.name(),
                param.key
            ));
        }
        element.set_parameter(param.key.as_str(), param.value.as_str());
    }

    for backspaces in request.backspaces {
        let id = position(backspaces.index)?;
        if let Some(element) = composition.get_mut(id) {
            element.backspaces = backspaces.count;
        }
    }

    for style in request.styles {
        let id = position(style.index)?;
        let Some(element) = composition.get_mut(id) else {
            continue;
        };
        if !element.element_type().printable() {
            return Err(format!(
                "`{}` is not printable and cannot be styled",
                element.element_type().name()
            ));
        }
        match style.change {
            StyleChange::Attribute(attribute) => element.set_attribute(attribute, true),
            StyleChange::Foreground(color) => element.foreground_color = Some(color),
            StyleChange::Background(color) => element.background_color = Some(color),
        }
    }

    tracing::debug!(elements = composition.len(), "composed prompt");
    Ok(composition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgen::catalog::catalog;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse_all<T: FromStr<Err = String>>(items: &[&str]) -> Result<Vec<T>, String> {
        items.iter().map(|s| s.parse()).collect()
    }

    fn render(
        elements: &[&str],
        params: &[&str],
        backspaces: &[&str],
        raw: bool,
    ) -> Result<String, String> {
        render_styled(elements, params, backspaces, &[], raw)
    }

    fn render_styled(
        elements: &[&str],
        params: &[&str],
        backspaces: &[&str],
        styles: &[&str],
        raw: bool,
    ) -> Result<String, String> {
        let elements = names(elements);
        let params: Vec<ElementParam> = parse_all(params)?;
        let backspaces: Vec<ElementBackspaces> = parse_all(backspaces)?;
        let styles: Vec<ElementStyle> = parse_all(styles)?;
        let request = RenderRequest {
            elements: &elements,
            params: &params,
            backspaces: &backspaces,
            styles: &styles,
            raw,
        };
        let mut buf = Vec::new();
        run_render(&Renderer::new(false), catalog(), &request, &mut buf)?;
        Ok(String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn parses_param_with_equals_in_value() {
        let param: ElementParam = "2:command=echo a=b".parse().expect("parse");
        assert_eq!(param.index, 2);
        assert_eq!(param.key, "command");
        assert_eq!(param.value, "echo a=b");
    }

    #[test]
    fn rejects_zero_and_missing_positions() {
        assert!("0:text=x".parse::<ElementParam>().is_err());
        assert!("text=x".parse::<ElementParam>().is_err());
        assert!("1:=x".parse::<ElementParam>().is_err());
        assert!("1:many".parse::<ElementBackspaces>().is_err());
        assert_eq!(
            "3:2".parse::<ElementBackspaces>(),
            Ok(ElementBackspaces { index: 3, count: 2 })
        );
    }

    #[test]
    fn raw_render_prints_prompt_only() {
        let elements = [
            "Username",
            "@",
            "Hostname (short)",
            "Space",
            "User sign",
            "Space",
        ];
        let text = render(&elements, &[], &[], true).expect("render");
        assert_eq!(text, "\\u@\\h \\$ \n");
    }

    #[test]
    fn render_applies_parameters_and_backspaces() {
        let text = render(
            &["Text", "Working directory (basename)"],
            &["1:text=in $HOME"],
            &["1:6"],
            false,
        )
        .expect("render");
        assert!(text.contains("  PS1: in \\$HOME\\W\n"), "got: {text}");
        assert!(text.contains("  preview: inDocuments\n"), "got: {text}");
    }

    #[test]
    fn undeclared_parameter_is_rejected() {
        let err = render(&["Username"], &["1:text=x"], &[], true).expect_err("no param");
        assert!(err.contains("has no parameter `text`"), "got: {err}");
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let err = render(&["Username"], &[], &["2:1"], true).expect_err("range");
        assert!(err.contains("out of range"), "got: {err}");
    }

    #[test]
    fn parses_attribute_and_color_styles() {
        assert_eq!(
            "1:bold".parse::<ElementStyle>(),
            Ok(ElementStyle {
                index: 1,
                change: StyleChange::Attribute(Attribute::Bold)
            })
        );
        assert_eq!(
            "2:fg=light_blue".parse::<ElementStyle>(),
            Ok(ElementStyle {
                index: 2,
                change: StyleChange::Foreground(Color::LightBlue)
            })
        );
        assert!("1:fg=chartreuse".parse::<ElementStyle>().is_err());
        assert!("1:shadow".parse::<ElementStyle>().is_err());
        assert!("1:ink=red".parse::<ElementStyle>().is_err());
    }

    #[test]
    fn styles_are_listed_without_changing_the_prompt() {
        let text = render_styled(
            &["Username", "@", "Hostname (short)"],
            &[],
            &[],
            &["1:bold", "1:underline", "1:fg=red", "3:bg=dark-grey"],
            false,
        )
        .expect("render");
        assert!(text.contains("  PS1: \\u@\\h\n"), "got: {text}");
        assert!(text.contains("Styles:\n"), "got: {text}");
        assert!(text.contains("  1. Username: bold, underline, fg=red\n"), "got: {text}");
        assert!(text.contains("  3. Hostname (short): bg=dark-gray\n"), "got: {text}");
        assert!(!text.contains("2. @"), "got: {text}");
    }

    #[test]
    fn unstyled_render_has_no_styles_section() {
        let text = render(&["Username"], &[], &[], false).expect("render");
        assert!(!text.contains("Styles:"), "got: {text}");
    }

    #[test]
    fn non_printable_elements_cannot_be_styled() {
        let err = render_styled(&["Space"], &[], &[], &["1:bold"], true).expect_err("space");
        assert!(err.contains("not printable"), "got: {err}");
    }
}
