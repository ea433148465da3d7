//! `promptgen list`.

use std::io::Write;

use promptgen::catalog::{Catalog, ElementSummary, ElementType};
use promptgen::config::Config;
use promptgen::render::{visible, Renderer};

pub(crate) fn run_list(
    renderer: &Renderer,
    config: &Config,
    catalog: &Catalog,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    if json {
        let summaries: Vec<ElementSummary<'_>> =
            catalog.list().iter().map(ElementType::summary).collect();
        let text = serde_json::to_string_pretty(&summaries)
            .map_err(|e| format!("failed to serialize catalog: {e}"))?;
        return writeln!(out, "{text}").map_err(write_error);
    }

    let groups = if config.display.separators {
        catalog.groups()
    } else {
        vec![catalog.list()]
    };
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            renderer.separator(out).map_err(write_error)?;
        }
        for element_type in group.iter() {
            write_entry(renderer, config, element_type, out).map_err(write_error)?;
        }
    }
    Ok(())
}

fn write_entry(
    renderer: &Renderer,
    config: &Config,
    element_type: &ElementType,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let summary = element_type.summary();
    let mut value = visible(&summary.fragment);
    if !summary.parameters.is_empty() {
        let ids: Vec<&str> = summary.parameters.iter().map(|p| p.id).collect();
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(&format!("[{}]", ids.join(", ")));
    }
    renderer.field(out, summary.name, &value)?;
    if config.display.descriptions {
        renderer.detail(out, summary.description)?;
    }
    Ok(())
}

pub(crate) fn write_error(e: std::io::Error) -> String {
    format!("failed to write output: {e}")
}
