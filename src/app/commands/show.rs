//! `promptgen show <NAME>`.

use std::io::Write;

use promptgen::catalog::Catalog;
use promptgen::render::{visible, Renderer};

use super::list::write_error;
use super::lookup;

pub(crate) fn run_show(
    renderer: &Renderer,
    catalog: &Catalog,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), String> {
    let summary = lookup(catalog, name)?.summary();
    let parameters = if summary.parameters.is_empty() {
        "none".to_string()
    } else {
        summary
            .parameters
            .iter()
            .map(|spec| format!("{} ({})", spec.id, spec.label))
            .collect::<Vec<_>>()
            .join(", ")
    };

    renderer.section(out, summary.name).map_err(write_error)?;
    renderer
        .field(out, "fragment", &visible(&summary.fragment))
        .map_err(write_error)?;
    renderer
        .field(out, "preview", &visible(&summary.preview))
        .map_err(write_error)?;
    renderer
        .field(out, "printable", if summary.printable { "yes" } else { "no" })
        .map_err(write_error)?;
    renderer
        .field(out, "parameters", &parameters)
        .map_err(write_error)?;
    renderer
        .detail(out, summary.description)
        .map_err(write_error)
}
