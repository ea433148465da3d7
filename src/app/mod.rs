//! Command dispatch for the `promptgen` binary.

mod commands;

use std::io::Write;

use promptgen::catalog::Catalog;
use promptgen::config::Config;
use promptgen::render::Renderer;

use crate::cli::Command;

pub(crate) use commands::render::{ElementBackspaces, ElementParam, ElementStyle};

/// Run one subcommand against `catalog`, writing results to `out`.
pub(crate) fn run(
    renderer: &Renderer,
    config: &Config,
    catalog: &Catalog,
    command: Command,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::List { json } => commands::list::run_list(renderer, config, catalog, json, out),
        Command::Show { name } => commands::show::run_show(renderer, catalog, &name, out),
        Command::Render {
            elements,
            params,
            backspaces,
            styles,
            raw,
        } => commands::render::run_render(
            renderer,
            catalog,
            &commands::render::RenderRequest {
                elements: &elements,
                params: &params,
                backspaces: &backspaces,
                styles: &styles,
                raw,
            },
            out,
        ),
    }
}
