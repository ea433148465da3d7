//! CLI entry point for promptgen.

mod app;
mod cli;

use std::io::IsTerminal;

use clap::Parser;
use promptgen::build_info::version_line;
use promptgen::catalog::catalog;
use promptgen::config::load_config;
use promptgen::render::Renderer;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROMPTGEN_LOG";

fn main() {
    let args = cli::Args::parse();
    init_logging();
    tracing::debug!("{}", version_line());

    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    tracing::debug!(source = ?loaded.source, "using configuration");

    // Apply CLI overrides.
    if args.no_color || !std::io::stdout().is_terminal() {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(msg) = app::run(&renderer, &config, catalog(), args.command, &mut out) {
        renderer.error(&msg);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
