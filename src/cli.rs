//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use promptgen::build_info::LONG_VERSION;

use crate::app::{ElementBackspaces, ElementParam, ElementStyle};

/// Compose Bash prompt strings from a catalog of prompt elements.
#[derive(Debug, Parser)]
#[command(name = "promptgen", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./promptgen.toml or ~/.config/promptgen/promptgen.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every element type, grouped as in the palette.
    List {
        /// Emit element metadata as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show one element type in detail.
    Show {
        /// Exact element type name, e.g. "Time (HH:MM)".
        name: String,
    },
    /// Compose element types in order and print the prompt and its preview.
    Render {
        /// Element type names, in prompt order.
        #[arg(required = true, num_args = 1..)]
        elements: Vec<String>,

        /// Parameter for the N-th element (1-based), e.g. `2:text=hello`.
        #[arg(short = 'p', long = "param", value_name = "N:KEY=VALUE")]
        params: Vec<ElementParam>,

        /// Trailing backspaces for the N-th element (1-based), e.g. `3:1`.
        #[arg(short = 'b', long = "backspaces", value_name = "N:COUNT")]
        backspaces: Vec<ElementBackspaces>,

        /// Style for the N-th element: an attribute (`1:bold`) or a color
        /// (`1:fg=red`, `2:bg=light-blue`). Repeat to combine.
        #[arg(short = 's', long = "style", value_name = "N:STYLE")]
        styles: Vec<ElementStyle>,

        /// Print only the prompt string.
        #[arg(long)]
        raw: bool,
    },
}
