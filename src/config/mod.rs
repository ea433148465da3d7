//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`PROMPTGEN_COLOR`, `NO_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./promptgen.toml in the current directory
//! 4. $XDG_CONFIG_HOME/promptgen/promptgen.toml (or ~/.config/promptgen/promptgen.toml)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod env;
mod sources;
mod types;

use env::apply_env_overrides;
use sources::read_config_text_with_sources;
pub use sources::config_root_dir;
use types::FileConfig;
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = Config {
        display: parsed.display,
    };
    apply_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(?source, "loaded configuration");
    Ok(LoadedConfig { config, source })
}
