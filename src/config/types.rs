//! Configuration data model.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
}

/// Display / rendering preferences for CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
    /// Print element descriptions in `promptgen list`.
    pub descriptions: bool,
    /// Draw group separators between palette groups.
    pub separators: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            descriptions: true,
            separators: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub(super) display: DisplayConfig,
}

/// Where the configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`.
    Explicit(PathBuf),
    /// `./promptgen.toml`.
    Local,
    /// `<config dir>/promptgen/promptgen.toml`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

/// Configuration plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
