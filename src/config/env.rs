//! Environment overrides.
//!
//! `NO_COLOR` (any non-empty value) disables color. `PROMPTGEN_COLOR` sets it
//! explicitly and wins over `NO_COLOR`.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if env_lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        config.display.color = false;
    }
    if let Some(raw) = env_lookup("PROMPTGEN_COLOR") {
        config.display.color = parse_bool(&raw).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid PROMPTGEN_COLOR value `{raw}`: expected true or false"
            ))
        })?;
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
