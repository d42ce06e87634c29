use crate::conf::{ConfigError, RunbookConfig};
use crate::window::RelativeWindow;
use std::env;

/// Overrides whatever log group was chosen on the command line.
pub const LOG_GROUP_ENV: &str = "LOG_GROUP_NAME";

pub fn log_group_from_env() -> Option<String> {
    env::var(LOG_GROUP_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Pick the log group to query.
///
/// The environment override wins and is not checked against the
/// configured list. A requested group must be in the list when one is
/// configured.
pub fn resolve_log_group(
    requested: Option<&str>,
    env_override: Option<&str>,
    config: &RunbookConfig,
) -> Result<String, ConfigError> {
    if let Some(name) = env_override.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(name.to_string());
    }

    let name = requested
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingLogGroup)?;

    if !config.allows_log_group(name) {
        return Err(ConfigError::UnknownLogGroup {
            name: name.to_string(),
            allowed: config.log_groups.clone(),
        });
    }

    Ok(name.to_string())
}

/// `--window`, then the configured default. An invalid token is an error,
/// never a silent fallback.
pub fn resolve_window(
    requested: Option<&str>,
    config: &RunbookConfig,
) -> Result<RelativeWindow, ConfigError> {
    match requested {
        Some(token) => Ok(token.parse::<RelativeWindow>()?),
        None => Ok(config.default_window),
    }
}

pub fn resolve_region<'a>(requested: Option<&'a str>, config: &'a RunbookConfig) -> Option<&'a str> {
    requested
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or(config.region.as_deref())
}
