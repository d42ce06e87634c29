use crate::conf::{ConfigError, ConfigFile, RunbookConfig};
use crate::window::RelativeWindow;
use std::collections::HashSet;

/// Check a parsed file and turn it into a [`RunbookConfig`].
///
/// Fail-fast: the first problem found is returned. Values are trimmed.
pub fn validate_config(file: ConfigFile) -> Result<RunbookConfig, ConfigError> {
    let region = match file.region {
        Some(region) if region.trim().is_empty() => return Err(ConfigError::EmptyRegion),
        Some(region) => Some(region.trim().to_string()),
        None => None,
    };

    let default_window = match file.default_window {
        Some(token) => token.trim().parse::<RelativeWindow>()?,
        None => RelativeWindow::default(),
    };

    let mut seen = HashSet::new();
    let mut log_groups = Vec::with_capacity(file.log_groups.len());

    for (index, name) in file.log_groups.iter().enumerate() {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyLogGroup { index });
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateLogGroup {
                name: name.to_string(),
            });
        }
        log_groups.push(name.to_string());
    }

    Ok(RunbookConfig {
        region,
        default_window,
        log_groups,
    })
}
