use crate::conf::{ConfigError, ConfigFile, RunbookConfig, validate_config};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "cwlogs.hcl";

pub const STARTER_CONFIG: &str = r#"# cwlogs configuration

# AWS region. Omit to use AWS_REGION / the active profile.
# region = "eu-west-1"

# Window used by `cwlogs window` when --window is not given.
# One of: 5m 10m 15m 30m 45m 1h 2h 3h 6h 8h 12h 1d 2d 3d 4d 5d 6d 1w 2w 3w 4w
default_window = "5m"

# Log groups operators may choose with --log-group, e.g.
#   log_groups = ["/aws/lambda/my-function"]
# Leave empty to allow any group. LOG_GROUP_NAME always takes precedence.
log_groups = []
"#;

/// Load configuration.
///
/// With an explicit path the file must exist. Without one,
/// [`DEFAULT_CONFIG_FILE`] in the working directory is used when present
/// and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<RunbookConfig, ConfigError> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                load_config_file(default)
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                Ok(RunbookConfig::default())
            }
        }
    }
}

pub fn load_config_file(path: &Path) -> Result<RunbookConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(&text, path)?;

    tracing::debug!(
        path = %path.display(),
        log_groups = config.log_groups.len(),
        default_window = %config.default_window,
        "config loaded"
    );

    Ok(config)
}

pub fn parse_config(text: &str, path: &Path) -> Result<RunbookConfig, ConfigError> {
    let file: ConfigFile = hcl::from_str(text).map_err(|e| ConfigError::parse(path, e))?;
    validate_config(file)
}
