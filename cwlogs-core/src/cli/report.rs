use crate::conf::{ConfigError, DEFAULT_CONFIG_FILE, LOG_GROUP_ENV};
use crate::window::{PRESET_WINDOWS, WindowError};

/// Exit status for a failed command: 2 for configuration problems, 1 for
/// everything else (remote and IO failures).
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<WindowError>().is_some() {
        2
    } else {
        1
    }
}

/// Print an error chain to stderr, followed by a hint when one applies.
pub fn report_error(err: &anyhow::Error) {
    eprintln!("error: {err:#}");

    if let Some(hint) = err.downcast_ref::<ConfigError>().and_then(config_error_hint) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<String> {
    match err {
        ConfigError::MissingLogGroup => Some(format!(
            "Choose a log group with --log-group, or set {LOG_GROUP_ENV}.\n\
             \n\
             Example:\n\
             \n\
             cwlogs window --log-group /aws/lambda/my-function --window 15m"
        )),

        ConfigError::UnknownLogGroup { allowed, .. } => Some(format!(
            "Configured log groups:\n{}\n\
             \n\
             Add the group to log_groups in the config file, or set {LOG_GROUP_ENV} to bypass the list.",
            allowed
                .iter()
                .map(|g| format!("  {g}"))
                .collect::<Vec<_>>()
                .join("\n")
        )),

        ConfigError::InvalidWindow(_) => Some(format!(
            "Windows are written as <number><m|h|d|w>.\n\
             \n\
             Presets: {}",
            PRESET_WINDOWS.join(" ")
        )),

        ConfigError::AlreadyExists { .. } => {
            Some("Remove the existing file or pass a different path.".to_string())
        }

        ConfigError::Parse { .. } => Some(format!(
            "Expected keys: region, default_window, log_groups.\n\
             \n\
             Run `cwlogs config init` to write a starter {DEFAULT_CONFIG_FILE}."
        )),

        _ => None,
    }
}
