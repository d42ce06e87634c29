mod error;
mod loader;
mod resolve;
#[cfg(test)]
mod tests;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, STARTER_CONFIG, load_config, load_config_file, parse_config};
pub use resolve::{LOG_GROUP_ENV, log_group_from_env, resolve_log_group, resolve_region, resolve_window};
pub use types::{ConfigFile, RunbookConfig};
pub use validate::validate_config;
