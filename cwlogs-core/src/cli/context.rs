use crate::cli::GlobalArgs;
use crate::conf::{ConfigError, RunbookConfig, load_config, log_group_from_env};
use crate::render::{Colorizer, PlainColorizer, select_colorizer};
use chrono::Utc;

/// Everything a command needs besides its own arguments.
pub struct RunContext {
    pub config: RunbookConfig,
    pub colors: Box<dyn Colorizer>,
    /// Value of `LOG_GROUP_NAME`, if set.
    pub env_log_group: Option<String>,
    /// Invocation time, epoch milliseconds. Sampled once per run.
    pub now_ms: i64,
}

impl RunContext {
    pub fn from_global(global: &GlobalArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            config: load_config(global.config.as_deref())?,
            colors: select_colorizer(global.no_color),
            env_log_group: log_group_from_env(),
            now_ms: Utc::now().timestamp_millis(),
        })
    }

    /// A context with no environment influence, plain output and a fixed
    /// clock.
    pub fn fixed(config: RunbookConfig, now_ms: i64) -> Self {
        Self {
            config,
            colors: Box::new(PlainColorizer),
            env_log_group: None,
            now_ms,
        }
    }

    pub fn with_env_log_group(mut self, log_group: impl Into<String>) -> Self {
        self.env_log_group = Some(log_group.into());
        self
    }
}
