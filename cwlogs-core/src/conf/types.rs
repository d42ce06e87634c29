use crate::window::RelativeWindow;
use serde::{Deserialize, Serialize};

/// The config file as written on disk.
///
/// ```hcl
/// region = "eu-west-1"
/// default_window = "15m"
/// log_groups = ["/aws/lambda/logdna_cloudwatch"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub default_window: Option<String>,

    /// Log groups operators may pick from. Empty means any group.
    #[serde(default)]
    pub log_groups: Vec<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunbookConfig {
    pub region: Option<String>,
    pub default_window: RelativeWindow,
    pub log_groups: Vec<String>,
}

impl RunbookConfig {
    pub fn allows_log_group(&self, name: &str) -> bool {
        self.log_groups.is_empty() || self.log_groups.iter().any(|g| g == name)
    }
}
