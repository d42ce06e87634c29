use crate::window::WindowError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file already exists: {path}")]
    AlreadyExists { path: PathBuf },

    // Parsing
    #[error("failed to parse HCL in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("log_groups[{index}] is empty")]
    EmptyLogGroup { index: usize },

    #[error("duplicate log group: {name}")]
    DuplicateLogGroup { name: String },

    #[error("region must not be empty")]
    EmptyRegion,

    #[error("invalid window")]
    InvalidWindow(#[from] WindowError),

    // Selection
    #[error("log group is not set")]
    MissingLogGroup,

    #[error("log group '{name}' is not one of the configured log groups")]
    UnknownLogGroup { name: String, allowed: Vec<String> },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
