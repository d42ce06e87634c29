use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures talking to the log service. These are never retried; they end
/// the run.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{operation} failed for log group {log_group}")]
    Remote {
        operation: &'static str,
        log_group: String,
        #[source]
        source: BoxError,
    },
}

impl QueryError {
    pub fn remote(
        operation: &'static str,
        log_group: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Remote {
            operation,
            log_group: log_group.into(),
            source: source.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            QueryError::Remote { operation, .. } => operation,
        }
    }
}
