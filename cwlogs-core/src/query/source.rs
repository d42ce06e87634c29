use crate::query::{FilterQuery, Page, QueryError};
use async_trait::async_trait;

/// The remote log store.
///
/// Each method is one API round-trip. Callers drive pagination themselves
/// by passing back the token from the previous [`Page`]; `None` requests
/// the first page.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Name of the stream with the most recent event, or `None` when the
    /// group has no streams.
    async fn latest_stream(&self, log_group: &str) -> Result<Option<String>, QueryError>;

    async fn stream_page(
        &self,
        log_group: &str,
        stream: &str,
        token: Option<&str>,
    ) -> Result<Page, QueryError>;

    async fn filter_page(
        &self,
        query: &FilterQuery,
        token: Option<&str>,
    ) -> Result<Page, QueryError>;
}
