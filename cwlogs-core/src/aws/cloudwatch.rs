use crate::aws::make_client;
use crate::query::{FilterQuery, LogEvent, LogSource, Page, QueryError};
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::types::{FilteredLogEvent, OrderBy, OutputLogEvent};
use tracing::debug;

pub struct CloudWatchLogs {
    client: Client,
}

impl CloudWatchLogs {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(region: Option<&str>) -> Self {
        Self::new(make_client(region).await)
    }
}

#[async_trait]
impl LogSource for CloudWatchLogs {
    async fn latest_stream(&self, log_group: &str) -> Result<Option<String>, QueryError> {
        let output = self
            .client
            .describe_log_streams()
            .log_group_name(log_group)
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .limit(1)
            .send()
            .await
            .map_err(|e| {
                QueryError::remote(
                    "DescribeLogStreams",
                    log_group,
                    aws_sdk_cloudwatchlogs::Error::from(e),
                )
            })?;

        Ok(output
            .log_streams()
            .first()
            .and_then(|stream| stream.log_stream_name())
            .map(str::to_string))
    }

    async fn stream_page(
        &self,
        log_group: &str,
        stream: &str,
        token: Option<&str>,
    ) -> Result<Page, QueryError> {
        let output = self
            .client
            .get_log_events()
            .log_group_name(log_group)
            .log_stream_name(stream)
            .set_next_token(token.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                QueryError::remote(
                    "GetLogEvents",
                    log_group,
                    aws_sdk_cloudwatchlogs::Error::from(e),
                )
            })?;

        Ok(Page {
            events: output
                .events()
                .iter()
                .map(from_output_event)
                .collect(),
            next_token: output.next_forward_token().map(str::to_string),
        })
    }

    async fn filter_page(
        &self,
        query: &FilterQuery,
        token: Option<&str>,
    ) -> Result<Page, QueryError> {
        let output = self
            .client
            .filter_log_events()
            .log_group_name(&query.log_group)
            .start_time(query.range.start_ms)
            .end_time(query.range.end_ms)
            .set_filter_pattern(query.filter_pattern.clone())
            .set_next_token(token.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                QueryError::remote(
                    "FilterLogEvents",
                    &query.log_group,
                    aws_sdk_cloudwatchlogs::Error::from(e),
                )
            })?;

        Ok(Page {
            events: output.events().iter().map(from_filtered_event).collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// The stream is left unset: `GetLogEvents` reads a single stream, which the
/// caller already reports.
pub(super) fn from_output_event(event: &OutputLogEvent) -> LogEvent {
    LogEvent {
        timestamp: timestamp_or_epoch(event.timestamp(), None),
        ingestion_time: event.ingestion_time(),
        message: event.message().unwrap_or_default().to_string(),
        stream: None,
    }
}

pub(super) fn from_filtered_event(event: &FilteredLogEvent) -> LogEvent {
    LogEvent {
        timestamp: timestamp_or_epoch(event.timestamp(), event.event_id()),
        ingestion_time: event.ingestion_time(),
        message: event.message().unwrap_or_default().to_string(),
        stream: event.log_stream_name().map(str::to_string),
    }
}

/// CloudWatch always stamps events; a missing value is shown as the epoch.
fn timestamp_or_epoch(timestamp: Option<i64>, event_id: Option<&str>) -> i64 {
    timestamp.unwrap_or_else(|| {
        debug!(event_id, "event has no timestamp; showing epoch");
        0
    })
}
