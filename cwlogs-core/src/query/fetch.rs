use crate::query::{
    FilterQuery, LogEvent, LogSource, QueryError, StreamEvents, Termination, paginate,
};
use tracing::{info, warn};

/// Read every event from the most recently written stream of `log_group`.
///
/// Returns `Ok(None)` when the group has no streams.
pub async fn fetch_latest_stream(
    source: &dyn LogSource,
    log_group: &str,
) -> Result<Option<StreamEvents>, QueryError> {
    let Some(stream_name) = source.latest_stream(log_group).await? else {
        warn!(log_group, "no log streams found");
        return Ok(None);
    };

    info!(log_group, stream = %stream_name, "reading latest stream");

    let stream = stream_name.as_str();
    let events = paginate(Termination::RepeatedToken, |token| async move {
        source.stream_page(log_group, stream, token.as_deref()).await
    })
    .await?;

    Ok(Some(StreamEvents {
        stream_name,
        events,
    }))
}

/// Read every event of `query.log_group` inside `query.range`.
pub async fn fetch_window(
    source: &dyn LogSource,
    query: &FilterQuery,
) -> Result<Vec<LogEvent>, QueryError> {
    info!(
        log_group = %query.log_group,
        start_ms = query.range.start_ms,
        end_ms = query.range.end_ms,
        window_ms = query.range.duration_ms(),
        filter_pattern = query.filter_pattern.as_deref().unwrap_or(""),
        "filtering log events"
    );

    paginate(Termination::AbsentToken, |token| async move {
        source.filter_page(query, token.as_deref()).await
    })
    .await
}
