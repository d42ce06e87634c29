use crate::query::testing::{RecordedCall, ScriptedLogSource};
use crate::query::{FilterQuery, LogEvent, Page, fetch_latest_stream, fetch_window};
use crate::window::TimeRange;
use pretty_assertions::assert_eq;

fn query() -> FilterQuery {
    FilterQuery {
        log_group: "/aws/lambda/x".to_string(),
        range: TimeRange::new(1_000, 2_000),
        filter_pattern: None,
    }
}

#[tokio::test]
async fn latest_stream_events_are_concatenated_in_order() {
    // Arrange
    let source = ScriptedLogSource::new()
        .with_latest_stream("2024/01/01/[$LATEST]abc")
        .with_stream_page(Page::new(
            vec![LogEvent::new(1, "first"), LogEvent::new(2, "second")],
            Some("f/1"),
        ))
        .with_stream_page(Page::new(vec![LogEvent::new(3, "third")], Some("f/1")));

    // Act
    let stream = fetch_latest_stream(&source, "/aws/lambda/x")
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(stream.stream_name, "2024/01/01/[$LATEST]abc");
    let messages: Vec<_> = stream.events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(
        source.calls(),
        vec![
            RecordedCall::LatestStream {
                log_group: "/aws/lambda/x".to_string()
            },
            RecordedCall::StreamPage {
                log_group: "/aws/lambda/x".to_string(),
                stream: "2024/01/01/[$LATEST]abc".to_string(),
                token: None,
            },
            RecordedCall::StreamPage {
                log_group: "/aws/lambda/x".to_string(),
                stream: "2024/01/01/[$LATEST]abc".to_string(),
                token: Some("f/1".to_string()),
            },
        ]
    );
}

#[tokio::test]
async fn group_without_streams_yields_none() {
    // Arrange
    let source = ScriptedLogSource::new();

    // Act
    let stream = fetch_latest_stream(&source, "/aws/lambda/empty").await.unwrap();

    // Assert
    assert!(stream.is_none());
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn stream_failures_propagate() {
    // Arrange
    let source = ScriptedLogSource::new()
        .with_latest_stream("s")
        .with_stream_page(Page::new(vec![LogEvent::new(1, "a")], Some("t1")))
        .with_stream_failure("throttled");

    // Act
    let err = fetch_latest_stream(&source, "/g").await.unwrap_err();

    // Assert
    assert_eq!(err.operation(), "GetLogEvents");
    assert_eq!(err.to_string(), "GetLogEvents failed for log group /g");
}

#[tokio::test]
async fn window_query_follows_tokens_until_absent() {
    // Arrange
    let source = ScriptedLogSource::new()
        .with_filter_page(Page::new(vec![LogEvent::new(1_100, "a")], Some("n1")))
        .with_filter_page(Page::new(vec![LogEvent::new(1_200, "b")], None));

    // Act
    let events = fetch_window(&source, &query()).await.unwrap();

    // Assert
    assert_eq!(events.len(), 2);
    assert_eq!(
        source.calls(),
        vec![
            RecordedCall::FilterPage {
                query: query(),
                token: None
            },
            RecordedCall::FilterPage {
                query: query(),
                token: Some("n1".to_string())
            },
        ]
    );
}

#[tokio::test]
async fn window_query_failures_propagate() {
    // Arrange
    let source = ScriptedLogSource::new().with_filter_failure("AccessDenied");

    // Act
    let err = fetch_window(&source, &query()).await.unwrap_err();

    // Assert
    assert_eq!(err.operation(), "FilterLogEvents");
    assert_eq!(
        std::error::Error::source(&err).unwrap().to_string(),
        "AccessDenied"
    );
}
