use cwlogs_core::cli::{WindowArgs, exit_code};
use cwlogs_core::query::testing::{RecordedCall, ScriptedLogSource};
use cwlogs_core::query::{FilterQuery, LogEvent, Page};
use cwlogs_core::window::TimeRange;
use integration_tests::harness::{NOW, capture_events, context, run_window};
use pretty_assertions::assert_eq;
use tracing::Level;

fn args(log_group: &str, window: &str) -> WindowArgs {
    WindowArgs {
        log_group: Some(log_group.to_string()),
        window: Some(window.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn one_hour_window_queries_the_last_hour() {
    let source = ScriptedLogSource::new().with_filter_page(Page::new(vec![], None));

    run_window(&source, &context(), &args("/aws/lambda/x", "1h"))
        .await
        .unwrap();

    assert_eq!(
        source.calls(),
        vec![RecordedCall::FilterPage {
            query: FilterQuery {
                log_group: "/aws/lambda/x".to_string(),
                range: TimeRange::new(NOW - 3_600_000, NOW),
                filter_pattern: None,
            },
            token: None,
        }]
    );
}

#[tokio::test]
async fn pages_are_followed_until_the_token_disappears() {
    let source = ScriptedLogSource::new()
        .with_filter_page(Page::new(
            vec![LogEvent::new(NOW - 2_000, r#"{"log":"first"}"#)],
            Some("A"),
        ))
        .with_filter_page(Page::new(
            vec![LogEvent::new(NOW - 1_000, "second").with_ingestion_time(NOW - 900)],
            None,
        ));

    let output = run_window(&source, &context(), &args("/aws/lambda/x", "15m"))
        .await
        .unwrap();

    assert_eq!(source.call_count(), 2);
    assert!(output.contains("2 event(s) retrieved"));
    assert!(output.contains("first"));
    assert!(!output.contains(r#"{"log""#));
    assert!(output.contains("second"));
    assert!(output.find("first") < output.find("second"));
}

#[tokio::test]
async fn empty_token_ends_the_query() {
    let source = ScriptedLogSource::new()
        .with_filter_page(Page::new(vec![LogEvent::new(NOW, "only")], Some("")));

    run_window(&source, &context(), &args("/aws/lambda/x", "5m"))
        .await
        .unwrap();

    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn malformed_window_fails_before_any_request() {
    let source = ScriptedLogSource::new();

    let err = run_window(&source, &context(), &args("/aws/lambda/x", "90s"))
        .await
        .unwrap_err();

    assert_eq!(exit_code(&err), 2);
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn missing_log_group_fails_before_any_request() {
    let source = ScriptedLogSource::new();
    let args = WindowArgs::default();

    let err = run_window(&source, &context(), &args).await.unwrap_err();

    assert_eq!(exit_code(&err), 2);
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn remote_failure_is_not_retried() {
    let source = ScriptedLogSource::new()
        .with_filter_page(Page::new(vec![LogEvent::new(NOW, "one")], Some("A")))
        .with_filter_failure("throttled");

    let err = run_window(&source, &context(), &args("/aws/lambda/x", "5m"))
        .await
        .unwrap_err();

    assert_eq!(exit_code(&err), 1);
    assert_eq!(source.call_count(), 2);
}

#[tokio::test]
async fn every_page_is_logged() {
    let capture = capture_events();
    let source = ScriptedLogSource::new()
        .with_filter_page(Page::new(vec![LogEvent::new(NOW, "a")], Some("A")))
        .with_filter_page(Page::new(
            vec![LogEvent::new(NOW, "b"), LogEvent::new(NOW, "c")],
            None,
        ));

    run_window(&source, &context(), &args("/aws/lambda/x", "5m"))
        .await
        .unwrap();

    let query = capture.with_message("filtering log events");
    assert_eq!(query.len(), 1);
    assert_eq!(query[0].level, Level::INFO);
    assert_eq!(query[0].field("window_ms"), Some("300000"));

    let pages = capture.with_message("fetched page");
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|page| page.level == Level::DEBUG));
    assert_eq!(pages[0].field("events"), Some("1"));
    assert_eq!(pages[0].field("next_token"), Some("true"));
    assert_eq!(pages[1].field("events"), Some("2"));
    assert_eq!(pages[1].field("next_token"), Some("false"));
}

#[tokio::test]
async fn events_from_several_streams_show_their_stream() {
    let source = ScriptedLogSource::new().with_filter_page(Page::new(
        vec![
            LogEvent::new(NOW - 1_000, "from a").with_stream("app/a"),
            LogEvent::new(NOW, "from b").with_stream("app/b"),
        ],
        None,
    ));

    let output = run_window(&source, &context(), &args("/aws/lambda/x", "5m"))
        .await
        .unwrap();

    assert!(output.contains("STREAM"));
    let rows: Vec<&str> = output.lines().filter(|l| l.starts_with("2024-")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("app/a") && rows[0].ends_with("from a"));
    assert!(rows[1].contains("app/b") && rows[1].ends_with("from b"));
}
