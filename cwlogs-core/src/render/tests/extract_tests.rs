use crate::render::{ELLIPSIS, MAX_DISPLAY_CHARS, extract_message};
use pretty_assertions::assert_eq;

#[test]
fn log_key_is_extracted() {
    assert_eq!(extract_message(r#"{"log":"hello"}"#), "hello");
}

#[test]
fn keys_are_checked_in_priority_order() {
    assert_eq!(
        extract_message(r#"{"msg":"third","message":"second","log":"first"}"#),
        "first"
    );
    assert_eq!(
        extract_message(r#"{"msg":"third","message":"second"}"#),
        "second"
    );
    assert_eq!(extract_message(r#"{"level":"info","msg":"third"}"#), "third");
}

#[test]
fn non_string_values_are_rendered_as_json() {
    assert_eq!(extract_message(r#"{"message":42}"#), "42");
    assert_eq!(extract_message(r#"{"log":{"nested":true}}"#), r#"{"nested":true}"#);
    assert_eq!(extract_message(r#"{"msg":null}"#), "null");
}

#[test]
fn container_logs_drop_trailing_newline() {
    // Arrange: fluent-bit style record
    let raw = r#"{"log":"GET /health 200\n","stream":"stdout"}"#;

    // Act / Assert
    assert_eq!(extract_message(raw), "GET /health 200");
}

#[test]
fn json_without_known_keys_is_returned_raw() {
    assert_eq!(extract_message(r#"{"other":"x"}"#), r#"{"other":"x"}"#);
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(extract_message("plain text"), "plain text");
}

#[test]
fn long_plain_text_is_not_truncated() {
    // Arrange
    let raw = "x".repeat(MAX_DISPLAY_CHARS * 2);

    // Act / Assert
    assert_eq!(extract_message(&raw), raw);
}

#[test]
fn long_json_without_known_keys_is_truncated() {
    // Arrange
    let raw = format!(r#"{{"payload":"{}"}}"#, "a".repeat(200));

    // Act
    let extracted = extract_message(&raw);

    // Assert
    let expected = format!("{}{ELLIPSIS}", raw.chars().take(MAX_DISPLAY_CHARS).collect::<String>());
    assert_eq!(extracted, expected);
    assert_eq!(extracted.chars().count(), MAX_DISPLAY_CHARS + 1);
}

#[test]
fn malformed_json_degrades_to_raw_text() {
    assert_eq!(extract_message("{not json}"), "{not json}");
}

#[test]
fn malformed_json_is_truncated_on_char_boundaries() {
    // Arrange: multi-byte characters across the cut point
    let raw = format!("{{{}}}", "é".repeat(150));

    // Act
    let extracted = extract_message(&raw);

    // Assert
    assert!(extracted.ends_with(ELLIPSIS));
    assert_eq!(extracted.chars().count(), MAX_DISPLAY_CHARS + 1);
}

#[test]
fn json_arrays_are_not_objects() {
    assert_eq!(extract_message(r#"[{"log":"x"}]"#), r#"[{"log":"x"}]"#);
}
