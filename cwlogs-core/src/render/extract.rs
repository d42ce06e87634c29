use serde_json::Value;
use std::borrow::Cow;

/// Keys checked, in order, for the human-readable part of a JSON payload.
pub const MESSAGE_KEYS: [&str; 3] = ["log", "message", "msg"];

pub const MAX_DISPLAY_CHARS: usize = 120;

pub const ELLIPSIS: &str = "…";

/// Best-effort message for display.
///
/// Text that does not look like a JSON object is returned unchanged
/// (minus trailing whitespace). JSON objects yield their first
/// `log`/`message`/`msg` field; anything else that looked like JSON is cut
/// to [`MAX_DISPLAY_CHARS`]. Never fails.
pub fn extract_message(raw: &str) -> Cow<'_, str> {
    let text = raw.trim_end();

    if !(text.starts_with('{') && text.ends_with('}')) {
        return Cow::Borrowed(text);
    }

    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(text) else {
        return truncate(text);
    };

    MESSAGE_KEYS
        .iter()
        .find_map(|key| fields.get(*key))
        .map(|value| match value {
            Value::String(s) => Cow::Owned(s.trim_end().to_string()),
            other => Cow::Owned(other.to_string()),
        })
        .unwrap_or_else(|| truncate(text))
}

fn truncate(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_DISPLAY_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
