use crate::window::TimeRange;

/// Opaque pagination cursor handed back by CloudWatch.
pub type PageToken = Option<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Event time, epoch milliseconds.
    pub timestamp: i64,
    /// When CloudWatch ingested the event, epoch milliseconds.
    pub ingestion_time: Option<i64>,
    pub message: String,
    /// Originating stream, when the API reports it.
    pub stream: Option<String>,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            ingestion_time: None,
            message: message.into(),
            stream: None,
        }
    }

    pub fn with_ingestion_time(mut self, ingestion_time: i64) -> Self {
        self.ingestion_time = Some(ingestion_time);
        self
    }

    pub fn with_stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = Some(stream.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub events: Vec<LogEvent>,
    pub next_token: PageToken,
}

impl Page {
    pub fn new(events: Vec<LogEvent>, next_token: Option<&str>) -> Self {
        Self {
            events,
            next_token: next_token.map(str::to_string),
        }
    }
}

/// A `FilterLogEvents` query over one log group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub log_group: String,
    pub range: TimeRange,
    pub filter_pattern: Option<String>,
}

/// Everything read from a single stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEvents {
    pub stream_name: String,
    pub events: Vec<LogEvent>,
}
