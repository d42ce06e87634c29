//! An in-memory [`LogSource`] that replays scripted pages and records
//! every call made against it.

use crate::query::{FilterQuery, LogSource, Page, QueryError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    LatestStream {
        log_group: String,
    },
    StreamPage {
        log_group: String,
        stream: String,
        token: Option<String>,
    },
    FilterPage {
        query: FilterQuery,
        token: Option<String>,
    },
}

enum Scripted {
    Page(Page),
    Fail(String),
}

#[derive(Default)]
pub struct ScriptedLogSource {
    latest_stream: Option<String>,
    stream_pages: Mutex<VecDeque<Scripted>>,
    filter_pages: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest_stream(mut self, stream: impl Into<String>) -> Self {
        self.latest_stream = Some(stream.into());
        self
    }

    pub fn with_stream_page(self, page: Page) -> Self {
        push(&self.stream_pages, Scripted::Page(page));
        self
    }

    pub fn with_stream_failure(self, message: impl Into<String>) -> Self {
        push(&self.stream_pages, Scripted::Fail(message.into()));
        self
    }

    pub fn with_filter_page(self, page: Page) -> Self {
        push(&self.filter_pages, Scripted::Page(page));
        self
    }

    pub fn with_filter_failure(self, message: impl Into<String>) -> Self {
        push(&self.filter_pages, Scripted::Fail(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl LogSource for ScriptedLogSource {
    async fn latest_stream(&self, log_group: &str) -> Result<Option<String>, QueryError> {
        self.record(RecordedCall::LatestStream {
            log_group: log_group.to_string(),
        });
        Ok(self.latest_stream.clone())
    }

    async fn stream_page(
        &self,
        log_group: &str,
        stream: &str,
        token: Option<&str>,
    ) -> Result<Page, QueryError> {
        self.record(RecordedCall::StreamPage {
            log_group: log_group.to_string(),
            stream: stream.to_string(),
            token: token.map(str::to_string),
        });
        next_page(&self.stream_pages, "GetLogEvents", log_group)
    }

    async fn filter_page(
        &self,
        query: &FilterQuery,
        token: Option<&str>,
    ) -> Result<Page, QueryError> {
        self.record(RecordedCall::FilterPage {
            query: query.clone(),
            token: token.map(str::to_string),
        });
        next_page(&self.filter_pages, "FilterLogEvents", &query.log_group)
    }
}

fn next_page(
    script: &Mutex<VecDeque<Scripted>>,
    operation: &'static str,
    log_group: &str,
) -> Result<Page, QueryError> {
    match lock(script).pop_front() {
        Some(Scripted::Page(page)) => Ok(page),
        Some(Scripted::Fail(message)) => Err(QueryError::remote(
            operation,
            log_group,
            io::Error::other(message),
        )),
        None => Err(QueryError::remote(
            operation,
            log_group,
            io::Error::other("script exhausted"),
        )),
    }
}

fn push(script: &Mutex<VecDeque<Scripted>>, item: Scripted) {
    lock(script).push_back(item);
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
