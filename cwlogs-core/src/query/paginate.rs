use crate::query::{LogEvent, Page, PageToken, QueryError};
use std::future::Future;
use tracing::debug;

/// When a pagination loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop once a response repeats the previous response's token. Two
    /// absent tokens count as a repeat, so a first page without a token
    /// also ends the loop.
    ///
    /// `GetLogEvents` needs this: at the end of a stream it keeps handing
    /// back the same forward token rather than omitting it.
    RepeatedToken,

    /// Stop once a response carries no token (or an empty one).
    /// `FilterLogEvents` omits the token when the result set is complete.
    AbsentToken,
}

impl Termination {
    pub fn is_done(self, previous: Option<&str>, next: Option<&str>) -> bool {
        match self {
            Termination::RepeatedToken => previous == next,
            Termination::AbsentToken => next.is_none_or(str::is_empty),
        }
    }
}

/// Drain a paginated operation into one ordered event list.
///
/// `fetch` receives the cursor to send, `None` for the first request and
/// whenever the previous token was empty. Errors from `fetch` abort the
/// loop and are returned as-is; events gathered so far are dropped.
pub async fn paginate<F, Fut>(termination: Termination, mut fetch: F) -> Result<Vec<LogEvent>, QueryError>
where
    F: FnMut(PageToken) -> Fut,
    Fut: Future<Output = Result<Page, QueryError>>,
{
    let mut events = Vec::new();
    let mut previous: PageToken = None;
    let mut cursor: PageToken = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(cursor.take()).await?;
        pages += 1;

        debug!(
            page = pages,
            events = page.events.len(),
            next_token = page.next_token.is_some(),
            "fetched page"
        );

        events.extend(page.events);

        let next = page.next_token;
        if termination.is_done(previous.as_deref(), next.as_deref()) {
            break;
        }

        cursor = next.clone().filter(|token| !token.is_empty());
        previous = next;
    }

    debug!(pages, events = events.len(), "pagination complete");
    Ok(events)
}
