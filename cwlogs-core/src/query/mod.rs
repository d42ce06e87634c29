//! Paginated log queries.
//!
//! A query runs as a strictly sequential loop: request a page, append its
//! events, inspect the returned cursor, and decide whether to continue.
//! The decision rule differs per CloudWatch operation (see
//! [`Termination`]).
//!
//! LogSource (remote)
//! paginate
//! Vec<LogEvent>
//! render

mod error;
mod fetch;
mod paginate;
mod source;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
#[cfg(test)]
mod tests;
mod types;

pub use error::{BoxError, QueryError};
pub use fetch::{fetch_latest_stream, fetch_window};
pub use paginate::{Termination, paginate};
pub use source::LogSource;
pub use types::{FilterQuery, LogEvent, Page, PageToken, StreamEvents};
