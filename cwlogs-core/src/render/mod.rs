//! Turning fetched events into terminal output.
//!
//! There are two ways to show events:
//! - **Plain**: every message exactly as stored, one per line
//! - **Table**: event time, ingestion time, the source stream when known
//!   and a best-effort message pulled out of structured (JSON) payloads,
//!   in aligned columns, one line per event
//!
//! Colors are optional and go through a [`Colorizer`]; with the plain
//! colorizer the output is byte-for-byte what a pipe would want.

mod color;
mod extract;
mod plain;
mod summary;
mod table;
#[cfg(test)]
mod tests;
mod timestamp;

pub use color::{AnsiColorizer, Colorizer, PlainColorizer, select_colorizer, should_colorize};
pub use extract::{ELLIPSIS, MAX_DISPLAY_CHARS, MESSAGE_KEYS, extract_message};
pub use plain::render_plain;
pub use summary::{render_retrieved, render_stream_summary, render_window_summary};
pub use table::{HEADERS, LINE_BREAK, TableRow, render_table};
pub use timestamp::{format_banner_time, format_epoch_millis};

use crate::query::LogEvent;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Table,
}

pub fn render_events(
    out: &mut impl Write,
    mode: RenderMode,
    events: &[LogEvent],
    colors: &dyn Colorizer,
) -> io::Result<()> {
    match mode {
        RenderMode::Plain => render_plain(out, events),
        RenderMode::Table => render_table(out, events, colors),
    }
}
