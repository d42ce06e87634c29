use crate::query::LogEvent;
use crate::render::{Colorizer, extract_message, format_epoch_millis};
use std::io::{self, Write};

pub const HEADERS: [&str; 4] = ["EVENT TIME", "INGESTED", "STREAM", "MESSAGE"];

/// Stands in for line breaks inside a table cell.
pub const LINE_BREAK: &str = "⏎";

const GUTTER: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub event_time: String,
    pub ingested: String,
    pub stream: String,
    /// Always a single line.
    pub message: String,
}

impl TableRow {
    pub fn from_event(event: &LogEvent) -> Self {
        Self {
            event_time: format_epoch_millis(event.timestamp),
            ingested: event
                .ingestion_time
                .map(format_epoch_millis)
                .unwrap_or_default(),
            stream: event.stream.clone().unwrap_or_default(),
            message: single_line(&extract_message(&event.message)),
        }
    }
}

/// Header plus one row per event. The message column is last and left
/// unpadded; the other columns are padded before styling so escape codes
/// never shift alignment.
///
/// The STREAM column only appears when at least one event names its
/// stream, which is the case for filter queries spanning many streams.
pub fn render_table(
    out: &mut impl Write,
    events: &[LogEvent],
    colors: &dyn Colorizer,
) -> io::Result<()> {
    let rows: Vec<TableRow> = events.iter().map(TableRow::from_event).collect();
    let show_stream = rows.iter().any(|r| !r.stream.is_empty());

    let time_width = column_width(HEADERS[0], rows.iter().map(|r| r.event_time.as_str()));
    let ingested_width = column_width(HEADERS[1], rows.iter().map(|r| r.ingested.as_str()));
    let stream_width = column_width(HEADERS[2], rows.iter().map(|r| r.stream.as_str()));

    write!(
        out,
        "{}{GUTTER}{}{GUTTER}",
        colors.header(&pad(HEADERS[0], time_width)),
        colors.header(&pad(HEADERS[1], ingested_width)),
    )?;
    if show_stream {
        write!(out, "{}{GUTTER}", colors.header(&pad(HEADERS[2], stream_width)))?;
    }
    writeln!(out, "{}", colors.header(HEADERS[3]))?;

    for row in &rows {
        write!(
            out,
            "{}{GUTTER}{}{GUTTER}",
            colors.timestamp(&pad(&row.event_time, time_width)),
            colors.muted(&pad(&row.ingested, ingested_width)),
        )?;
        if show_stream {
            write!(out, "{}{GUTTER}", colors.muted(&pad(&row.stream, stream_width)))?;
        }
        writeln!(out, "{}", row.message)?;
    }

    Ok(())
}

fn single_line(message: &str) -> String {
    message
        .lines()
        .map(|line| line.replace('\r', LINE_BREAK))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
