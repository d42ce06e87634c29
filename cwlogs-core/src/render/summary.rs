use crate::query::FilterQuery;
use crate::render::{Colorizer, format_banner_time};
use crate::window::RelativeWindow;
use std::io::{self, Write};

pub fn render_stream_summary(
    out: &mut impl Write,
    stream_name: &str,
    event_count: usize,
) -> io::Result<()> {
    writeln!(out, "stream_name={stream_name}")?;
    writeln!(out, "log_events={event_count}")?;
    writeln!(out, "-----")
}

pub fn render_window_summary(
    out: &mut impl Write,
    window: &RelativeWindow,
    query: &FilterQuery,
    colors: &dyn Colorizer,
) -> io::Result<()> {
    writeln!(
        out,
        "{} last {}  ({} → {})",
        colors.label("Window :"),
        window,
        format_banner_time(query.range.start_ms),
        format_banner_time(query.range.end_ms),
    )?;
    writeln!(out, "{} {}", colors.label("Group  :"), query.log_group)?;
    writeln!(
        out,
        "{} {}",
        colors.label("Pattern:"),
        query.filter_pattern.as_deref().unwrap_or("(none)")
    )?;
    writeln!(out)
}

pub fn render_retrieved(
    out: &mut impl Write,
    event_count: usize,
    colors: &dyn Colorizer,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {event_count} event(s) retrieved",
        colors.label("✔")
    )?;
    writeln!(out, "-----")
}
