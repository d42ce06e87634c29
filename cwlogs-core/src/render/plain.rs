use crate::query::LogEvent;
use std::io::{self, Write};

pub fn render_plain(out: &mut impl Write, events: &[LogEvent]) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", event.message)?;
    }
    Ok(())
}
