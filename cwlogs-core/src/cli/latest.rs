use crate::cli::RunContext;
use crate::conf::{ConfigError, resolve_log_group};
use crate::query::{LogSource, fetch_latest_stream};
use crate::render::{RenderMode, render_events, render_stream_summary};
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug, Clone, Default)]
pub struct LatestArgs {
    /// Log group to read (LOG_GROUP_NAME takes precedence)
    #[arg(long, short = 'g')]
    pub log_group: Option<String>,

    /// Show a table with timestamps instead of raw messages
    #[arg(long, conflicts_with = "plain")]
    pub table: bool,

    /// Print raw messages (the default)
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRequest {
    pub log_group: String,
    pub mode: RenderMode,
}

impl LatestRequest {
    pub fn resolve(args: &LatestArgs, ctx: &RunContext) -> Result<Self, ConfigError> {
        let log_group = resolve_log_group(
            args.log_group.as_deref(),
            ctx.env_log_group.as_deref(),
            &ctx.config,
        )?;

        Ok(Self {
            log_group,
            mode: if args.table {
                RenderMode::Table
            } else {
                RenderMode::Plain
            },
        })
    }
}

/// Print every event of the group's most recent stream.
pub async fn execute(
    source: &dyn LogSource,
    request: &LatestRequest,
    ctx: &RunContext,
    out: &mut impl Write,
) -> Result<()> {
    let Some(stream) = fetch_latest_stream(source, &request.log_group).await? else {
        writeln!(out, "No log streams found in log group: {}", request.log_group)?;
        return Ok(());
    };

    render_stream_summary(out, &stream.stream_name, stream.events.len())?;
    render_events(out, request.mode, &stream.events, ctx.colors.as_ref())?;
    out.flush()?;

    Ok(())
}
