use crate::cli::RunContext;
use crate::conf::{ConfigError, resolve_log_group, resolve_window};
use crate::query::{FilterQuery, LogSource, fetch_window};
use crate::render::{RenderMode, render_events, render_retrieved, render_window_summary};
use crate::window::RelativeWindow;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Log group to search (LOG_GROUP_NAME takes precedence)
    #[arg(long, short = 'g')]
    pub log_group: Option<String>,

    /// How far back to look, relative to now [default: config default_window, else 5m]
    #[arg(
        long,
        short = 'w',
        long_help = "How far back to look, relative to now.\n\
                     Format: <number><m|h|d|w>. Presets: 5m 10m 15m 30m 45m \
                     1h 2h 3h 6h 8h 12h 1d 2d 3d 4d 5d 6d 1w 2w 3w 4w.\n\
                     Defaults to default_window from the config file, else 5m."
    )]
    pub window: Option<String>,

    /// CloudWatch filter pattern applied server-side
    #[arg(long)]
    pub filter_pattern: Option<String>,

    /// Print raw messages instead of a table
    #[arg(long, conflicts_with = "table")]
    pub plain: bool,

    /// Print a table (the default)
    #[arg(long)]
    pub table: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub window: RelativeWindow,
    pub query: FilterQuery,
    pub mode: RenderMode,
}

impl WindowRequest {
    /// Resolve the window against `ctx.now_ms`, so the range is fixed
    /// before any request goes out.
    pub fn resolve(args: &WindowArgs, ctx: &RunContext) -> Result<Self, ConfigError> {
        let window = resolve_window(args.window.as_deref(), &ctx.config)?;
        let log_group = resolve_log_group(
            args.log_group.as_deref(),
            ctx.env_log_group.as_deref(),
            &ctx.config,
        )?;

        Ok(Self {
            window,
            query: FilterQuery {
                log_group,
                range: window.resolve_at(ctx.now_ms),
                filter_pattern: args
                    .filter_pattern
                    .clone()
                    .filter(|p| !p.trim().is_empty()),
            },
            mode: if args.plain {
                RenderMode::Plain
            } else {
                RenderMode::Table
            },
        })
    }
}

/// Print every event of the group inside the window.
pub async fn execute(
    source: &dyn LogSource,
    request: &WindowRequest,
    ctx: &RunContext,
    out: &mut impl Write,
) -> Result<()> {
    let colors = ctx.colors.as_ref();

    render_window_summary(out, &request.window, &request.query, colors)?;
    out.flush()?;

    let events = fetch_window(source, &request.query).await?;

    render_retrieved(out, events.len(), colors)?;
    render_events(out, request.mode, &events, colors)?;
    out.flush()?;

    Ok(())
}
