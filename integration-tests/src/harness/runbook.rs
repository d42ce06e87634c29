use cwlogs_core::cli::{LatestArgs, LatestRequest, RunContext, WindowArgs, WindowRequest};
use cwlogs_core::conf::RunbookConfig;
use cwlogs_core::query::LogSource;

/// 2024-03-01T12:00:00.000Z
pub const NOW: i64 = 1_709_294_400_000;

/// Resolve and execute `cwlogs window` against `source`, capturing stdout.
///
/// Resolution failures are returned before `source` is touched.
pub async fn run_window(
    source: &dyn LogSource,
    ctx: &RunContext,
    args: &WindowArgs,
) -> anyhow::Result<String> {
    let request = WindowRequest::resolve(args, ctx)?;
    let mut out = Vec::new();
    cwlogs_core::cli::window::execute(source, &request, ctx, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

/// Resolve and execute `cwlogs latest` against `source`, capturing stdout.
pub async fn run_latest(
    source: &dyn LogSource,
    ctx: &RunContext,
    args: &LatestArgs,
) -> anyhow::Result<String> {
    let request = LatestRequest::resolve(args, ctx)?;
    let mut out = Vec::new();
    cwlogs_core::cli::latest::execute(source, &request, ctx, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

pub fn context() -> RunContext {
    RunContext::fixed(RunbookConfig::default(), NOW)
}
