//! Command implementations behind the `cwlogs` binary.
//!
//! Every query command runs in two phases. First its inputs are resolved
//! into a request (log group, window, render mode); any problem there is a
//! configuration error and nothing touches the network. Then the request is
//! executed against a [`LogSource`](crate::query::LogSource) and rendered.

pub mod args;
pub mod conf;
mod context;
pub mod latest;
mod report;
pub mod window;

pub use args::GlobalArgs;
pub use conf::ConfigCmd;
pub use context::RunContext;
pub use latest::{LatestArgs, LatestRequest};
pub use report::{config_error_hint, exit_code, report_error};
pub use window::{WindowArgs, WindowRequest};

use crate::aws::CloudWatchLogs;
use crate::conf::resolve_region;
use anyhow::{Context, Result};
use std::io;
use tokio::runtime::{Builder, Runtime};

/// `cwlogs latest`
pub fn run_latest(global: &GlobalArgs, args: &LatestArgs) -> Result<()> {
    let ctx = RunContext::from_global(global)?;
    let request = LatestRequest::resolve(args, &ctx)?;
    let region = resolve_region(global.region.as_deref(), &ctx.config);

    build_runtime()?.block_on(async {
        let source = CloudWatchLogs::connect(region).await;
        let mut out = io::stdout().lock();
        latest::execute(&source, &request, &ctx, &mut out).await
    })
}

/// `cwlogs window`
pub fn run_window(global: &GlobalArgs, args: &WindowArgs) -> Result<()> {
    let ctx = RunContext::from_global(global)?;
    let request = WindowRequest::resolve(args, &ctx)?;
    let region = resolve_region(global.region.as_deref(), &ctx.config);

    build_runtime()?.block_on(async {
        let source = CloudWatchLogs::connect(region).await;
        let mut out = io::stdout().lock();
        window::execute(&source, &request, &ctx, &mut out).await
    })
}

/// Queries are strictly sequential, so a single-threaded runtime is all
/// the SDK needs.
fn build_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")
}
