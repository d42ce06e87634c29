use clap::Args;
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to the cwlogs config file [default: ./cwlogs.hcl when present]
    #[arg(long, global = true, env = "CWLOGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// AWS region (overrides the config file and the SDK default chain)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
