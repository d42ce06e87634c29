mod check;
mod init;

pub use check::*;
use clap::Subcommand;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = "cwlogs.hcl")]
        path: PathBuf,
    },

    /// Write a starter config file
    Init {
        /// Path of the file to create
        #[arg(default_value = "cwlogs.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match cmd {
        ConfigCmd::Check { path } => check(&path, &mut out),
        ConfigCmd::Init { path } => init(&path, &mut out),
    }
}
