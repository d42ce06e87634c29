use clap::{Parser, Subcommand};
use cwlogs_core::cli::{self, ConfigCmd, GlobalArgs, LatestArgs, WindowArgs};
use cwlogs_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "cwlogs",
    version,
    about = "cwlogs: CloudWatch Logs runbook queries"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every event from the most recent stream in a log group
    Latest(LatestArgs),

    /// Print events from a log group within a relative time window
    Window(WindowArgs),

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let app = Cli::parse();

    init_logging();

    let result = match app.command {
        Command::Latest(args) => cli::run_latest(&app.global, &args),
        Command::Window(args) => cli::run_window(&app.global, &args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(err) = result {
        cli::report_error(&err);
        std::process::exit(cli::exit_code(&err));
    }
}
