mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod schema;
mod services;
#[cfg(test)]
mod test_support;
mod tracker;
mod ui;
mod workflow;

use clap::{Parser, Subcommand};

use crate::cmd::config as config_cmd;
use crate::cmd::run::{self as run_cmd, RunArgs};
use crate::error::AppResult;
use crate::ui::report::render_error;

#[derive(Parser)]
#[command(
    name = "linear-sync",
    author,
    version,
    about = "Create Linear ticket hierarchies from structured JSON files"
)]
struct Cli {
    /// Log remote calls and retries to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure Linear API credentials.
    Init,
    /// Remove stored configuration.
    Reset,
    /// Show the stored configuration (API key masked).
    Show,
    /// Create ticket hierarchy in Linear from a JSON file.
    Run(RunArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(error) = run(cli.command).await {
        eprintln!("{}", render_error(&error));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Init => config_cmd::init().await,
        Commands::Reset => config_cmd::reset(),
        Commands::Show => config_cmd::show(),
        Commands::Run(args) => run_cmd::run(args).await,
    }
}
