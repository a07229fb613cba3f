//! Command line client for the entity classification backend.

mod cli;

use clap::{Parser, Subcommand};
use entity_classify::prelude::{AnalyzeArgs, ResultArgs, ResultsArgs, UploadArgs};
use entity_classify::{ConfigOptions, LoggingOpts};
use human_panic::setup_panic;
use tracing::{Level, enabled, error, info};

/// classify
///
/// Upload transcripts for entity classification, then browse the
/// analyses the backend produced.
#[derive(Parser)]
#[clap(author, version, about)]
pub(crate) struct Cli {
    #[clap(flatten)]
    pub logging: LoggingOpts,

    #[clap(flatten)]
    pub config: ConfigOptions,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub(crate) struct VersionArgs {
    #[arg(long, action)]
    pub short: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Upload a transcript or media file for analysis
    #[clap(alias("u"))]
    Upload(UploadArgs),
    /// List every analysis
    #[clap(alias("l"))]
    Results(ResultsArgs),
    /// Get one analysis by its Analysis ID
    #[clap(alias("r"))]
    Result(ResultArgs),
    /// Analyze transcript text and print the result
    #[clap(alias("a"))]
    Analyze(AnalyzeArgs),
    /// Check that the backend is reachable
    Health,
    /// Print version info and exit
    #[clap(alias("v"))]
    Version(VersionArgs),
}

#[tokio::main]
async fn main() {
    setup_panic!();

    dotenvy::dotenv().ok();

    let opts = Cli::parse();
    let run_id = opts.config.get_run_id();

    let configured_logger = match opts.logging.configure_logging(&run_id, "root").await {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Unable to configure logging. {}", e);
            std::process::exit(2);
        }
    };

    let error_code = run_command(opts, &run_id).await;

    if error_code != 0 || enabled!(Level::DEBUG) {
        info!(target: "user", "More detailed logs at {}", configured_logger.log_location.display());
    }

    drop(configured_logger);
    std::process::exit(error_code);
}

async fn run_command(opts: Cli, run_id: &str) -> i32 {
    let config = match opts.config.load_config(run_id).await {
        Ok(c) => c,
        Err(e) => {
            error!(target: "always", "Failed to load configuration: {}", e);
            return 2;
        }
    };

    cli::commands::handle_command(&config, &opts.command)
        .await
        .unwrap_or_else(|e| {
            error!(target: "always", "Critical Error. {}", e);
            1
        })
}
