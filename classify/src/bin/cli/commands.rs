//! Command routing for the binary.

use crate::{Command, VersionArgs};
use anyhow::Result;
use colored::Colorize;
use entity_classify::prelude::*;
use entity_classify::report_stdout;
use std::io::Write;
use tracing::instrument;

/// Route a command to its handler.
pub async fn handle_command(found_config: &FoundConfig, command: &Command) -> Result<i32> {
    match command {
        Command::Upload(args) => upload_root(found_config, args).await,
        Command::Results(args) => results_root(found_config, args).await,
        Command::Result(args) => result_root(found_config, args).await,
        Command::Analyze(args) => analyze_root(found_config, args).await,
        Command::Health => health_root(found_config).await,
        Command::Version(args) => print_version(args).await,
    }
}

#[instrument("classify version", skip_all)]
async fn print_version(args: &VersionArgs) -> Result<i32> {
    if args.short {
        report_stdout!("classify {}", env!("CARGO_PKG_VERSION"));
    } else {
        report_stdout!(
            "{}: {:60}",
            "Version".white().bold(),
            env!("CARGO_PKG_VERSION")
        );
        report_stdout!(
            "{}: {:60}",
            "Build Timestamp".white().bold(),
            env!("VERGEN_BUILD_TIMESTAMP")
        );
        report_stdout!(
            "{}: {:60}",
            "Describe".white().bold(),
            env!("VERGEN_GIT_DESCRIBE")
        );
        report_stdout!(
            "{}: {:60}",
            "Commit SHA".white().bold(),
            env!("VERGEN_GIT_SHA")
        );
        report_stdout!(
            "{}: {:60}",
            "Commit Date".white().bold(),
            env!("VERGEN_GIT_COMMIT_DATE")
        );
    }

    Ok(0)
}
