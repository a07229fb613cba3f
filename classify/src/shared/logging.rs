use clap::{ArgGroup, Parser, ValueEnum};
use indicatif::ProgressStyle;
use lazy_static::lazy_static;
use std::fs::File;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_indicatif::filter::{hide_indicatif_span_fields, IndicatifFilter};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::format::{DefaultFields, Format, PrettyFields};
use tracing_subscriber::{filter::filter_fn, prelude::*, Registry};

pub const LOG_DIR: &str = "/tmp/entity-classify";

/// Console targets. Anything else only reaches the log file.
pub const USER_TARGET: &str = "user";
pub const ALWAYS_TARGET: &str = "always";
pub const PROGRESS_TARGET: &str = "progress";

const SPINNER_TEMPLATE: &str = "{span_child_prefix} {spinner:.green} {wide_msg} [{elapsed_precise}]";

lazy_static! {
    /// User output goes through here so it is printed above any spinner.
    pub static ref STDOUT_WRITER: Arc<RwLock<Box<dyn Write + Sync + Send>>> =
        Arc::new(RwLock::new(Box::new(std::io::stdout())));
}

/// Spinner shown while a single request is in flight.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Unable to create log file {}. {error}", path.display())]
    LogFile {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error(transparent)]
    AlreadyConfigured(#[from] SetGlobalDefaultError),
}

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    /// Set the progress output. Use plain to disable the spinner.
    #[arg(
        long,
        global(true),
        default_value = "auto",
        env = "CLASSIFY_OUTPUT_PROGRESS"
    )]
    pub progress: LoggingProgress,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoggingProgress {
    /// Show the spinner only when stdout is a terminal
    Auto,
    /// No spinner, no redrawn output
    Plain,
    /// Always show the spinner
    Tty,
}

impl LoggingProgress {
    fn shows_spinner(&self) -> bool {
        match self {
            LoggingProgress::Auto => std::io::stdout().is_terminal(),
            LoggingProgress::Plain => false,
            LoggingProgress::Tty => true,
        }
    }
}

/// Decides which events the console prints.
#[derive(Debug, Clone, Copy)]
struct ConsoleFilter {
    level: LevelFilter,
    spinner: bool,
}

impl ConsoleFilter {
    fn accepts(&self, target: &str, level: &Level) -> bool {
        match target {
            USER_TARGET => self.level >= *level,
            ALWAYS_TARGET => true,
            // Progress lines stand in for the spinner when there is none.
            PROGRESS_TARGET => !self.spinner,
            _ => false,
        }
    }
}

/// Keeps the file writer alive. Drop it last so the log file is flushed.
pub struct ConfiguredLogger {
    _guard: WorkerGuard,
    pub log_location: PathBuf,
}

pub fn log_file_path(prefix: &str, run_id: &str) -> PathBuf {
    Path::new(LOG_DIR).join(format!("classify-{}-{}.log", prefix, run_id))
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Install the global subscriber: console, spinner, and a plain-text log
    /// file named after the run id.
    pub async fn configure_logging(
        &self,
        run_id: &str,
        prefix: &str,
    ) -> Result<ConfiguredLogger, LoggingError> {
        let log_location = log_file_path(prefix, run_id);
        let log_file = std::fs::create_dir_all(LOG_DIR)
            .and_then(|_| File::create(&log_location))
            .map_err(|error| LoggingError::LogFile {
                path: log_location.clone(),
                error,
            })?;
        let (file_writer, guard) =
            tracing_appender::non_blocking(strip_ansi_escapes::Writer::new(log_file));

        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_ansi(false)
            .with_writer(file_writer);

        let indicatif_layer = IndicatifLayer::new()
            .with_span_field_formatter(hide_indicatif_span_fields(DefaultFields::new()))
            .with_progress_style(spinner_style());
        let console_writer = indicatif_layer.get_stdout_writer();
        *STDOUT_WRITER.write().await = Box::new(indicatif_layer.get_stdout_writer());

        let filter = ConsoleFilter {
            level: self.to_level_filter(),
            spinner: self.progress.shows_spinner(),
        };
        let console_layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().with_target(false).without_time().compact())
            .with_writer(console_writer)
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| {
                filter.accepts(metadata.target(), metadata.level())
            }));

        let spinner_layer = filter
            .spinner
            .then(|| indicatif_layer.with_filter(IndicatifFilter::new(false)));

        let subscriber = Registry::default()
            .with(console_layer)
            .with(spinner_layer)
            .with(file_layer);
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(ConfiguredLogger {
            _guard: guard,
            log_location,
        })
    }
}
