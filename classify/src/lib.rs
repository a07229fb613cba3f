//! Client for the entity classification backend.
//!
//! The library holds the service client, the typed result model, and the
//! views that drive uploading a file, listing analyses, and looking one up.
//! The `classify` binary is a thin wrapper that maps subcommands onto those
//! views.

pub mod analyze;
pub mod client;
pub mod health;
pub mod lookup;
pub mod models;
pub mod render;
pub mod results;
pub mod shared;
pub mod upload;
pub mod views;

pub mod prelude {
    pub use crate::analyze::prelude::*;
    pub use crate::health::health_root;
    pub use crate::lookup::prelude::*;
    pub use crate::models::prelude::*;
    pub use crate::render::prelude::*;
    pub use crate::results::prelude::*;
    pub use crate::shared::prelude::*;
    pub use crate::upload::prelude::*;
}

pub use client::{AnalysisService, HttpAnalysisService, ServiceError, ValidationError};
pub use shared::prelude::{ConfigOptions, FoundConfig, LoggingOpts};

/// Preferred way to output data to users. This macro will write the output to tracing for debugging
/// and to stdout using the global stdout writer. Because we use the stdout writer, the calls
/// will all be async.
#[macro_export]
macro_rules! report_stdout {
    ($($arg:tt)*) => {
        tracing::info!(target="stdout", $($arg)*);
        writeln!($crate::prelude::STDOUT_WRITER.write().await, $($arg)*).ok()
    };
}
