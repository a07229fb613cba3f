//! Synchronous analysis of raw transcript text.

mod cli;
mod view;

pub mod prelude {
    pub use super::cli::{analyze_root, AnalyzeArgs};
}

pub use view::{AnalyzeView, ANALYZE_FAILED_MESSAGE, ANALYZE_TITLE, ANALYZING_MESSAGE};
