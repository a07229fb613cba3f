//! Results list: every analysis the backend holds, as one table.

mod cli;
mod view;

pub mod prelude {
    pub use super::cli::{results_root, ResultsArgs};
}

pub use view::{ResultsListView, RESULTS_FAILED_MESSAGE, RESULTS_LOADING_MESSAGE, RESULTS_TITLE};
