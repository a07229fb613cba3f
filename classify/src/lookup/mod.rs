//! Result lookup: one analysis, fetched on demand by id.

mod cli;
mod view;

pub mod prelude {
    pub use super::cli::{result_root, ResultArgs};
}

pub use view::{
    ResultLookupView, FETCHING_LABEL, GET_RESULT_LABEL, LOOKUP_FAILED_MESSAGE, LOOKUP_TITLE,
};
