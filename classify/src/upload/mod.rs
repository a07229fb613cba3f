//! Upload flow: pick a file, submit it, report the outcome.

mod cli;
mod file;
mod flow;

pub mod prelude {
    pub use super::cli::{upload_root, UploadArgs};
}

pub use file::{FileSelectionError, SelectedFile, ACCEPTED_EXTENSIONS};
pub use flow::{
    PendingUpload, SubmitStart, UploadFlow, UploadState, UPLOADING_MESSAGE,
    UPLOAD_FAILED_MESSAGE, UPLOAD_SUCCEEDED_MESSAGE,
};
