use super::file::SelectedFile;
use crate::client::{AnalysisService, ServiceError, ValidationError};
use crate::views::BoxedRequest;
use std::sync::Arc;
use tracing::debug;

pub const UPLOADING_MESSAGE: &str = "Uploading...";
pub const UPLOAD_SUCCEEDED_MESSAGE: &str = "File uploaded successfully";
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Selected,
    Uploading,
    Succeeded,
    Failed,
}

/// What pressing submit did.
#[derive(Debug)]
pub enum SubmitStart {
    /// No file is selected. The state is unchanged.
    Rejected(ValidationError),
    /// An upload is already in flight; nothing new was sent.
    Busy,
    Started(PendingUpload),
}

/// An upload that has been started but not yet sent. Resolve it with
/// [`PendingUpload::send`] and hand the outcome to [`UploadFlow::finish`].
pub struct PendingUpload {
    send: BoxedRequest<()>,
}

impl std::fmt::Debug for PendingUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingUpload").finish_non_exhaustive()
    }
}

impl PendingUpload {
    pub async fn send(self) -> Result<(), ServiceError> {
        self.send.await
    }
}

/// File selection and submission. Fire-and-forget: a successful upload does
/// not fetch the resulting record.
pub struct UploadFlow<S> {
    service: Arc<S>,
    state: UploadState,
    file: Option<SelectedFile>,
    status: Option<String>,
}

impl<S> UploadFlow<S>
where
    S: AnalysisService + 'static,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: UploadState::Idle,
            file: None,
            status: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The submit control is disabled only while an upload is in flight.
    pub fn is_submit_disabled(&self) -> bool {
        self.state == UploadState::Uploading
    }

    /// Replace the selected file. Ignored while uploading, so the in-flight
    /// upload keeps reporting on the file it sent.
    pub fn pick(&mut self, file: SelectedFile) -> bool {
        if self.state == UploadState::Uploading {
            debug!("Ignoring file pick while an upload is in flight");
            return false;
        }

        debug!("Selected {}", file.name);
        self.file = Some(file);
        self.state = UploadState::Selected;
        self.status = None;
        true
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_submit_disabled() {
            return SubmitStart::Busy;
        }

        let Some(file) = self.file.clone() else {
            self.status = Some(ValidationError::NoFileSelected.to_string());
            return SubmitStart::Rejected(ValidationError::NoFileSelected);
        };

        self.state = UploadState::Uploading;
        self.status = Some(UPLOADING_MESSAGE.to_string());

        let service = Arc::clone(&self.service);
        SubmitStart::Started(PendingUpload {
            send: Box::pin(async move { service.submit(&file).await }),
        })
    }

    /// Apply the result of the in-flight upload. Does nothing when no upload
    /// is in flight.
    pub fn finish(&mut self, outcome: &Result<(), ServiceError>) {
        if self.state != UploadState::Uploading {
            return;
        }

        match outcome {
            Ok(()) => {
                self.state = UploadState::Succeeded;
                self.status = Some(UPLOAD_SUCCEEDED_MESSAGE.to_string());
            }
            Err(e) => {
                debug!("Upload failed: {:?}", e);
                self.state = UploadState::Failed;
                self.status = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Press submit and wait for the upload to finish.
    pub async fn submit(&mut self) -> Result<(), ServiceError> {
        match self.begin_submit() {
            SubmitStart::Rejected(e) => Err(e.into()),
            SubmitStart::Busy => Ok(()),
            SubmitStart::Started(pending) => {
                let outcome = pending.send().await;
                self.finish(&outcome);
                outcome
            }
        }
    }
}
