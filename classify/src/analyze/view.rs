use crate::client::{AnalysisService, ValidationError};
use crate::models::prelude::{AnalyzeRequest, AnalyzeResponse};
use crate::render::prelude::ResultTable;
use crate::views::{Completion, FetchGuard, PendingRequest, RenderedView, ViewState};
use std::sync::Arc;
use tracing::debug;

pub const ANALYZE_TITLE: &str = "Analyze Transcript";
pub const ANALYZING_MESSAGE: &str = "Analyzing...";
pub const ANALYZE_FAILED_MESSAGE: &str = "Error analyzing transcript";

/// Submits raw transcript text for synchronous analysis.
pub struct AnalyzeView<S> {
    service: Arc<S>,
    state: ViewState<AnalyzeResponse>,
    guard: FetchGuard,
}

impl<S> AnalyzeView<S>
where
    S: AnalysisService + 'static,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            state: ViewState::Idle,
            guard: FetchGuard::new(),
        }
    }

    pub fn state(&self) -> &ViewState<AnalyzeResponse> {
        &self.state
    }

    /// Blank transcript text fails locally and returns `None`.
    pub fn begin(&mut self, request: AnalyzeRequest) -> Option<PendingRequest<AnalyzeResponse>> {
        if request.transcript_text.trim().is_empty() {
            self.guard.cancel_current();
            self.state = ViewState::Failed(ValidationError::MissingTranscriptText.to_string());
            return None;
        }

        self.state = ViewState::Loading;
        let ticket = self.guard.start();
        let service = Arc::clone(&self.service);
        Some(PendingRequest::new(
            ticket,
            Box::pin(async move { service.analyze_transcript(&request).await }),
        ))
    }

    pub fn apply(&mut self, completion: Completion<AnalyzeResponse>) -> bool {
        let Some(result) = self.guard.settle(completion) else {
            return false;
        };

        self.state = match result {
            Ok(response) => ViewState::Loaded(response),
            Err(e) => {
                debug!("Analyze failed: {:?}", e);
                ViewState::Failed(ANALYZE_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub async fn analyze(&mut self, request: AnalyzeRequest) {
        if let Some(pending) = self.begin(request) {
            let completion = pending.resolve().await;
            self.apply(completion);
        }
    }

    pub fn close(&mut self) {
        self.guard.shutdown();
    }

    pub fn render(&self) -> RenderedView {
        let mut view = RenderedView::titled(ANALYZE_TITLE);
        match &self.state {
            ViewState::Idle => {}
            ViewState::Loading => view.loading = Some(ANALYZING_MESSAGE.to_string()),
            ViewState::Loaded(response) => view.table = Some(ResultTable::single(&response.record)),
            ViewState::Failed(message) => view.error = Some(message.clone()),
        }
        view
    }
}
