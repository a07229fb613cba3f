use crate::client::{AnalysisService, ValidationError};
use crate::models::prelude::AnalysisResult;
use crate::render::prelude::ResultTable;
use crate::views::{Completion, FetchGuard, PendingRequest, RenderedView, ViewState};
use std::sync::Arc;
use tracing::debug;

pub const LOOKUP_TITLE: &str = "Get Result by Analysis ID";
pub const LOOKUP_FAILED_MESSAGE: &str = "Invalid Analysis ID or result not found";
pub const FETCHING_LABEL: &str = "Fetching...";
pub const GET_RESULT_LABEL: &str = "Get Result";

/// Fetches one analysis on demand by its id.
pub struct ResultLookupView<S> {
    service: Arc<S>,
    input: String,
    state: ViewState<AnalysisResult>,
    guard: FetchGuard,
}

impl<S> ResultLookupView<S>
where
    S: AnalysisService + 'static,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            input: String::new(),
            state: ViewState::Idle,
            guard: FetchGuard::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn state(&self) -> &ViewState<AnalysisResult> {
        &self.state
    }

    pub fn button_label(&self) -> &'static str {
        if self.state.is_loading() {
            FETCHING_LABEL
        } else {
            GET_RESULT_LABEL
        }
    }

    pub fn is_button_disabled(&self) -> bool {
        self.state.is_loading()
    }

    /// Start a lookup for the current input. A blank id fails immediately
    /// and returns `None`; nothing is sent and any lookup still in flight
    /// is abandoned.
    pub fn begin_lookup(&mut self) -> Option<PendingRequest<AnalysisResult>> {
        let id = self.input.trim().to_string();
        if id.is_empty() {
            self.guard.cancel_current();
            self.state = ViewState::Failed(ValidationError::MissingAnalysisId.to_string());
            return None;
        }

        self.state = ViewState::Loading;
        let ticket = self.guard.start();
        let service = Arc::clone(&self.service);
        Some(PendingRequest::new(
            ticket,
            Box::pin(async move { service.get_result_by_id(&id).await }),
        ))
    }

    /// Apply a completed lookup. Returns false when it was superseded or
    /// cancelled and the view did not change.
    pub fn apply(&mut self, completion: Completion<AnalysisResult>) -> bool {
        let Some(result) = self.guard.settle(completion) else {
            return false;
        };

        self.state = match result {
            Ok(record) => ViewState::Loaded(record),
            Err(e) => {
                debug!("Lookup failed: {:?}", e);
                ViewState::Failed(LOOKUP_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Run one lookup to completion.
    pub async fn lookup(&mut self) {
        if let Some(pending) = self.begin_lookup() {
            let completion = pending.resolve().await;
            self.apply(completion);
        }
    }

    pub fn close(&mut self) {
        self.guard.shutdown();
    }

    pub fn render(&self) -> RenderedView {
        let mut view = RenderedView::titled(LOOKUP_TITLE);
        match &self.state {
            ViewState::Idle => {}
            ViewState::Loading => view.loading = Some(FETCHING_LABEL.to_string()),
            ViewState::Loaded(record) => view.table = Some(ResultTable::single(record)),
            ViewState::Failed(message) => view.error = Some(message.clone()),
        }
        view
    }
}
