use crate::client::AnalysisService;
use crate::models::prelude::AnalysisResult;
use crate::render::prelude::ResultTable;
use crate::views::{Completion, FetchGuard, PendingRequest, RenderedView, ViewState};
use std::sync::Arc;
use tracing::debug;

pub const RESULTS_TITLE: &str = "Analysis Results";
pub const RESULTS_LOADING_MESSAGE: &str = "Loading results...";
pub const RESULTS_FAILED_MESSAGE: &str = "Failed to fetch results";

/// Every analysis, fetched once when the view is activated.
pub struct ResultsListView<S> {
    service: Arc<S>,
    state: ViewState<Vec<AnalysisResult>>,
    guard: FetchGuard,
}

impl<S> ResultsListView<S>
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

    pub fn state(&self) -> &ViewState<Vec<AnalysisResult>> {
        &self.state
    }

    /// Enter the loading state and issue the list request.
    pub fn begin(&mut self) -> PendingRequest<Vec<AnalysisResult>> {
        self.state = ViewState::Loading;
        let ticket = self.guard.start();
        let service = Arc::clone(&self.service);
        PendingRequest::new(ticket, Box::pin(async move { service.list_results().await }))
    }

    /// Apply a completed list request. Returns false when it was superseded
    /// or cancelled and the view did not change.
    pub fn apply(&mut self, completion: Completion<Vec<AnalysisResult>>) -> bool {
        let Some(result) = self.guard.settle(completion) else {
            return false;
        };

        self.state = match result {
            Ok(results) => ViewState::Loaded(results),
            Err(e) => {
                debug!("Listing results failed: {:?}", e);
                ViewState::Failed(RESULTS_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Fetch and apply the list once.
    pub async fn activate(&mut self) {
        let pending = self.begin();
        let completion = pending.resolve().await;
        self.apply(completion);
    }

    /// Tear the view down. Any request still in flight is cancelled.
    pub fn close(&mut self) {
        self.guard.shutdown();
    }

    pub fn render(&self) -> RenderedView {
        let mut view = RenderedView::titled(RESULTS_TITLE);
        match &self.state {
            ViewState::Idle => {}
            ViewState::Loading => view.loading = Some(RESULTS_LOADING_MESSAGE.to_string()),
            ViewState::Loaded(results) => view.table = Some(ResultTable::from_records(results)),
            ViewState::Failed(message) => {
                view.error = Some(message.clone());
                view.table = Some(ResultTable::empty());
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{FailureReason, MockAnalysisService, ServiceError};
    use crate::models::prelude::*;
    use crate::render::prelude::TableRow;

    fn record(id: &str, person: &str) -> AnalysisResult {
        AnalysisResultBuilder::default()
            .analysis_id(id)
            .entities(
                EntitiesBuilder::default()
                    .people(vec![person.to_string()])
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_activate_calls_list_once() {
        let mut service = MockAnalysisService::new();
        service
            .expect_list_results()
            .times(1)
            .returning(|| Ok(vec![record("1", "Alice")]));

        let mut view = ResultsListView::new(Arc::new(service));
        view.activate().await;

        assert_eq!(1, view.state().loaded().unwrap().len());
    }

    #[tokio::test]
    async fn test_loading_renders_only_indicator() {
        let service = MockAnalysisService::new();
        let mut view = ResultsListView::new(Arc::new(service));
        let _pending = view.begin();

        let rendered = view.render();
        assert_eq!(Some("Loading results...".to_string()), rendered.loading);
        assert_eq!(None, rendered.error);
        assert_eq!(None, rendered.table);
    }

    #[tokio::test]
    async fn test_empty_list_renders_no_results_row() {
        let mut service = MockAnalysisService::new();
        service.expect_list_results().returning(|| Ok(vec![]));

        let mut view = ResultsListView::new(Arc::new(service));
        view.activate().await;

        let table = view.render().table.unwrap();
        assert_eq!(
            vec![TableRow::Empty {
                span: 10,
                text: "No results found".to_string()
            }],
            table.rows
        );
    }

    #[tokio::test]
    async fn test_rows_follow_backend_order() {
        let mut service = MockAnalysisService::new();
        service.expect_list_results().returning(|| {
            Ok(vec![
                record("b", "Bob"),
                record("a", "Alice"),
                record("c", "Carol"),
            ])
        });

        let mut view = ResultsListView::new(Arc::new(service));
        view.activate().await;

        let table = view.render().table.unwrap();
        let people: Vec<String> = table
            .record_rows()
            .iter()
            .map(|cells| cells[0].clone())
            .collect();
        assert_eq!(vec!["Bob", "Alice", "Carol"], people);
    }

    #[tokio::test]
    async fn test_failure_renders_error_and_empty_table() {
        let mut service = MockAnalysisService::new();
        service.expect_list_results().returning(|| {
            Err(ServiceError::Fetch {
                reason: FailureReason::Transport("connection refused".to_string()),
            })
        });

        let mut view = ResultsListView::new(Arc::new(service));
        view.activate().await;

        let rendered = view.render();
        assert_eq!(Some("Failed to fetch results".to_string()), rendered.error);
        assert_eq!(None, rendered.loading);
        let table = rendered.table.unwrap();
        assert!(table.record_rows().is_empty());
    }

    #[tokio::test]
    async fn test_superseded_response_is_dropped() {
        let mut service = MockAnalysisService::new();
        // The superseded request is cancelled before it is polled, so only
        // the second one reaches the service.
        service
            .expect_list_results()
            .times(1)
            .returning(|| Ok(vec![record("latest", "Someone")]));

        let mut view = ResultsListView::new(Arc::new(service));
        let first = view.begin();
        let second = view.begin();

        let second = second.resolve().await;
        assert!(view.apply(second));

        let first = first.resolve().await;
        assert!(!view.apply(first));
        assert_eq!("latest", view.state().loaded().unwrap()[0].analysis_id);
    }

    #[tokio::test]
    async fn test_closed_view_ignores_response() {
        let mut service = MockAnalysisService::new();
        service.expect_list_results().returning(|| Ok(vec![]));

        let mut view = ResultsListView::new(Arc::new(service));
        let pending = view.begin();
        view.close();

        let completion = pending.resolve().await;
        assert!(!view.apply(completion));
        assert!(view.state().is_loading());
    }
}
