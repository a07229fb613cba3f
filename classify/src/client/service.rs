use super::error::ServiceError;
use crate::models::prelude::{AnalysisResult, AnalyzeRequest, AnalyzeResponse};
use crate::upload::SelectedFile;
use async_trait::async_trait;
use mockall::automock;

pub const UPLOAD_PATH: &str = "/api/transcript/upload";
pub const RESULTS_PATH: &str = "/api/entity-classification/results";
pub const ANALYZE_PATH: &str = "/api/entity-classification/analyze";
pub const HEALTH_PATH: &str = "/health";

/// The network operations the client performs against the analysis backend.
///
/// Each call is a single attempt. Nothing is retried or cancelled
/// by the implementation; views decide what to do with late answers.
#[automock]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Send the file as a multipart upload. The backend analyses it later, so
    /// no record comes back.
    async fn submit(&self, file: &SelectedFile) -> Result<(), ServiceError>;

    /// Every analysis the backend knows about, in the order it sent them.
    async fn list_results(&self) -> Result<Vec<AnalysisResult>, ServiceError>;

    /// A single analysis. Blank ids are rejected without a request.
    async fn get_result_by_id(&self, id: &str) -> Result<AnalysisResult, ServiceError>;

    /// Synchronous analysis of raw transcript text.
    async fn analyze_transcript(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalyzeResponse, ServiceError>;

    async fn health(&self) -> bool;
}
