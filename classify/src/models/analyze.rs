use super::analysis_result::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Body for `POST /api/entity-classification/analyze`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
}

impl AnalyzeRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            transcript_text: text.into(),
            ..Default::default()
        }
    }
}

/// The analyze endpoint answers with the record fields inlined next to a
/// `status` marker. It does not include `created_at`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub record: AnalysisResult,
}
