use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record per processed submission.
///
/// Records are read-only on the client. A view that wants fresher data
/// fetches a new copy instead of editing the one it holds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct AnalysisResult {
    pub analysis_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Classification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Classification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_flags: Option<SafetyFlags>,
}

/// Named entities grouped by category.
///
/// `people`, `tools`, `brands` and `products` are the categories the client
/// displays. Anything else the backend sends (e.g. `companies`) is kept in
/// `other` so a re-serialized record does not lose data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,

    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

/// A single classification label, used for both tone and style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Classification {
    pub fn primary(label: &str) -> Self {
        Self {
            primary: Some(label.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct SafetyFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_domains: Option<Vec<String>>,

    /// `None` means no severity was assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_review: Option<bool>,
}

impl SafetyFlags {
    pub fn requires_review(&self) -> bool {
        self.requires_review.unwrap_or(false)
    }
}

impl AnalysisResult {
    pub fn requires_review(&self) -> bool {
        self.safety_flags
            .as_ref()
            .is_some_and(SafetyFlags::requires_review)
    }
}
