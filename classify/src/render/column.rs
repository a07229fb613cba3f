use crate::models::prelude::AnalysisResult;
use chrono::Local;
use itertools::Itertools;
use strum::{Display, EnumIter, IntoEnumIterator};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text shown in place of a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Placeholder {
    #[strum(serialize = "-")]
    Dash,
    #[strum(serialize = "None")]
    None,
    #[strum(serialize = "No")]
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Column {
    People,
    Tools,
    Brands,
    Products,
    Tone,
    Style,
    #[strum(serialize = "Sensitive Domains")]
    SensitiveDomains,
    Severity,
    #[strum(serialize = "Requires Review")]
    RequiresReview,
    #[strum(serialize = "Created At")]
    CreatedAt,
}

impl Column {
    pub fn all() -> Vec<Column> {
        Column::iter().collect()
    }

    pub fn header(&self) -> String {
        self.to_string()
    }

    pub fn placeholder(&self) -> Placeholder {
        match self {
            Column::SensitiveDomains | Column::Severity => Placeholder::None,
            Column::RequiresReview => Placeholder::No,
            _ => Placeholder::Dash,
        }
    }

    /// The raw cell value, or `None` when the record has nothing to show.
    fn extract(&self, record: &AnalysisResult) -> Option<String> {
        let entities = record.entities.as_ref();
        let safety = record.safety_flags.as_ref();
        match self {
            Column::People => join(entities.and_then(|e| e.people.as_deref())),
            Column::Tools => join(entities.and_then(|e| e.tools.as_deref())),
            Column::Brands => join(entities.and_then(|e| e.brands.as_deref())),
            Column::Products => join(entities.and_then(|e| e.products.as_deref())),
            Column::Tone => record.tone.as_ref().and_then(|t| t.primary.clone()),
            Column::Style => record.style.as_ref().and_then(|s| s.primary.clone()),
            Column::SensitiveDomains => join(safety.and_then(|s| s.sensitive_domains.as_deref())),
            Column::Severity => safety.and_then(|s| s.severity.clone()),
            Column::RequiresReview => record.requires_review().then(|| "Yes".to_string()),
            Column::CreatedAt => record
                .created_at
                .map(|ts| ts.with_timezone(&Local).format(CREATED_AT_FORMAT).to_string()),
        }
    }

    pub fn render(&self, record: &AnalysisResult) -> String {
        self.extract(record)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| self.placeholder().to_string())
    }
}

fn join(values: Option<&[String]>) -> Option<String> {
    values.map(|v| v.iter().join(", "))
}
