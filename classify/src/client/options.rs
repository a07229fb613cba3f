//! CLI-independent options for building a service client.
//!
//! ```rust
//! use entity_classify::client::options::ClientOptions;
//!
//! let options = ClientOptions::default();
//! assert_eq!("http://localhost:8080/", options.base_url.as_str());
//!
//! let options = ClientOptions::with_base_url("https://analysis.internal:9000").unwrap();
//! assert_eq!("analysis.internal", options.base_url.host_str().unwrap());
//! ```

use super::error::ValidationError;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("Base URL `{url}` is not a valid URL: {reason}")]
    Invalid { url: String, reason: String },
    #[error("Base URL `{url}` must use http or https")]
    UnsupportedScheme { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Origin of the analysis backend. Endpoint paths are appended to it.
    pub base_url: Url,
}

impl ClientOptions {
    pub fn with_base_url(base_url: &str) -> Result<Self, BaseUrlError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Absolute address of `path` on the backend.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

pub fn parse_base_url(value: &str) -> Result<Url, BaseUrlError> {
    let url = Url::parse(value.trim()).map_err(|e| BaseUrlError::Invalid {
        url: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(BaseUrlError::UnsupportedScheme {
            url: value.to_string(),
        }),
    }
}

/// Trim an analysis id and reject it when nothing is left.
pub fn normalize_analysis_id(id: &str) -> Result<&str, ValidationError> {
    let id = id.trim();
    if id.is_empty() {
        Err(ValidationError::MissingAnalysisId)
    } else {
        Ok(id)
    }
}
