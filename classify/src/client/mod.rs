//! Service client: the network operations against the analysis backend.

mod error;
mod http;
pub mod options;
mod service;

pub use error::{FailureReason, ServiceError, ValidationError};
pub use http::HttpAnalysisService;
pub use options::{BaseUrlError, ClientOptions, DEFAULT_BASE_URL};
pub use service::{
    AnalysisService, MockAnalysisService, ANALYZE_PATH, HEALTH_PATH, RESULTS_PATH, UPLOAD_PATH,
};
