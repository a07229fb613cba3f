use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Input problems caught before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Analysis ID is required")]
    MissingAnalysisId,
    #[error("Please select a file")]
    NoFileSelected,
    #[error("Transcript text is required")]
    MissingTranscriptText,
}

/// Why a request failed. Only ever logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Transport(e) => write!(f, "transport error: {e}"),
            FailureReason::Status(code) => write!(f, "unexpected status {code}"),
            FailureReason::Decode(e) => write!(f, "undecodable body: {e}"),
        }
    }
}

impl From<reqwest::Error> for FailureReason {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => FailureReason::Status(status.as_u16()),
            None if value.is_decode() => FailureReason::Decode(value.to_string()),
            None => FailureReason::Transport(value.to_string()),
        }
    }
}

/// Errors returned by [`AnalysisService`](super::AnalysisService).
///
/// The display text of each variant is the fixed message the matching view
/// shows. The `reason` is kept for logs only, so a bad id, a missing id and
/// a dead backend all look the same to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error uploading file")]
    Upload { reason: FailureReason },
    #[error("Failed to fetch results")]
    Fetch { reason: FailureReason },
    #[error("Invalid Analysis ID or result not found")]
    NotFoundOrInvalidId { reason: FailureReason },
    #[error("Error analyzing transcript")]
    Analyze { reason: FailureReason },
}

impl ServiceError {
    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            ServiceError::Validation(_) => None,
            ServiceError::Upload { reason }
            | ServiceError::Fetch { reason }
            | ServiceError::NotFoundOrInvalidId { reason }
            | ServiceError::Analyze { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_hide_reason() {
        let err = ServiceError::NotFoundOrInvalidId {
            reason: FailureReason::Status(404),
        };
        assert_eq!("Invalid Analysis ID or result not found", err.to_string());

        let err = ServiceError::NotFoundOrInvalidId {
            reason: FailureReason::Transport("connection refused".to_string()),
        };
        assert_eq!("Invalid Analysis ID or result not found", err.to_string());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            "Analysis ID is required",
            ServiceError::from(ValidationError::MissingAnalysisId).to_string()
        );
        assert_eq!(
            "Please select a file",
            ServiceError::from(ValidationError::NoFileSelected).to_string()
        );
    }

    #[test]
    fn test_reason_is_available_for_logging() {
        let err = ServiceError::Fetch {
            reason: FailureReason::Status(500),
        };
        assert_eq!(Some(&FailureReason::Status(500)), err.reason());
        assert_eq!("unexpected status 500", err.reason().unwrap().to_string());
        assert_eq!(
            None,
            ServiceError::from(ValidationError::NoFileSelected).reason()
        );
    }
}
