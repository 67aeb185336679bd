use thiserror::Error;

use crate::contract::error_codes;

/// Local validation failures. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SituationError {
    #[error("field position must be {min}..={max}, got {value}")]
    InvalidRange { value: i64, min: u8, max: u8 },

    #[error("invalid {field} '{value}', expected one of: {expected}")]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl SituationError {
    pub fn code(&self) -> &'static str {
        match self {
            SituationError::InvalidRange { .. } => error_codes::INVALID_RANGE,
            SituationError::InvalidEnum { .. } => error_codes::INVALID_ENUM,
        }
    }
}

/// Failures of one exchange with the decision engine.
///
/// `Transport` and `Status` are both transport failures; `Malformed` means a
/// body arrived but did not have the recommendation shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("decision engine returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl RecommendError {
    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::Transport(_) | RecommendError::Status { .. } => {
                error_codes::TRANSPORT_FAILURE
            }
            RecommendError::Malformed(_) => error_codes::MALFORMED_RESPONSE,
        }
    }

    /// Whether asking again could plausibly succeed. Nothing retries
    /// automatically; this only informs the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            RecommendError::Transport(_) => true,
            RecommendError::Status { status, .. } => *status >= 500 || *status == 429,
            RecommendError::Malformed(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SituationError>;
