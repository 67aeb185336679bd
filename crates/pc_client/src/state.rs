use pc_core::contract::USER_FAILURE_MESSAGE;
use pc_core::{RecommendError, Recommendation};
use std::fmt;
use uuid::Uuid;

/// A failed exchange. The user sees [`Failure::reason`]; the underlying
/// error stays available for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    request_id: Uuid,
    error: RecommendError,
}

impl Failure {
    pub fn new(request_id: Uuid, error: RecommendError) -> Self {
        Self { request_id, error }
    }

    /// User-presentable message. Identical for every failure kind.
    pub fn reason(&self) -> &'static str {
        USER_FAILURE_MESSAGE
    }

    pub fn error(&self) -> &RecommendError {
        &self.error
    }

    /// Correlates this failure with the logged diagnostic.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Exactly one of these is active per client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Success(Recommendation),
    Failure(Failure),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            RequestState::Success(rec) => Some(rec),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            RequestState::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Success(_) => "success",
            RequestState::Failure(_) => "failure",
        }
    }
}
