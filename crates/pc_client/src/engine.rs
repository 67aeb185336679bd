//! DecisionEngine trait: the only boundary between the client and whatever
//! produces recommendations.

use async_trait::async_trait;
use pc_core::{PlayBook, RecommendError, RecommendPlayRequest, Recommendation};

#[async_trait]
pub trait DecisionEngine: Send + Sync {
    /// One request/response exchange. Implementations never retry.
    async fn recommend(
        &self,
        request: &RecommendPlayRequest,
    ) -> Result<Recommendation, RecommendError>;
}

/// Runs the reference play book in-process. Useful offline and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcessEngine {
    playbook: PlayBook,
}

impl InProcessEngine {
    pub fn new(playbook: PlayBook) -> Self {
        Self { playbook }
    }
}

#[async_trait]
impl DecisionEngine for InProcessEngine {
    async fn recommend(
        &self,
        request: &RecommendPlayRequest,
    ) -> Result<Recommendation, RecommendError> {
        Ok(self.playbook.recommend(&request.situation()))
    }
}
