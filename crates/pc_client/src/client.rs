//! RecommendationClient: the request state machine.
//!
//! ```text
//! idle ──request──▶ pending ──ok──▶ success(rec)
//!                      │
//!                      └────err───▶ failure(reason)
//! success / failure ──request──▶ pending
//! pending ──request──▶ pending   (ignored, no engine call)
//! ```
//!
//! The client is the only writer of its state. Readers either call
//! [`RecommendationClient::state`] or hold a [`watch::Receiver`].

use pc_core::{RecommendError, RecommendPlayRequest, SituationModel};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::DecisionEngine;
use crate::state::{Failure, RequestState};

const CANCELLED: &str = "request cancelled before the decision engine answered";

/// What a call to [`RecommendationClient::request_recommendation`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// One engine call was made; the state is now success or failure.
    Completed,
    /// A request was already outstanding; nothing happened.
    Ignored,
}

pub struct RecommendationClient<E: DecisionEngine> {
    engine: E,
    state: watch::Sender<RequestState>,
}

impl<E: DecisionEngine> RecommendationClient<E> {
    pub fn new(engine: E) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self { engine, state }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Receiver notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Ask the engine for a recommendation.
    ///
    /// The request body is captured from `situation` before the state moves to
    /// pending; later edits to the situation do not affect this request. While
    /// a request is outstanding further calls return [`Dispatch::Ignored`].
    pub async fn request_recommendation(&self, situation: &SituationModel) -> Dispatch {
        let request = RecommendPlayRequest::from(situation);

        let accepted = self.state.send_if_modified(|state| {
            if state.is_pending() {
                return false;
            }
            *state = RequestState::Pending;
            true
        });

        if !accepted {
            debug!("recommendation already pending, ignoring request");
            return Dispatch::Ignored;
        }

        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            yard_position = request.yard_position.yard_line(),
            down = %request.down,
            yard_gain = %request.yard_gain,
            "requesting recommendation"
        );

        let guard = PendingGuard { state: &self.state, request_id, armed: true };

        let next = match self.engine.recommend(&request).await {
            Ok(recommendation) => {
                info!(
                    %request_id,
                    plays = recommendation.recommended_plays.len(),
                    "recommendation received"
                );
                RequestState::Success(recommendation)
            }
            Err(error) => {
                warn!(
                    %request_id,
                    code = error.code(),
                    retryable = error.is_retryable(),
                    error = %error,
                    "recommendation request failed"
                );
                RequestState::Failure(Failure::new(request_id, error))
            }
        };

        guard.settle(next);
        Dispatch::Completed
    }
}

/// Leaves `pending` no matter how the request future ends. If the caller
/// drops it before the engine answers, the state becomes a transport failure
/// so the next request is accepted.
struct PendingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    request_id: Uuid,
    armed: bool,
}

impl PendingGuard<'_> {
    fn settle(mut self, next: RequestState) {
        self.armed = false;
        self.state.send_replace(next);
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!(request_id = %self.request_id, "recommendation request cancelled");
        self.state.send_replace(RequestState::Failure(Failure::new(
            self.request_id,
            RecommendError::Transport(CANCELLED.to_string()),
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InProcessEngine;
    use async_trait::async_trait;
    use pc_core::contract::USER_FAILURE_MESSAGE;
    use pc_core::Recommendation;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn dive_sweep() -> Recommendation {
        Recommendation {
            field_situation: "Own Territory - Conservative".to_string(),
            strategy_note: "Establish rhythm and set up future downs".to_string(),
            recommended_plays: vec!["Dive".to_string(), "Sweep".to_string()],
        }
    }

    /// Scripted engine: records every request and returns a fixed result,
    /// optionally waiting on a gate first.
    struct ScriptedEngine {
        result: Result<Recommendation, RecommendError>,
        calls: AtomicUsize,
        seen: Mutex<Vec<RecommendPlayRequest>>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedEngine {
        fn new(result: Result<Recommendation, RecommendError>) -> Self {
            Self { result, calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()), gate: None }
        }

        fn gated(result: Result<Recommendation, RecommendError>, gate: Arc<Notify>) -> Self {
            Self { gate: Some(gate), ..Self::new(result) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DecisionEngine for ScriptedEngine {
        async fn recommend(
            &self,
            request: &RecommendPlayRequest,
        ) -> Result<Recommendation, RecommendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(*request);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn starts_idle() {
        let client = RecommendationClient::new(InProcessEngine::default());
        assert!(client.state().is_idle());
    }

    #[tokio::test]
    async fn success_holds_ranked_plays() {
        let client = RecommendationClient::new(ScriptedEngine::new(Ok(dive_sweep())));
        let situation = SituationModel::new(15, "1st", "short").unwrap();

        let dispatch = client.request_recommendation(&situation).await;
        assert_eq!(dispatch, Dispatch::Completed);

        let state = client.state();
        let rec = state.recommendation().expect("success state");
        assert_eq!(rec.recommended_plays.len(), 2);
        assert_eq!(rec.top_play(), Some("Dive"));

        let seen = client.engine().seen.lock().unwrap().clone();
        assert_eq!(seen, vec![RecommendPlayRequest::from(&situation)]);
    }

    #[tokio::test]
    async fn transport_and_malformed_collapse_to_one_message() {
        for error in [
            RecommendError::Status { status: 500, body: "boom".to_string() },
            RecommendError::Transport("connection refused".to_string()),
            RecommendError::Malformed("missing field `strategy_note`".to_string()),
        ] {
            let client = RecommendationClient::new(ScriptedEngine::new(Err(error.clone())));
            client.request_recommendation(&SituationModel::default()).await;

            let state = client.state();
            let failure = state.failure().expect("failure state");
            assert_eq!(failure.reason(), USER_FAILURE_MESSAGE);
            assert_eq!(failure.error(), &error);
        }
    }

    #[tokio::test]
    async fn request_while_pending_is_ignored() {
        let gate = Arc::new(Notify::new());
        let client =
            RecommendationClient::new(ScriptedEngine::gated(Ok(dive_sweep()), gate.clone()));
        let situation = SituationModel::default();

        let first = client.request_recommendation(&situation);
        let second = async {
            while !client.is_pending() {
                tokio::task::yield_now().await;
            }
            let dispatch = client.request_recommendation(&situation).await;
            assert!(client.is_pending());
            gate.notify_one();
            dispatch
        };

        let (first, second) = tokio::join!(first, second);
        assert_eq!(first, Dispatch::Completed);
        assert_eq!(second, Dispatch::Ignored);
        assert_eq!(client.engine().calls(), 1);
        assert!(client.state().recommendation().is_some());
    }

    #[tokio::test]
    async fn pending_is_observable_before_completion() {
        let gate = Arc::new(Notify::new());
        let client =
            RecommendationClient::new(ScriptedEngine::gated(Ok(dive_sweep()), gate.clone()));
        let mut rx = client.subscribe();
        let situation = SituationModel::default();

        let request = client.request_recommendation(&situation);
        let observe = async {
            rx.changed().await.unwrap();
            let seen = rx.borrow_and_update().clone();
            gate.notify_one();
            seen
        };

        let (_, seen) = tokio::join!(request, observe);
        assert!(seen.is_pending());
        assert!(client.state().recommendation().is_some());
    }

    #[tokio::test]
    async fn dropped_request_does_not_leave_client_pending() {
        let gate = Arc::new(Notify::new());
        let client =
            RecommendationClient::new(ScriptedEngine::gated(Ok(dive_sweep()), gate.clone()));
        let situation = SituationModel::default();

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), client.request_recommendation(&situation))
                .await;
        assert!(abandoned.is_err());

        let state = client.state();
        let failure = state.failure().expect("cancelled request is a failure");
        assert_eq!(failure.reason(), USER_FAILURE_MESSAGE);
        assert!(matches!(failure.error(), RecommendError::Transport(_)));

        // Let the retry through the gate.
        gate.notify_one();
        assert_eq!(client.request_recommendation(&situation).await, Dispatch::Completed);
        assert_eq!(client.engine().calls(), 2);
        assert!(client.state().recommendation().is_some());
    }

    #[tokio::test]
    async fn terminal_states_are_reenterable_and_replaced_wholesale() {
        let client = RecommendationClient::new(InProcessEngine::default());

        let first = SituationModel::new(85, "4th", "medium").unwrap();
        client.request_recommendation(&first).await;
        let before = client.state().recommendation().cloned().unwrap();

        let second = SituationModel::new(10, "1st", "long").unwrap();
        assert_eq!(client.request_recommendation(&second).await, Dispatch::Completed);
        let after = client.state().recommendation().cloned().unwrap();

        assert_ne!(before, after);
        assert!(!after.recommended_plays.contains(&"Slot Fade".to_string()));
    }

    #[tokio::test]
    async fn failure_can_be_followed_by_success() {
        let client = RecommendationClient::new(ScriptedEngine::new(Err(
            RecommendError::Transport("timeout".to_string()),
        )));
        client.request_recommendation(&SituationModel::default()).await;
        assert!(client.state().failure().is_some());
        assert_eq!(client.engine().calls(), 1);

        // No automatic retry: a second explicit call is a second engine call.
        client.request_recommendation(&SituationModel::default()).await;
        assert_eq!(client.engine().calls(), 2);
    }

    #[tokio::test]
    async fn repeated_requests_are_idempotent() {
        let client = RecommendationClient::new(InProcessEngine::default());
        let situation = SituationModel::new(33, "3rd", "medium").unwrap();

        client.request_recommendation(&situation).await;
        let first = client.state();
        client.request_recommendation(&situation).await;
        assert_eq!(client.state(), first);
    }

    #[tokio::test]
    async fn edits_during_pending_do_not_change_the_request() {
        let gate = Arc::new(Notify::new());
        let client =
            RecommendationClient::new(ScriptedEngine::gated(Ok(dive_sweep()), gate.clone()));
        let mut situation = SituationModel::new(15, "1st", "short").unwrap();
        let snapshot = situation;

        let request = client.request_recommendation(&snapshot);
        let edit = async {
            while !client.is_pending() {
                tokio::task::yield_now().await;
            }
            situation.set_field_position(90).unwrap();
            gate.notify_one();
        };
        tokio::join!(request, edit);

        let seen = client.engine().seen.lock().unwrap().clone();
        assert_eq!(seen[0].yard_position.yard_line(), 15);
        assert_eq!(situation.field_position().yard_line(), 90);
        assert!(client.state().recommendation().is_some());
    }
}
