use pc_core::{Result, SituationModel};
use std::future::Future;
use std::sync::Arc;

use crate::client::{Dispatch, RecommendationClient};
use crate::engine::DecisionEngine;
use crate::view::DisplayView;

/// One user's play-calling session: the editable situation plus the client
/// holding the request state. Nothing here outlives the session.
///
/// [`PlayCallSession::fetch`] returns an owned future, so the situation stays
/// editable while a request is pending.
pub struct PlayCallSession<E: DecisionEngine> {
    situation: SituationModel,
    client: Arc<RecommendationClient<E>>,
}

impl<E: DecisionEngine> PlayCallSession<E> {
    pub fn new(engine: E) -> Self {
        Self::with_situation(engine, SituationModel::default())
    }

    pub fn with_situation(engine: E, situation: SituationModel) -> Self {
        Self { situation, client: Arc::new(RecommendationClient::new(engine)) }
    }

    pub fn situation(&self) -> &SituationModel {
        &self.situation
    }

    pub fn client(&self) -> &RecommendationClient<E> {
        &self.client
    }

    pub fn set_field_position(&mut self, value: i64) -> Result<()> {
        self.situation.set_field_position(value)
    }

    pub fn set_down(&mut self, value: &str) -> Result<()> {
        self.situation.set_down(value)
    }

    pub fn set_yard_gain_target(&mut self, value: &str) -> Result<()> {
        self.situation.set_yard_gain_target(value)
    }

    /// Request plays for the situation as it is now. Edits made after this
    /// call do not change the request.
    pub fn fetch(&self) -> impl Future<Output = Dispatch> + Send + 'static
    where
        E: 'static,
    {
        let client = Arc::clone(&self.client);
        let situation = self.situation;
        async move { client.request_recommendation(&situation).await }
    }

    pub fn view(&self) -> DisplayView {
        DisplayView::new(&self.situation, &self.client.state())
    }
}
