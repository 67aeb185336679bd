//! JSON contract for `POST /api/recommend-play`.
//!
//! Request and response bodies are parsed strictly: a missing field, a
//! mistyped field, or an out-of-range yard line is an error, never a partial
//! value. Unknown extra fields are ignored.

use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::contract::error_codes;
use crate::engine::PlayBook;
use crate::error::RecommendError;
use crate::models::{Down, FieldPosition, Recommendation, SituationModel, YardGainTarget};

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

/// Wire body sent to the decision engine. All fields required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecommendPlayRequest {
    pub yard_position: FieldPosition,
    pub down: Down,
    pub yard_gain: YardGainTarget,
}

impl From<&SituationModel> for RecommendPlayRequest {
    fn from(situation: &SituationModel) -> Self {
        Self {
            yard_position: situation.field_position(),
            down: situation.down(),
            yard_gain: situation.yard_gain_target(),
        }
    }
}

impl RecommendPlayRequest {
    pub fn situation(&self) -> SituationModel {
        SituationModel::from_parts(self.yard_position, self.down, self.yard_gain)
    }
}

/// Parse a decision engine response body into a [`Recommendation`].
pub fn parse_recommendation(body: &str) -> Result<Recommendation, RecommendError> {
    serde_json::from_str::<Recommendation>(body)
        .map_err(|e| RecommendError::Malformed(e.to_string()))
}

/// Run the reference play book over a JSON request and return the JSON
/// response. Errors are `"<CODE>: <message>"` strings.
pub fn recommend_play_json(request_json: &str) -> Result<String, String> {
    let request: RecommendPlayRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;

    let recommendation = PlayBook::standard().recommend(&request.situation());

    serde_json::to_string(&recommendation)
        .map_err(|e| err_code(error_codes::MALFORMED_RESPONSE, e))
}

pub fn request_schema() -> RootSchema {
    schemars::schema_for!(RecommendPlayRequest)
}

pub fn response_schema() -> RootSchema {
    schemars::schema_for!(Recommendation)
}
