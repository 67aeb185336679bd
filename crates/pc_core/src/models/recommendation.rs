use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decision engine answer for one situation.
///
/// All three fields are required on the wire. `recommended_plays` is in rank
/// order (index 0 is rank 1) and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub field_situation: String,
    pub strategy_note: String,
    pub recommended_plays: Vec<String>,
}

impl Recommendation {
    pub fn top_play(&self) -> Option<&str> {
        self.recommended_plays.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.recommended_plays.is_empty()
    }

    /// Plays paired with their 1-based rank.
    pub fn ranked_plays(&self) -> impl Iterator<Item = (usize, &str)> {
        self.recommended_plays
            .iter()
            .enumerate()
            .map(|(idx, play)| (idx + 1, play.as_str()))
    }
}
