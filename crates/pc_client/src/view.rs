//! Display-ready view of the (SituationModel, RequestState) pair.
//!
//! Front ends render this instead of poking at the state machine directly,
//! so every surface shows the same zone label, the same ranks, and the same
//! empty-list text.

use pc_core::{FieldZone, SituationModel};
use serde::Serialize;
use std::fmt;

use crate::state::RequestState;

pub const IDLE_PROMPT: &str =
    "Set your game situation and click \"Get Play Recommendations\" to see strategic options";
pub const PENDING_TEXT: &str = "Analyzing...";
pub const NO_RECOMMENDATIONS: &str = "No recommendations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SituationPanel {
    pub yard_line: u8,
    pub zone: FieldZone,
    pub zone_label: &'static str,
    pub down: &'static str,
    pub yard_gain: &'static str,
    pub yard_gain_hint: &'static str,
}

impl From<&SituationModel> for SituationPanel {
    fn from(situation: &SituationModel) -> Self {
        let zone = situation.classify_zone();
        Self {
            yard_line: situation.field_position().yard_line(),
            zone,
            zone_label: zone.label(),
            down: situation.down().label(),
            yard_gain: situation.yard_gain_target().label(),
            yard_gain_hint: situation.yard_gain_target().distance_hint(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlay {
    pub rank: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultPanel {
    Prompt { message: &'static str },
    Analyzing { message: &'static str },
    Error { message: &'static str },
    Plays {
        field_situation: String,
        strategy_note: String,
        plays: Vec<RankedPlay>,
    },
    /// Successful answer with an empty play list.
    NoRecommendations {
        field_situation: String,
        strategy_note: String,
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayView {
    pub situation: SituationPanel,
    pub result: ResultPanel,
}

impl DisplayView {
    pub fn new(situation: &SituationModel, state: &RequestState) -> Self {
        let result = match state {
            RequestState::Idle => ResultPanel::Prompt { message: IDLE_PROMPT },
            RequestState::Pending => ResultPanel::Analyzing { message: PENDING_TEXT },
            RequestState::Failure(failure) => ResultPanel::Error { message: failure.reason() },
            RequestState::Success(rec) if rec.is_empty() => ResultPanel::NoRecommendations {
                field_situation: rec.field_situation.clone(),
                strategy_note: rec.strategy_note.clone(),
                message: NO_RECOMMENDATIONS,
            },
            RequestState::Success(rec) => ResultPanel::Plays {
                field_situation: rec.field_situation.clone(),
                strategy_note: rec.strategy_note.clone(),
                plays: rec
                    .ranked_plays()
                    .map(|(rank, name)| RankedPlay { rank, name: name.to_string() })
                    .collect(),
            },
        };

        Self { situation: SituationPanel::from(situation), result }
    }
}

impl fmt::Display for DisplayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.situation;
        writeln!(f, "Field Position: {} yard line ({})", s.yard_line, s.zone_label)?;
        writeln!(f, "Down: {}", s.down)?;
        writeln!(f, "Target: {} ({})", s.yard_gain, s.yard_gain_hint)?;
        writeln!(f)?;

        match &self.result {
            ResultPanel::Prompt { message }
            | ResultPanel::Analyzing { message }
            | ResultPanel::Error { message } => writeln!(f, "{message}"),
            ResultPanel::Plays { field_situation, strategy_note, plays } => {
                writeln!(f, "Field Situation: {field_situation}")?;
                writeln!(f, "Strategy: {strategy_note}")?;
                writeln!(f, "Recommended Plays:")?;
                for play in plays {
                    writeln!(f, "  {}. {}", play.rank, play.name)?;
                }
                Ok(())
            }
            ResultPanel::NoRecommendations { field_situation, strategy_note, message } => {
                writeln!(f, "Field Situation: {field_situation}")?;
                writeln!(f, "Strategy: {strategy_note}")?;
                writeln!(f, "Recommended Plays:")?;
                writeln!(f, "  {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Failure;
    use pc_core::contract::USER_FAILURE_MESSAGE;
    use pc_core::{RecommendError, Recommendation};
    use uuid::Uuid;

    fn situation() -> SituationModel {
        SituationModel::new(15, "1st", "short").unwrap()
    }

    #[test]
    fn success_view_ranks_from_one() {
        let state = RequestState::Success(Recommendation {
            field_situation: "Own Territory - Conservative".to_string(),
            strategy_note: "Establish rhythm and set up future downs".to_string(),
            recommended_plays: vec!["Dive".to_string(), "Sweep".to_string()],
        });
        let view = DisplayView::new(&situation(), &state);

        assert_eq!(view.situation.zone, FieldZone::OwnTerritory);
        match &view.result {
            ResultPanel::Plays { plays, .. } => {
                assert_eq!(plays[0], RankedPlay { rank: 1, name: "Dive".to_string() });
                assert_eq!(plays[1].rank, 2);
            }
            other => panic!("unexpected panel: {other:?}"),
        }

        let text = view.to_string();
        assert!(text.contains("1. Dive"));
        assert!(text.contains("2. Sweep"));
    }

    #[test]
    fn empty_plays_render_as_no_recommendations() {
        let state = RequestState::Success(Recommendation {
            field_situation: "x".to_string(),
            strategy_note: "y".to_string(),
            recommended_plays: vec![],
        });
        let view = DisplayView::new(&situation(), &state);
        assert_eq!(
            view.result,
            ResultPanel::NoRecommendations {
                field_situation: "x".to_string(),
                strategy_note: "y".to_string(),
                message: NO_RECOMMENDATIONS,
            }
        );
        assert!(view.to_string().contains(NO_RECOMMENDATIONS));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["result"]["status"], "no_recommendations");
        assert_eq!(json["result"]["message"], NO_RECOMMENDATIONS);
    }

    #[test]
    fn failure_view_shows_only_user_message() {
        let state = RequestState::Failure(Failure::new(
            Uuid::new_v4(),
            RecommendError::Malformed("missing field `recommended_plays`".to_string()),
        ));
        let view = DisplayView::new(&situation(), &state);
        assert_eq!(view.result, ResultPanel::Error { message: USER_FAILURE_MESSAGE });
        assert!(!view.to_string().contains("recommended_plays"));
    }

    #[test]
    fn idle_and_pending_panels() {
        let idle = DisplayView::new(&situation(), &RequestState::Idle);
        assert_eq!(idle.result, ResultPanel::Prompt { message: IDLE_PROMPT });

        let pending = DisplayView::new(&situation(), &RequestState::Pending);
        assert_eq!(pending.result, ResultPanel::Analyzing { message: PENDING_TEXT });
    }

    #[test]
    fn view_serializes_with_status_tag() {
        let view = DisplayView::new(&situation(), &RequestState::Pending);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["result"]["status"], "analyzing");
        assert_eq!(json["situation"]["zone"], "own_territory");
    }
}
