//! Reference decision engine.
//!
//! A deterministic play book: the rule table picks plays, the field zone
//! picks the situation text, and the down (plus gain on 2nd down) picks the
//! strategy note. The same situation always yields the same recommendation.

pub mod catalog;
pub mod rules;

use std::collections::HashSet;
use tracing::debug;

use crate::models::{Down, FieldZone, Recommendation, SituationModel, YardGainTarget};
use catalog::display_name;
use rules::{PlayRule, PLAY_RULES};

#[derive(Debug, Clone, Copy)]
pub struct PlayBook {
    rules: &'static [PlayRule],
}

impl Default for PlayBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlayBook {
    pub const fn standard() -> Self {
        Self { rules: PLAY_RULES }
    }

    pub fn recommend(&self, situation: &SituationModel) -> Recommendation {
        let matched = self.matching_plays(situation);
        let matched_count = matched.len();

        let recommended_plays = if matched.is_empty() {
            fallback_plays(situation.yard_gain_target())
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            matched
        };

        debug!(
            yard = situation.field_position().yard_line(),
            down = %situation.down(),
            gain = %situation.yard_gain_target(),
            matched = matched_count,
            "play book evaluated"
        );

        Recommendation {
            field_situation: field_situation(situation.classify_zone()).to_string(),
            strategy_note: strategy_note(situation.down(), situation.yard_gain_target())
                .to_string(),
            recommended_plays,
        }
    }

    /// Display names of every matching rule, in table order, first occurrence wins.
    pub fn matching_plays(&self, situation: &SituationModel) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .filter(|rule| rule.matches(situation))
            .map(|rule| display_name(rule.play).unwrap_or(rule.play))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }
}

/// General advice when no rule fires.
pub fn fallback_plays(gain: YardGainTarget) -> &'static [&'static str] {
    match gain {
        YardGainTarget::Short => &["Quick Slant", "Checkdown Pass", "Draw Play"],
        YardGainTarget::Medium => &["Out Route", "Curl Route", "Screen Pass"],
        YardGainTarget::Long => &["Go Route", "Post Route", "Deep Cross"],
    }
}

pub fn field_situation(zone: FieldZone) -> &'static str {
    match zone {
        FieldZone::OwnTerritory => "Own Territory - Conservative",
        FieldZone::Midfield => "Midfield - Balanced",
        FieldZone::RedZoneApproach => "Red Zone Approach - Aggressive",
        FieldZone::RedZone => "Red Zone - Score Now",
    }
}

pub fn strategy_note(down: Down, gain: YardGainTarget) -> &'static str {
    match (down, gain) {
        (Down::First, _) => "Establish rhythm and set up future downs",
        (Down::Second, YardGainTarget::Short) => {
            "High percentage play to ensure manageable 3rd down"
        }
        (Down::Second, YardGainTarget::Medium) => "Keep the chains moving",
        (Down::Second, YardGainTarget::Long) => "Take a shot downfield",
        (Down::Third, _) => "Must convert to keep the drive alive",
        (Down::Fourth, _) => "All or nothing - go for it!",
    }
}
