//! Game situation: the three user inputs sent to the decision engine.
//!
//! Every value here is validated on the way in. The model rejects bad input
//! instead of clamping it; clamping belongs to whatever control produced the
//! value (a slider, a CLI flag).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field_zone::FieldZone;
use crate::contract::{FIELD_POSITION_MAX, FIELD_POSITION_MIN};
use crate::error::{Result, SituationError};

// ============================================================================
// FieldPosition
// ============================================================================

/// Yard line measured from the own end zone (0) to the opponent end zone (100).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct FieldPosition(#[schemars(range(min = 0, max = 100))] u8);

impl FieldPosition {
    pub const MIN: FieldPosition = FieldPosition(FIELD_POSITION_MIN);
    pub const MAX: FieldPosition = FieldPosition(FIELD_POSITION_MAX);
    /// Starting position of a fresh session.
    pub const MIDFIELD: FieldPosition = FieldPosition(50);

    pub fn new(value: i64) -> Result<Self> {
        if crate::contract::is_valid_field_position(value) {
            Ok(FieldPosition(value as u8))
        } else {
            Err(SituationError::InvalidRange {
                value,
                min: FIELD_POSITION_MIN,
                max: FIELD_POSITION_MAX,
            })
        }
    }

    /// Clamp an arbitrary control value into range. For boundary controls
    /// only; the model itself never calls this.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(FIELD_POSITION_MIN), i64::from(FIELD_POSITION_MAX));
        FieldPosition(clamped as u8)
    }

    #[inline]
    pub const fn yard_line(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn zone(self) -> FieldZone {
        FieldZone::classify(self)
    }
}

impl TryFrom<i64> for FieldPosition {
    type Error = SituationError;

    fn try_from(value: i64) -> Result<Self> {
        FieldPosition::new(value)
    }
}

impl From<FieldPosition> for u8 {
    fn from(position: FieldPosition) -> u8 {
        position.0
    }
}

impl fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Down
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Down {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
}

impl Down {
    pub const ALL: [Down; 4] = [Down::First, Down::Second, Down::Third, Down::Fourth];

    /// Wire and display label.
    pub const fn label(self) -> &'static str {
        match self {
            Down::First => "1st",
            Down::Second => "2nd",
            Down::Third => "3rd",
            Down::Fourth => "4th",
        }
    }
}

impl FromStr for Down {
    type Err = SituationError;

    fn from_str(value: &str) -> Result<Self> {
        Down::ALL
            .into_iter()
            .find(|down| down.label() == value)
            .ok_or_else(|| SituationError::InvalidEnum {
                field: "down",
                value: value.to_string(),
                expected: "1st, 2nd, 3rd, 4th",
            })
    }
}

impl fmt::Display for Down {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// YardGainTarget
// ============================================================================

/// Desired play distance class. Measured in its own yard units, unrelated to
/// the 0-100 field position scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum YardGainTarget {
    Short,
    Medium,
    Long,
}

impl YardGainTarget {
    pub const ALL: [YardGainTarget; 3] =
        [YardGainTarget::Short, YardGainTarget::Medium, YardGainTarget::Long];

    pub const fn label(self) -> &'static str {
        match self {
            YardGainTarget::Short => "short",
            YardGainTarget::Medium => "medium",
            YardGainTarget::Long => "long",
        }
    }

    /// Conventional distance range shown next to the choice.
    pub const fn distance_hint(self) -> &'static str {
        match self {
            YardGainTarget::Short => "0-30 yards",
            YardGainTarget::Medium => "30-60 yards",
            YardGainTarget::Long => "60-90 yards",
        }
    }
}

impl FromStr for YardGainTarget {
    type Err = SituationError;

    fn from_str(value: &str) -> Result<Self> {
        YardGainTarget::ALL
            .into_iter()
            .find(|gain| gain.label() == value)
            .ok_or_else(|| SituationError::InvalidEnum {
                field: "yard_gain",
                value: value.to_string(),
                expected: "short, medium, long",
            })
    }
}

impl fmt::Display for YardGainTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SituationModel
// ============================================================================

/// The session's current inputs. Setters are all-or-nothing: a rejected value
/// leaves the model untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SituationModel {
    field_position: FieldPosition,
    down: Down,
    yard_gain_target: YardGainTarget,
}

impl Default for SituationModel {
    fn default() -> Self {
        Self {
            field_position: FieldPosition::MIDFIELD,
            down: Down::First,
            yard_gain_target: YardGainTarget::Medium,
        }
    }
}

impl SituationModel {
    /// Build from raw control values, validating each.
    pub fn new(field_position: i64, down: &str, yard_gain_target: &str) -> Result<Self> {
        Ok(Self {
            field_position: FieldPosition::new(field_position)?,
            down: down.parse()?,
            yard_gain_target: yard_gain_target.parse()?,
        })
    }

    pub const fn from_parts(
        field_position: FieldPosition,
        down: Down,
        yard_gain_target: YardGainTarget,
    ) -> Self {
        Self { field_position, down, yard_gain_target }
    }

    pub fn set_field_position(&mut self, value: i64) -> Result<()> {
        self.field_position = FieldPosition::new(value)?;
        Ok(())
    }

    pub fn set_down(&mut self, value: &str) -> Result<()> {
        self.down = value.parse()?;
        Ok(())
    }

    pub fn set_yard_gain_target(&mut self, value: &str) -> Result<()> {
        self.yard_gain_target = value.parse()?;
        Ok(())
    }

    #[inline]
    pub fn field_position(&self) -> FieldPosition {
        self.field_position
    }

    #[inline]
    pub fn down(&self) -> Down {
        self.down
    }

    #[inline]
    pub fn yard_gain_target(&self) -> YardGainTarget {
        self.yard_gain_target
    }

    pub fn classify_zone(&self) -> FieldZone {
        self.field_position.zone()
    }
}
