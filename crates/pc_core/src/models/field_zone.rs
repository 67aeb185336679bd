use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::situation::FieldPosition;
use crate::contract::{MIDFIELD_MAX, OWN_TERRITORY_MAX, RED_ZONE_APPROACH_MAX};

/// Display bucket for a field position. Local to the UI, never sent on the wire.
///
/// Bounds are closed on the lower/equal side: `<= 20`, `<= 50`, `<= 80`,
/// everything else is the red zone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldZone {
    OwnTerritory,
    Midfield,
    RedZoneApproach,
    RedZone,
}

impl FieldZone {
    pub const ALL: [FieldZone; 4] = [
        FieldZone::OwnTerritory,
        FieldZone::Midfield,
        FieldZone::RedZoneApproach,
        FieldZone::RedZone,
    ];

    pub fn classify(position: FieldPosition) -> Self {
        let yard = position.yard_line();
        if yard <= OWN_TERRITORY_MAX {
            FieldZone::OwnTerritory
        } else if yard <= MIDFIELD_MAX {
            FieldZone::Midfield
        } else if yard <= RED_ZONE_APPROACH_MAX {
            FieldZone::RedZoneApproach
        } else {
            FieldZone::RedZone
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FieldZone::OwnTerritory => "Own Territory",
            FieldZone::Midfield => "Midfield",
            FieldZone::RedZoneApproach => "Red Zone Approach",
            FieldZone::RedZone => "Red Zone",
        }
    }

    /// Snake-case key, matching the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            FieldZone::OwnTerritory => "own_territory",
            FieldZone::Midfield => "midfield",
            FieldZone::RedZoneApproach => "red_zone_approach",
            FieldZone::RedZone => "red_zone",
        }
    }
}

impl fmt::Display for FieldZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
