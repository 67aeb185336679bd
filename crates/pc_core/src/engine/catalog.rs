//! Play catalog: internal play ids and their display names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named play concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

const fn play(id: &'static str, name: &'static str) -> PlayDefinition {
    PlayDefinition { id, name }
}

pub const PLAY_CATALOG: &[PlayDefinition] = &[
    play("man_beater", "Man Beater"),
    play("vertical_drag_short_cross", "Vertical Drag Short Cross"),
    play("pa_outs", "PA Outs"),
    play("double_drag_streaks", "Double Drag Streaks"),
    play("smash_concept", "Smash Concept"),
    play("four_verticals", "Four Verticals"),
    play("mesh_shallow", "Mesh Shallow"),
    play("drive_concept", "Drive Concept"),
    play("pa_boot_drag", "PA Boot Drag"),
    play("double_slants", "Double Slants"),
    play("stick_concept", "Stick Concept"),
    play("flood_post", "Flood Post"),
    play("texas_concept", "Texas Concept"),
    play("levels_concept", "Levels Concept"),
    play("corner_post", "Corner Post"),
    play("deep_crossers", "Deep Crossers"),
    play("dagger_concept", "Dagger Concept"),
    play("scissors", "Scissors"),
    play("yankee_concept", "Yankee Concept"),
    play("slot_cross", "Slot Cross"),
    play("corner_flood", "Corner Flood"),
    play("dagger_pivot", "Dagger Pivot"),
    play("deep_out_wheel", "Deep Out Wheel"),
    play("bunch_flood", "Bunch Flood"),
    play("backside_post_cross", "Backside Post Cross"),
    play("switch_verticals", "Switch Verticals"),
    play("post_wheel", "Post Wheel"),
    play("levels_backed_up", "Levels Backed Up"),
    play("flood_switch", "Flood Switch"),
    play("pa_deep_cross", "PA Deep Cross"),
    play("double_post", "Double Post"),
    play("curl_flat", "Curl Flat"),
    play("snag_concept", "Snag Concept"),
    play("slot_fade", "Slot Fade"),
    play("angle_route", "Angle Route"),
    play("stick_nod", "Stick Nod"),
    play("quick_outs", "Quick Outs"),
    play("china_concept", "China Concept"),
    play("four_verts_backed_up", "Four Verts Backed Up"),
    play("out_and_up", "Out and Up"),
];

static NAME_BY_ID: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PLAY_CATALOG.iter().map(|p| (p.id, p.name)).collect());

pub fn display_name(id: &str) -> Option<&'static str> {
    NAME_BY_ID.get(id).copied()
}
