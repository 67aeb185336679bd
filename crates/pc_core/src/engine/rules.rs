//! Ordered rule table. A rule fires when the yard window, the down, and the
//! yard gain target all match. Table order is recommendation order.

use crate::models::{Down, FieldPosition, SituationModel, YardGainTarget};

use crate::models::Down::{First, Fourth, Second, Third};
use crate::models::YardGainTarget::{Long, Medium, Short};

/// Inclusive yard-line window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YardWindow {
    Within(u8, u8),
    /// Everything except `lo..=hi`.
    Outside(u8, u8),
}

impl YardWindow {
    pub fn contains(self, position: FieldPosition) -> bool {
        let yard = position.yard_line();
        match self {
            YardWindow::Within(lo, hi) => (lo..=hi).contains(&yard),
            YardWindow::Outside(lo, hi) => !(lo..=hi).contains(&yard),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayRule {
    pub play: &'static str,
    pub window: YardWindow,
    pub downs: &'static [Down],
    pub gains: &'static [YardGainTarget],
}

impl PlayRule {
    pub fn matches(&self, situation: &SituationModel) -> bool {
        self.window.contains(situation.field_position())
            && self.downs.contains(&situation.down())
            && self.gains.contains(&situation.yard_gain_target())
    }
}

const fn rule(
    play: &'static str,
    window: YardWindow,
    downs: &'static [Down],
    gains: &'static [YardGainTarget],
) -> PlayRule {
    PlayRule { play, window, downs, gains }
}

const fn within(lo: u8, hi: u8) -> YardWindow {
    YardWindow::Within(lo, hi)
}

pub const PLAY_RULES: &[PlayRule] = &[
    rule("vertical_drag_short_cross", within(41, 100), &[First, Second], &[Medium, Long]),
    rule("double_drag_streaks", YardWindow::Outside(30, 70), &[Second], &[Long]),
    rule("pa_outs", within(11, 100), &[Second, Third, Fourth], &[Short, Medium]),
    rule("smash_concept", within(0, 40), &[First, Second], &[Short]),
    rule("four_verticals", within(20, 80), &[Second, Third], &[Long]),
    rule("mesh_shallow", within(20, 60), &[Second, Third], &[Short]),
    rule("drive_concept", within(15, 70), &[First, Second], &[Medium]),
    rule("pa_boot_drag", within(10, 50), &[First], &[Medium]),
    rule("double_slants", within(0, 30), &[Third, Fourth], &[Short]),
    rule("stick_concept", within(0, 30), &[Third], &[Short]),
    rule("flood_post", within(30, 80), &[Second], &[Long]),
    rule("texas_concept", within(10, 40), &[Second, Third], &[Short]),
    rule("levels_concept", within(20, 60), &[Second, Third], &[Short]),
    rule("corner_post", within(30, 70), &[Third, Fourth], &[Medium]),
    rule("deep_crossers", within(40, 80), &[Third, Fourth], &[Long]),
    rule("dagger_concept", within(25, 60), &[Third, Fourth], &[Medium]),
    rule("scissors", within(30, 60), &[Third], &[Medium]),
    rule("yankee_concept", within(50, 80), &[Third, Fourth], &[Long]),
    rule("slot_cross", within(20, 50), &[Third], &[Medium]),
    rule("corner_flood", within(40, 70), &[Third], &[Long]),
    rule("dagger_pivot", within(25, 50), &[Third], &[Medium]),
    rule("deep_out_wheel", within(30, 70), &[Fourth], &[Long]),
    rule("bunch_flood", within(30, 60), &[Third], &[Medium]),
    rule("backside_post_cross", within(40, 80), &[Fourth], &[Long]),
    rule("switch_verticals", within(100, 100), &[Third], &[Medium]),
    rule("post_wheel", within(0, 10), &[First], &[Long]),
    rule("levels_backed_up", within(0, 10), &[Fourth], &[Medium]),
    rule("flood_switch", within(20, 30), &[Fourth], &[Long]),
    rule("pa_deep_cross", within(15, 30), &[First], &[Long]),
    rule("double_post", within(10, 25), &[Fourth], &[Long]),
    rule("curl_flat", within(5, 15), &[Second], &[Medium]),
    rule("snag_concept", within(0, 10), &[Third], &[Medium]),
    rule("slot_fade", within(85, 100), &[Fourth], &[Medium]),
    rule("angle_route", within(0, 10), &[Second], &[Medium]),
    rule("stick_nod", within(90, 100), &[Third], &[Medium]),
    rule("quick_outs", within(70, 80), &[First], &[Short]),
    rule("china_concept", within(0, 5), &[Second], &[Medium]),
    rule("four_verts_backed_up", within(0, 5), &[First], &[Long]),
    rule("out_and_up", within(0, 10), &[Fourth], &[Medium]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::display_name;

    fn pos(yard: i64) -> FieldPosition {
        FieldPosition::new(yard).unwrap()
    }

    #[test]
    fn every_rule_names_a_catalog_play() {
        for rule in PLAY_RULES {
            assert!(display_name(rule.play).is_some(), "{}", rule.play);
        }
        assert_eq!(PLAY_RULES.len(), 39);
    }

    #[test]
    fn windows_are_inclusive() {
        let window = within(20, 30);
        assert!(window.contains(pos(20)));
        assert!(window.contains(pos(30)));
        assert!(!window.contains(pos(19)));
        assert!(!window.contains(pos(31)));
    }

    #[test]
    fn outside_window_excludes_its_range() {
        let window = YardWindow::Outside(30, 70);
        assert!(window.contains(pos(29)));
        assert!(window.contains(pos(71)));
        assert!(!window.contains(pos(30)));
        assert!(!window.contains(pos(70)));
    }

    #[test]
    fn rule_requires_all_three_conditions() {
        let rule = PLAY_RULES.iter().find(|r| r.play == "slot_fade").unwrap();
        assert!(rule.matches(&SituationModel::new(85, "4th", "medium").unwrap()));
        assert!(!rule.matches(&SituationModel::new(84, "4th", "medium").unwrap()));
        assert!(!rule.matches(&SituationModel::new(85, "3rd", "medium").unwrap()));
        assert!(!rule.matches(&SituationModel::new(85, "4th", "long").unwrap()));
    }
}
