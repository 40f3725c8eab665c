//! BodyArea enum for the fixed catalog of selectable body areas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body area that can be reported as affected.
///
/// The variant order matches the selection list presented to the user, and
/// `Ord` follows it so collected sets iterate in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyArea {
    Knee,
    Shoulder,
    Back,
    Wrist,
    Ankle,
    Thigh,
    Neck,
    Hand,
    Hamstring,
}

impl BodyArea {
    /// Returns all body areas in catalog order.
    pub fn all() -> &'static [BodyArea] {
        &[
            BodyArea::Knee,
            BodyArea::Shoulder,
            BodyArea::Back,
            BodyArea::Wrist,
            BodyArea::Ankle,
            BodyArea::Thigh,
            BodyArea::Neck,
            BodyArea::Hand,
            BodyArea::Hamstring,
        ]
    }

    /// Parses a body area from its display label.
    pub fn parse(label: &str) -> Option<BodyArea> {
        let trimmed = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|area| area.label().eq_ignore_ascii_case(trimmed))
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BodyArea::Knee => "Knee",
            BodyArea::Shoulder => "Shoulder",
            BodyArea::Back => "Back",
            BodyArea::Wrist => "Wrist",
            BodyArea::Ankle => "Ankle",
            BodyArea::Thigh => "Thigh",
            BodyArea::Neck => "Neck",
            BodyArea::Hand => "Hand",
            BodyArea::Hamstring => "Hamstring",
        }
    }

    /// Returns the lowercase label used when interpolating into advice text.
    pub fn lower_label(&self) -> &'static str {
        match self {
            BodyArea::Knee => "knee",
            BodyArea::Shoulder => "shoulder",
            BodyArea::Back => "back",
            BodyArea::Wrist => "wrist",
            BodyArea::Ankle => "ankle",
            BodyArea::Thigh => "thigh",
            BodyArea::Neck => "neck",
            BodyArea::Hand => "hand",
            BodyArea::Hamstring => "hamstring",
        }
    }
}

impl fmt::Display for BodyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_nine_areas_in_catalog_order() {
        let all = BodyArea::all();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], BodyArea::Knee);
        assert_eq!(all[8], BodyArea::Hamstring);
    }

    #[test]
    fn ord_matches_catalog_order() {
        let mut sorted: Vec<BodyArea> = BodyArea::all().to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), BodyArea::all());
    }

    #[test]
    fn parse_accepts_labels_case_insensitively() {
        assert_eq!(BodyArea::parse("Knee"), Some(BodyArea::Knee));
        assert_eq!(BodyArea::parse("  hamstring "), Some(BodyArea::Hamstring));
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(BodyArea::parse("Elbow"), None);
        assert_eq!(BodyArea::parse(""), None);
    }

    #[test]
    fn lower_label_is_lowercased_label() {
        for area in BodyArea::all() {
            assert_eq!(area.lower_label(), area.label().to_lowercase());
        }
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&BodyArea::Knee).unwrap(), "\"knee\"");
    }
}
