//! ActivityType enum for the kind of physical activity the user does.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of physical activity the user engages in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    SportsPlayer,
    CasualExerciser,
    PostInjuryRecovery,
}

impl ActivityType {
    /// Returns all activity types in catalog order.
    pub fn all() -> &'static [ActivityType] {
        &[
            ActivityType::SportsPlayer,
            ActivityType::CasualExerciser,
            ActivityType::PostInjuryRecovery,
        ]
    }

    /// Parses an activity type from its display name.
    ///
    /// Returns `None` for anything outside the catalog, including the
    /// dropdown placeholder.
    pub fn parse(name: &str) -> Option<ActivityType> {
        let trimmed = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|activity| activity.display_name().eq_ignore_ascii_case(trimmed))
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::SportsPlayer => "Sports Player",
            ActivityType::CasualExerciser => "Casual Exerciser",
            ActivityType::PostInjuryRecovery => "Post-Injury Recovery",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
