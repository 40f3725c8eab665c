//! YearLevel enum for the five school year levels the wizard accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// School year level, Yr9 through Yr13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearLevel {
    Yr9,
    Yr10,
    Yr11,
    Yr12,
    Yr13,
}

impl YearLevel {
    /// Returns all year levels in ascending order.
    pub fn all() -> &'static [YearLevel] {
        &[
            YearLevel::Yr9,
            YearLevel::Yr10,
            YearLevel::Yr11,
            YearLevel::Yr12,
            YearLevel::Yr13,
        ]
    }

    /// Parses a year level from its display label (e.g. "Yr10").
    ///
    /// Returns `None` for anything outside the catalog, including the
    /// dropdown placeholder.
    pub fn parse(label: &str) -> Option<YearLevel> {
        let trimmed = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|year| year.label().eq_ignore_ascii_case(trimmed))
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            YearLevel::Yr9 => "Yr9",
            YearLevel::Yr10 => "Yr10",
            YearLevel::Yr11 => "Yr11",
            YearLevel::Yr12 => "Yr12",
            YearLevel::Yr13 => "Yr13",
        }
    }
}

impl fmt::Display for YearLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
