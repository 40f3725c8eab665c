//! Rule-based recovery recommendations derived from the pain rating.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{BodyArea, PainLevel};

/// Severity tier derived solely from the pain rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Minor,
    Moderate,
    Severe,
}

impl SeverityTier {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Minor => "Minor",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::Severe => "Severe",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accent color paired with each severity tier on the report screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Green,
    Orange,
    Red,
}

/// Advice derived from a completed intake.
///
/// Computed once per session when the wizard reaches its report step;
/// never persisted or cached across sessions. The motivational quote is
/// attached separately after classification and has no bearing on the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub tier: SeverityTier,
    pub exercise_text: String,
    pub diet_text: String,
    pub tips_text: String,
    pub accent_color: AccentColor,
    pub motivation: Option<String>,
}

impl RecommendationResult {
    /// Attaches a motivational quote to the result.
    pub fn with_motivation(mut self, quote: impl Into<String>) -> Self {
        self.motivation = Some(quote.into());
        self
    }
}

/// Maps a pain rating and the affected areas to tiered advice.
///
/// Tier bounds are inclusive and evaluated in order, first match wins:
/// 0..=3 Minor, 4..=7 Moderate, 8..=10 Severe. The affected areas are only
/// interpolated into the exercise text; diet and recovery text depend on
/// the tier alone. Inputs are pre-validated, so this function cannot fail.
pub fn classify(pain: PainLevel, areas: &BTreeSet<BodyArea>) -> RecommendationResult {
    let area = joined_areas(areas);

    match pain.value() {
        0..=3 => RecommendationResult {
            tier: SeverityTier::Minor,
            exercise_text: format!("Gentle stretches/light activity targeting {}", area),
            diet_text: "Drink water and eat healthy snacks.".to_string(),
            tips_text: "Stay lightly active and rest well.".to_string(),
            accent_color: AccentColor::Green,
            motivation: None,
        },
        4..=7 => RecommendationResult {
            tier: SeverityTier::Moderate,
            exercise_text: format!("Controlled/light physio for {} with rest breaks", area),
            diet_text: "Add omega-3 foods, reduce sugar and sodium.".to_string(),
            tips_text: "Take rest days and track your recovery.".to_string(),
            accent_color: AccentColor::Orange,
            motivation: None,
        },
        _ => RecommendationResult {
            tier: SeverityTier::Severe,
            exercise_text: format!("Rest/limit movement of {}; seek professional help", area),
            diet_text: "Eat vegetables, fruits, and stay hydrated.".to_string(),
            tips_text: "Seek professional help if pain continues.".to_string(),
            accent_color: AccentColor::Red,
            motivation: None,
        },
    }
}

/// Comma-joins the affected areas in catalog order, lowercased for
/// interpolation into advice sentences.
fn joined_areas(areas: &BTreeSet<BodyArea>) -> String {
    areas
        .iter()
        .map(|area| area.lower_label())
        .collect::<Vec<_>>()
        .join(", ")
}
