//! Renders the human-readable report block for one completed session.

use crate::domain::recommendation::RecommendationResult;
use crate::domain::session::CompletedIntake;

/// Renders the report block appended to the sink and shown on the final
/// screen.
///
/// Field order and the literal labels are a compatibility contract with
/// existing report files; do not reorder or reword them. Each block ends
/// with a blank separator line so successive sessions stay readable.
pub fn render_report(intake: &CompletedIntake<'_>, recommendation: &RecommendationResult) -> String {
    let mut block = String::new();
    block.push_str("----- Rehab Report -----\n");
    block.push_str(&format!("Name: {}\n", intake.name));
    block.push_str(&format!("Year Level: {}\n", intake.year_level));
    block.push_str(&format!(
        "Pain Level: {} ({})\n",
        intake.pain_level, recommendation.tier
    ));
    block.push_str(&format!("Affected Area(s): {}\n", intake.joined_areas()));
    block.push_str(&format!("Activity Type: {}\n", intake.activity_type));
    block.push_str(&format!(
        "Recommended Exercises: {}\n",
        recommendation.exercise_text
    ));
    block.push_str(&format!("Diet Tips: {}\n", recommendation.diet_text));
    block.push_str(&format!("Recovery Advice: {}\n", recommendation.tips_text));
    block.push_str(&format!(
        "Motivational Quote: {}\n",
        recommendation.motivation.as_deref().unwrap_or("")
    ));
    block.push_str("------------------------\n\n");
    block
}
