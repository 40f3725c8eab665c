//! Step sequencer: drives one wizard run over the fixed screen order.

use crate::domain::foundation::{PainLevel, ValidationError};
use crate::domain::recommendation::{classify, RecommendationResult};
use crate::domain::session::SessionRecord;

use super::{StepAction, WizardError, WizardStep};

/// The step sequencer for one wizard run.
///
/// Owns the [`SessionRecord`] for the duration of the run and enforces
/// per-step validation before any transition commits. A rejected action
/// leaves both the step and the record exactly as they were; only the
/// unvalidated new values are discarded.
///
/// The recommendation is computed exactly once, when the final data step
/// commits and the wizard enters its report step. The sequencer itself
/// performs no I/O; persisting the report belongs to the application layer.
#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    record: SessionRecord,
    recommendation: Option<RecommendationResult>,
}

impl Wizard {
    /// Creates a wizard on the intro screen with a fresh record.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Intro,
            record: SessionRecord::new(),
            recommendation: None,
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the session record.
    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    /// Returns the computed recommendation once the report step is reached.
    pub fn recommendation(&self) -> Option<&RecommendationResult> {
        self.recommendation.as_ref()
    }

    /// Applies one user action, returning the step the wizard is now on.
    ///
    /// # Errors
    ///
    /// - `Validation` if the submitted data fails the current step's checks
    /// - `ActionNotAllowed` if the action does not belong to the current step
    ///
    /// Both leave the wizard unchanged.
    pub fn apply(&mut self, action: StepAction) -> Result<WizardStep, WizardError> {
        match (self.step, action) {
            (WizardStep::Intro, StepAction::Start) => {
                self.step = WizardStep::Identity;
            }

            (WizardStep::Identity, StepAction::SubmitIdentity { name, year_level }) => {
                // Validate both fields before committing either, so a
                // rejection never leaves a half-written record.
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::missing_field("name").into());
                }
                let year_level =
                    year_level.ok_or_else(|| ValidationError::missing_field("year_level"))?;

                self.record.set_name(trimmed)?;
                self.record.set_year_level(year_level)?;
                self.step = WizardStep::Pain;
            }

            (WizardStep::Pain, StepAction::SubmitPain { input }) => {
                let pain = PainLevel::parse(&input)?;
                self.record.set_pain_level(pain)?;
                self.step = WizardStep::BodyArea;
            }

            (WizardStep::BodyArea, StepAction::SubmitBodyArea { areas, activity }) => {
                if areas.is_empty() {
                    return Err(ValidationError::missing_field("body_areas").into());
                }
                let activity =
                    activity.ok_or_else(|| ValidationError::missing_field("activity_type"))?;

                self.record.set_body_areas(areas)?;
                self.record.set_activity_type(activity)?;

                let intake = self.record.completed()?;
                let recommendation = classify(intake.pain_level, intake.body_areas);
                self.recommendation = Some(recommendation);
                self.step = WizardStep::Report;
            }

            (step, StepAction::Close) if !step.is_terminal() => {
                self.step = WizardStep::Closed;
            }

            (step, action) => {
                return Err(WizardError::ActionNotAllowed {
                    step,
                    action: action.name(),
                });
            }
        }

        Ok(self.step)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
