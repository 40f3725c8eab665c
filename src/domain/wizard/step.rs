//! WizardStep enum: the fixed forward-only screen sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of data-collection steps shown in the progress indicator.
pub const TOTAL_PROGRESS_STEPS: u8 = 4;

/// The screens of one wizard run, in canonical order.
///
/// Transitions run strictly forward: Intro → Identity → Pain → BodyArea →
/// Report. `Closed` is terminal and reachable from every other step via an
/// explicit abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Intro,
    Identity,
    Pain,
    BodyArea,
    Report,
    Closed,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Intro,
            WizardStep::Identity,
            WizardStep::Pain,
            WizardStep::BodyArea,
            WizardStep::Report,
            WizardStep::Closed,
        ]
    }

    /// Returns the step a successful submission advances to, if any.
    pub fn forward_successor(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Intro => Some(WizardStep::Identity),
            WizardStep::Identity => Some(WizardStep::Pain),
            WizardStep::Pain => Some(WizardStep::BodyArea),
            WizardStep::BodyArea => Some(WizardStep::Report),
            WizardStep::Report => Some(WizardStep::Closed),
            WizardStep::Closed => None,
        }
    }

    /// Validates a transition from this step to another.
    ///
    /// Valid transitions are the single forward successor, plus the abort
    /// edge to `Closed` from any non-terminal step.
    pub fn can_transition_to(&self, target: &WizardStep) -> bool {
        if *self != WizardStep::Closed && *target == WizardStep::Closed {
            return true;
        }
        self.forward_successor() == Some(*target)
    }

    /// Returns all valid target steps from this step.
    pub fn valid_transitions(&self) -> Vec<WizardStep> {
        WizardStep::all()
            .iter()
            .copied()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }

    /// Returns true if no transitions leave this step.
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }

    /// Returns the progress position shown under the step's title, as
    /// `(step, of)`, for the four numbered screens.
    pub fn progress(&self) -> Option<(u8, u8)> {
        let position = match self {
            WizardStep::Identity => 1,
            WizardStep::Pain => 2,
            WizardStep::BodyArea => 3,
            WizardStep::Report => 4,
            WizardStep::Intro | WizardStep::Closed => return None,
        };
        Some((position, TOTAL_PROGRESS_STEPS))
    }

    /// Returns the screen title.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Intro => "Introduction",
            WizardStep::Identity => "Student Info",
            WizardStep::Pain => "Pain Level",
            WizardStep::BodyArea => "Body Area & Activity",
            WizardStep::Report => "Final Recommendations",
            WizardStep::Closed => "Closed",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
