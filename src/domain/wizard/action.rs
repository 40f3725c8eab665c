//! Actions a screen can submit to the step sequencer.

use std::collections::BTreeSet;

use crate::domain::foundation::{ActivityType, BodyArea, YearLevel};

/// One user submission against the current step.
///
/// Selection fields use `Option`, where `None` models a choice control
/// still on its placeholder. The pain rating travels as the raw text the
/// user entered and is re-parsed by the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Begin a new session from the intro screen.
    Start,

    /// Submit the identity screen.
    SubmitIdentity {
        name: String,
        year_level: Option<YearLevel>,
    },

    /// Submit the pain screen.
    SubmitPain { input: String },

    /// Submit the body area and activity screen.
    SubmitBodyArea {
        areas: BTreeSet<BodyArea>,
        activity: Option<ActivityType>,
    },

    /// Abort, or leave the final report screen.
    Close,
}

impl StepAction {
    /// Returns a short name for error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            StepAction::Start => "start",
            StepAction::SubmitIdentity { .. } => "submit identity",
            StepAction::SubmitPain { .. } => "submit pain",
            StepAction::SubmitBodyArea { .. } => "submit body area",
            StepAction::Close => "close",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_identifies_each_action() {
        assert_eq!(StepAction::Start.name(), "start");
        assert_eq!(
            StepAction::SubmitPain {
                input: "3".to_string()
            }
            .name(),
            "submit pain"
        );
        assert_eq!(StepAction::Close.name(), "close");
    }
}
