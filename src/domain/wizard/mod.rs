//! Step sequencer for the four-screen intake wizard.

mod action;
mod errors;
mod sequencer;
mod step;

pub use action::StepAction;
pub use errors::WizardError;
pub use sequencer::Wizard;
pub use step::{WizardStep, TOTAL_PROGRESS_STEPS};
