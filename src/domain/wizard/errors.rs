//! Error types for the step sequencer.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::session::SessionError;

use super::WizardStep;

/// Errors raised when applying an action to the wizard.
///
/// Every variant is recoverable: the transition is rejected and the wizard
/// stays on its current step with the record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The submitted action does not belong to the current step.
    #[error("Action '{action}' is not available on the {step} step")]
    ActionNotAllowed {
        step: WizardStep,
        action: &'static str,
    },

    /// A collected field was written twice (internal invariant guard).
    #[error("Field '{field}' has already been recorded for this session")]
    FieldAlreadySet { field: &'static str },
}

impl From<SessionError> for WizardError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(inner) => WizardError::Validation(inner),
            SessionError::FieldAlreadySet { field } => WizardError::FieldAlreadySet { field },
        }
    }
}
