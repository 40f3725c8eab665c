//! Error types for the session module.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised when writing to a session record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field was written twice. Collected answers are immutable for the
    /// rest of the session, and the forward-only wizard never retries a
    /// committed step, so this guards an internal invariant.
    #[error("Field '{field}' has already been recorded for this session")]
    FieldAlreadySet { field: &'static str },
}
