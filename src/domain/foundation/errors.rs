//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when validating collected intake values.
///
/// All three variants are recoverable: the offending step transition is
/// rejected and the wizard stays on the current screen awaiting corrected
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' could not be read from '{input}'")]
    Unparsable { field: &'static str, input: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: &'static str) -> Self {
        ValidationError::MissingField { field }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: &'static str, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }
    }

    /// Creates an unparsable input validation error.
    pub fn unparsable(field: &'static str, input: impl Into<String>) -> Self {
        ValidationError::Unparsable {
            field,
            input: input.into(),
        }
    }

    /// Returns the name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::Unparsable { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_field_name() {
        let err = ValidationError::missing_field("name");
        assert_eq!(format!("{}", err), "Field 'name' is required");
    }

    #[test]
    fn out_of_range_displays_bounds_and_actual() {
        let err = ValidationError::out_of_range("pain_level", 0, 10, 14);
        assert_eq!(
            format!("{}", err),
            "Field 'pain_level' must be between 0 and 10, got 14"
        );
    }

    #[test]
    fn unparsable_displays_offending_input() {
        let err = ValidationError::unparsable("pain_level", "abc");
        assert_eq!(
            format!("{}", err),
            "Field 'pain_level' could not be read from 'abc'"
        );
    }

    #[test]
    fn field_returns_field_name_for_all_variants() {
        assert_eq!(ValidationError::missing_field("year_level").field(), "year_level");
        assert_eq!(ValidationError::out_of_range("pain_level", 0, 10, -1).field(), "pain_level");
        assert_eq!(ValidationError::unparsable("pain_level", "x").field(), "pain_level");
    }
}
