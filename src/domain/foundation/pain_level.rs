//! Pain rating value object (0 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest reportable pain rating.
pub const MIN_PAIN: i32 = 0;

/// Highest reportable pain rating.
pub const MAX_PAIN: i32 = 10;

/// Self-reported pain rating: 0 (no pain) to 10 (worst imaginable).
///
/// Construction always goes through [`PainLevel::try_from_i32`] or
/// [`PainLevel::parse`], so a held value is guaranteed in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PainLevel(i32);

impl PainLevel {
    /// Creates a PainLevel from an integer, returning an error if out of range.
    pub fn try_from_i32(value: i32) -> Result<Self, ValidationError> {
        if (MIN_PAIN..=MAX_PAIN).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "pain_level",
                MIN_PAIN,
                MAX_PAIN,
                value,
            ))
        }
    }

    /// Re-parses a textual pain rating as submitted on the Pain step.
    ///
    /// # Errors
    ///
    /// - `Unparsable` if the trimmed input is not an integer
    /// - `OutOfRange` if the integer falls outside 0..=10
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value: i32 = trimmed
            .parse()
            .map_err(|_| ValidationError::unparsable("pain_level", trimmed))?;
        Self::try_from_i32(value)
    }

    /// Returns the numeric rating.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
