//! Session record: the accumulating answers for one wizard run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{
    ActivityType, BodyArea, PainLevel, SessionId, Timestamp, ValidationError, YearLevel,
};

use super::SessionError;

/// Answers collected across the wizard's data steps.
///
/// # Invariants
///
/// - Each field is written at most once; a second write is rejected.
/// - `name` is stored trimmed and non-empty.
/// - `body_areas` is set in one shot from a non-empty selection.
/// - A report can only be derived from a record whose every field is set
///   (see [`SessionRecord::completed`]).
///
/// The record is exclusively owned by the step sequencer for the duration
/// of one wizard run and discarded when the wizard closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this wizard run.
    id: SessionId,

    /// When the run started.
    started_at: Timestamp,

    /// The user's name, trimmed.
    name: Option<String>,

    /// Selected school year level.
    year_level: Option<YearLevel>,

    /// Self-reported pain rating.
    pain_level: Option<PainLevel>,

    /// Affected body areas, in catalog order.
    body_areas: BTreeSet<BodyArea>,

    /// Kind of physical activity the user does.
    activity_type: Option<ActivityType>,
}

impl SessionRecord {
    /// Creates an empty record for a fresh wizard run.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            name: None,
            year_level: None,
            pain_level: None,
            body_areas: BTreeSet::new(),
            activity_type: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns when the run started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns the recorded name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the recorded year level, if set.
    pub fn year_level(&self) -> Option<YearLevel> {
        self.year_level
    }

    /// Returns the recorded pain rating, if set.
    pub fn pain_level(&self) -> Option<PainLevel> {
        self.pain_level
    }

    /// Returns the recorded body areas (empty until set).
    pub fn body_areas(&self) -> &BTreeSet<BodyArea> {
        &self.body_areas
    }

    /// Returns the recorded activity type, if set.
    pub fn activity_type(&self) -> Option<ActivityType> {
        self.activity_type
    }

    /// Returns true once every field has been recorded.
    pub fn is_complete(&self) -> bool {
        self.completed().is_ok()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Write-once mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Records the user's name.
    ///
    /// # Errors
    ///
    /// - `Validation(MissingField)` if the trimmed name is empty
    /// - `FieldAlreadySet` if a name was already recorded
    pub fn set_name(&mut self, name: &str) -> Result<(), SessionError> {
        if self.name.is_some() {
            return Err(SessionError::FieldAlreadySet { field: "name" });
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::missing_field("name").into());
        }
        self.name = Some(trimmed.to_string());
        Ok(())
    }

    /// Records the year level.
    ///
    /// # Errors
    ///
    /// - `FieldAlreadySet` if a year level was already recorded
    pub fn set_year_level(&mut self, year_level: YearLevel) -> Result<(), SessionError> {
        if self.year_level.is_some() {
            return Err(SessionError::FieldAlreadySet { field: "year_level" });
        }
        self.year_level = Some(year_level);
        Ok(())
    }

    /// Records the pain rating.
    ///
    /// # Errors
    ///
    /// - `FieldAlreadySet` if a rating was already recorded
    pub fn set_pain_level(&mut self, pain_level: PainLevel) -> Result<(), SessionError> {
        if self.pain_level.is_some() {
            return Err(SessionError::FieldAlreadySet { field: "pain_level" });
        }
        self.pain_level = Some(pain_level);
        Ok(())
    }

    /// Records the affected body areas in one shot.
    ///
    /// # Errors
    ///
    /// - `Validation(MissingField)` if the selection is empty
    /// - `FieldAlreadySet` if areas were already recorded
    pub fn set_body_areas(&mut self, areas: BTreeSet<BodyArea>) -> Result<(), SessionError> {
        if !self.body_areas.is_empty() {
            return Err(SessionError::FieldAlreadySet { field: "body_areas" });
        }
        if areas.is_empty() {
            return Err(ValidationError::missing_field("body_areas").into());
        }
        self.body_areas = areas;
        Ok(())
    }

    /// Records the activity type.
    ///
    /// # Errors
    ///
    /// - `FieldAlreadySet` if an activity type was already recorded
    pub fn set_activity_type(&mut self, activity: ActivityType) -> Result<(), SessionError> {
        if self.activity_type.is_some() {
            return Err(SessionError::FieldAlreadySet {
                field: "activity_type",
            });
        }
        self.activity_type = Some(activity);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Completion
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the fully-populated view a report is derived from.
    ///
    /// # Errors
    ///
    /// - `MissingField` naming the first unset field
    pub fn completed(&self) -> Result<CompletedIntake<'_>, ValidationError> {
        let name = self
            .name
            .as_deref()
            .ok_or(ValidationError::missing_field("name"))?;
        let year_level = self
            .year_level
            .ok_or(ValidationError::missing_field("year_level"))?;
        let pain_level = self
            .pain_level
            .ok_or(ValidationError::missing_field("pain_level"))?;
        if self.body_areas.is_empty() {
            return Err(ValidationError::missing_field("body_areas"));
        }
        let activity_type = self
            .activity_type
            .ok_or(ValidationError::missing_field("activity_type"))?;

        Ok(CompletedIntake {
            name,
            year_level,
            pain_level,
            body_areas: &self.body_areas,
            activity_type,
        })
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of a record with every field present.
///
/// Existence of this value is the proof the report step requires.
#[derive(Debug, Clone, Copy)]
pub struct CompletedIntake<'a> {
    pub name: &'a str,
    pub year_level: YearLevel,
    pub pain_level: PainLevel,
    pub body_areas: &'a BTreeSet<BodyArea>,
    pub activity_type: ActivityType,
}

impl CompletedIntake<'_> {
    /// Comma-joins the affected areas using their display labels.
    pub fn joined_areas(&self) -> String {
        self.body_areas
            .iter()
            .map(|area| area.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
