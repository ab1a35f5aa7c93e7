//! Caller-supplied input and its validated forms.
//!
//! Raw request shapes (`CreateWorkout`, `FilterParams`) are deserialized as-is
//! and only become `NewWorkout` / `WorkoutFilter` after validation. The store
//! accepts nothing but the validated forms, so a workout without sets or with
//! a negative weight cannot reach a write.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::error::ValidationError;

// `\d` would also accept non-ASCII digits.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Validate a `YYYY-MM-DD` calendar date, returning it trimmed.
///
/// `field` names the input in the error message.
pub fn parse_date(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    let invalid = || ValidationError::InvalidDate { field, value: value.to_owned() };
    if !DATE_SHAPE.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    Ok(value.to_owned())
}

/// Parse a workout id from a path segment or query value.
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse::<i64>().map_err(|_| ValidationError::InvalidId(raw.to_owned()))
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// One set as submitted by a client. Numbers stay loosely typed so that
/// `reps: 2.5` is reported as a validation failure rather than a decode error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SetInput {
    pub weight: Option<f64>,
    pub reps: Option<f64>,
}

/// Workout creation request as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkout {
    pub date: Option<String>,
    pub exercise: Option<String>,
    pub notes: Option<String>,
    pub sets: Option<Vec<SetInput>>,
}

/// A validated set: finite `weight >= 0`, `reps >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewSet {
    pub weight: f64,
    pub reps: i64,
}

impl NewSet {
    fn check(&self, index: usize) -> Result<(), ValidationError> {
        if !self.weight.is_finite() {
            return Err(ValidationError::InvalidSet { index, reason: "weight must be a finite number" });
        }
        if self.weight < 0.0 {
            return Err(ValidationError::InvalidSet { index, reason: "weight must not be negative" });
        }
        if self.reps < 1 {
            return Err(ValidationError::InvalidSet { index, reason: "reps must be at least 1" });
        }
        Ok(())
    }
}

impl SetInput {
    /// `index` is 1-based and only used for error reporting.
    fn validate(self, index: usize) -> Result<NewSet, ValidationError> {
        let (Some(weight), Some(reps)) = (self.weight, self.reps) else {
            return Err(ValidationError::InvalidSet { index, reason: "weight and reps are required" });
        };
        if !reps.is_finite() || reps.fract() != 0.0 {
            return Err(ValidationError::InvalidSet { index, reason: "reps must be a whole number" });
        }
        if reps < 1.0 {
            return Err(ValidationError::InvalidSet { index, reason: "reps must be at least 1" });
        }
        // i64::MAX rounds up to 2^63 as f64, the first value that no longer fits
        if reps >= i64::MAX as f64 {
            return Err(ValidationError::InvalidSet { index, reason: "reps is too large" });
        }
        #[expect(clippy::cast_possible_truncation, reason = "whole number in i64 range checked above")]
        let set = NewSet { weight, reps: reps as i64 };
        set.check(index)?;
        Ok(set)
    }
}

/// A workout that passed validation and may be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    date: String,
    exercise: String,
    notes: Option<String>,
    sets: Vec<NewSet>,
}

impl NewWorkout {
    /// Validate and normalize a workout.
    ///
    /// Checks run in order: date, exercise, set count, then each set.
    /// Exercise and notes are trimmed; blank notes become `None`.
    pub fn new(
        date: &str,
        exercise: &str,
        notes: Option<&str>,
        sets: Vec<NewSet>,
    ) -> Result<Self, ValidationError> {
        let date = parse_date("date", date)?;
        let exercise = exercise.trim();
        if exercise.is_empty() {
            return Err(ValidationError::EmptyExercise);
        }
        if sets.is_empty() {
            return Err(ValidationError::NoSets);
        }
        for (i, set) in sets.iter().enumerate() {
            set.check(i + 1)?;
        }
        Ok(Self {
            date,
            exercise: exercise.to_owned(),
            notes: non_blank(notes).map(ToOwned::to_owned),
            sets,
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Sets in submission order; position `i` is stored as `set_index = i + 1`.
    pub fn sets(&self) -> &[NewSet] {
        &self.sets
    }
}

impl TryFrom<CreateWorkout> for NewWorkout {
    type Error = ValidationError;

    fn try_from(req: CreateWorkout) -> Result<Self, Self::Error> {
        let date = req.date.unwrap_or_default();
        parse_date("date", &date)?;
        let exercise = req.exercise.unwrap_or_default();
        if exercise.trim().is_empty() {
            return Err(ValidationError::EmptyExercise);
        }
        let raw_sets = req.sets.unwrap_or_default();
        if raw_sets.is_empty() {
            return Err(ValidationError::NoSets);
        }
        let sets = raw_sets
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.validate(i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&date, &exercise, req.notes.as_deref(), sets)
    }
}

/// List/trend filter as submitted by a client. Blank values mean "absent".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub exercise: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Validated list filter.
///
/// `exercise` matches as a case-sensitive substring; `from` and `to` are
/// inclusive bounds, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    exercise: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl WorkoutFilter {
    pub fn new(
        exercise: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            exercise: non_blank(exercise).map(ToOwned::to_owned),
            from: non_blank(from).map(|d| parse_date("from", d)).transpose()?,
            to: non_blank(to).map(|d| parse_date("to", d)).transpose()?,
        })
    }

    pub fn exercise(&self) -> Option<&str> {
        self.exercise.as_deref()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }
}

impl TryFrom<&FilterParams> for WorkoutFilter {
    type Error = ValidationError;

    fn try_from(params: &FilterParams) -> Result<Self, Self::Error> {
        Self::new(params.exercise.as_deref(), params.from.as_deref(), params.to.as_deref())
    }
}
