use thiserror::Error;

/// Rejection of caller-supplied input before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("exercise name is required")]
    EmptyExercise,

    #[error("at least one set is required")]
    NoSets,

    /// `index` is the 1-based position of the offending set.
    #[error("set {index}: {reason}")]
    InvalidSet { index: usize, reason: &'static str },

    #[error("invalid id: '{0}'")]
    InvalidId(String),
}
