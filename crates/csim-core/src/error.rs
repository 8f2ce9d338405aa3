//! # Error Hierarchy
//!
//! Structured error types for the simulator, built with `thiserror`.
//!
//! Only two conditions are genuine failures of the pure core: a report that
//! lacks the scores a projection needs ([`ValidationError`]) and a scenario
//! that cannot be resolved (owned by `csim-engine`). Everything else is
//! normalized rather than rejected.

use thiserror::Error;

/// Top-level error type for loading and validating simulator inputs.
#[derive(Error, Debug)]
pub enum CsimError {
    /// A report failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Defects in a compliance report that make projections meaningless.
///
/// Each variant names the offending wire field so that callers can surface
/// an actionable message without re-inspecting the report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is absent (or blank, for string fields).
    #[error("report is missing required field `{0}`")]
    MissingField(&'static str),

    /// A score is NaN, infinite, or outside `[0, 100]`.
    #[error("report field `{field}` must be a finite score between 0 and 100, got {value}")]
    ScoreOutOfRange {
        /// The wire name of the offending score.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
