//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request DTOs and helpers that map
//! JSON rejections to [`AppError::MalformedBody`].

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Request types with business rules beyond what serde checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::MalformedBody`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::MalformedBody(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::InvalidRequest)?;
    Ok(value)
}

/// Validate a scenario id supplied by a client.
pub(crate) fn check_scenario_id(scenario_id: &str) -> Result<(), String> {
    if scenario_id.trim().is_empty() {
        return Err("scenarioId must not be empty".to_string());
    }
    if scenario_id.len() > 255 {
        return Err("scenarioId must not exceed 255 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_id_rules() {
        assert!(check_scenario_id("gdpr-tightening").is_ok());
        assert!(check_scenario_id("   ").is_err());
        assert!(check_scenario_id(&"x".repeat(256)).is_err());
    }
}
