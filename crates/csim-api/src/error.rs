//! # API Errors
//!
//! Every failure leaves the service as `{"error": {"code", "message"}}`.
//!
//! | Error | Status | Code |
//! |---|---|---|
//! | unknown stored report, unknown scenario | 404 | `NOT_FOUND` |
//! | report missing scores or industry, rejected request field | 422 | `VALIDATION_ERROR` |
//! | body is not JSON or does not fit the request shape | 400 | `BAD_REQUEST` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use csim_core::ValidationError;
use csim_engine::SimulationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope returned by every failing route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Code and message of a failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `NOT_FOUND`, `VALIDATION_ERROR`, `BAD_REQUEST`.
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    /// Envelope for a code and message.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub(crate) fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Failure of an API request.
#[derive(Error, Debug)]
pub enum AppError {
    /// No stored report has this id.
    #[error("report {0:?} not found")]
    ReportNotFound(String),

    /// The engine refused the report or could not resolve the scenario.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A report failed validation outside a simulation (e.g. on upload).
    #[error("invalid report: {0}")]
    InvalidReport(#[from] ValidationError),

    /// A well-formed request broke a field rule.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The body could not be decoded into the request type.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ReportNotFound(_)
            | Self::Simulation(SimulationError::ScenarioNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Simulation(SimulationError::InvalidReport(_))
            | Self::InvalidReport(_)
            | Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReportNotFound(_) | Self::Simulation(SimulationError::ScenarioNotFound { .. }) => {
                "NOT_FOUND"
            }
            Self::MalformedBody(_) => "BAD_REQUEST",
            _ => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "request failed");
        ErrorBody::new(self.code(), self.to_string()).respond(status)
    }
}
