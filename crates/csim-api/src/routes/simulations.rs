//! # Simulation API
//!
//! `POST /v1/simulations` projects a report supplied in the request body.
//! Stored-report simulation lives in [`crate::routes::reports`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use csim_core::ComplianceReport;
use csim_engine::PredictiveAnalysis;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{check_scenario_id, extract_validated_json, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Simulate a scenario against an inline report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// The report to project.
    pub report: ComplianceReport,
    /// Catalog id of the scenario, resolved for the report's industry.
    pub scenario_id: String,
}

impl Validate for SimulationRequest {
    fn validate(&self) -> Result<(), String> {
        check_scenario_id(&self.scenario_id)
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the simulation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/simulations", post(run_simulation))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/simulations: Simulate a catalog scenario against a report.
#[utoipa::path(
    post,
    path = "/v1/simulations",
    request_body = SimulationRequest,
    responses(
        (status = 200, description = "Projected scores, risk trends and recommendations", body = PredictiveAnalysis),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 404, description = "Scenario not found for the report's industry", body = ErrorBody),
        (status = 422, description = "Report is missing scores or industry", body = ErrorBody),
    ),
    tag = "simulations"
)]
async fn run_simulation(
    State(state): State<AppState>,
    body: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<Json<PredictiveAnalysis>, AppError> {
    let req = extract_validated_json(body)?;
    let analysis = state.simulator.simulate(&req.report, &req.scenario_id)?;
    tracing::info!(
        report = req.report.display_id(),
        scenario = %analysis.scenario_id,
        "simulation completed"
    );
    Ok(Json(analysis))
}
