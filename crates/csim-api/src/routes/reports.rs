//! # Report Provider API
//!
//! Stores reports produced by an upstream analysis pipeline and runs the
//! simulation and aggregation contracts against them.
//!
//! | Method | Path                                   | Contract            |
//! |--------|----------------------------------------|---------------------|
//! | POST   | `/v1/reports`                          | store               |
//! | GET    | `/v1/reports`                          | list                |
//! | GET    | `/v1/reports/{id}`                     | fetch               |
//! | POST   | `/v1/reports/{id}/simulations`         | `simulate`          |
//! | GET    | `/v1/reports/{id}/risk-distribution`   | `aggregate(report)` |
//! | GET    | `/v1/portfolio/risk-distribution`      | `aggregate(all)`    |

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use csim_aggregate::{aggregate_portfolio, aggregate_report, RiskDistribution};
use csim_core::ComplianceReport;
use csim_engine::PredictiveAnalysis;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{check_scenario_id, extract_json, extract_validated_json, Validate};
use crate::state::{AppState, ReportProvider};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Simulate a scenario against a stored report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredSimulationRequest {
    /// Catalog id of the scenario, resolved for the report's industry.
    pub scenario_id: String,
}

impl Validate for StoredSimulationRequest {
    fn validate(&self) -> Result<(), String> {
        check_scenario_id(&self.scenario_id)
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the report provider router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reports", post(create_report).get(list_reports))
        .route("/v1/reports/{id}", get(get_report))
        .route("/v1/reports/{id}/simulations", post(simulate_report))
        .route("/v1/reports/{id}/risk-distribution", get(report_distribution))
        .route("/v1/portfolio/risk-distribution", get(portfolio_distribution))
}

fn fetch(provider: &dyn ReportProvider, id: &str) -> Result<ComplianceReport, AppError> {
    provider
        .report(id)
        .ok_or_else(|| AppError::ReportNotFound(id.to_string()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/reports: Store a report.
///
/// Reports without an id are assigned a UUID. Storing an existing id
/// replaces that report.
#[utoipa::path(
    post,
    path = "/v1/reports",
    request_body = ComplianceReport,
    responses(
        (status = 201, description = "Report stored", body = ComplianceReport),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
        (status = 422, description = "Report is missing scores or industry", body = ErrorBody),
    ),
    tag = "reports"
)]
async fn create_report(
    State(state): State<AppState>,
    body: Result<Json<ComplianceReport>, JsonRejection>,
) -> Result<(StatusCode, Json<ComplianceReport>), AppError> {
    let mut report = extract_json(body)?;
    report.validate()?;
    let id = match report.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => Uuid::new_v4().to_string(),
    };
    report.id = Some(id.clone());

    let replaced = state.reports.insert(id.clone(), report.clone()).is_some();
    tracing::info!(report = %id, replaced, stored = state.reports.len(), "report stored");
    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /v1/reports: List stored reports.
#[utoipa::path(
    get,
    path = "/v1/reports",
    responses(
        (status = 200, description = "Stored reports in insertion order", body = Vec<ComplianceReport>),
    ),
    tag = "reports"
)]
async fn list_reports(State(state): State<AppState>) -> Json<Vec<ComplianceReport>> {
    Json(state.provider().reports())
}

/// GET /v1/reports/{id}: Fetch one report.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}",
    params(("id" = String, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report found", body = ComplianceReport),
        (status = 404, description = "Report not found", body = ErrorBody),
    ),
    tag = "reports"
)]
async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ComplianceReport>, AppError> {
    fetch(state.provider(), &id).map(Json)
}

/// POST /v1/reports/{id}/simulations: Simulate a scenario against a stored report.
#[utoipa::path(
    post,
    path = "/v1/reports/{id}/simulations",
    params(("id" = String, Path, description = "Report id")),
    request_body = StoredSimulationRequest,
    responses(
        (status = 200, description = "Projected scores, risk trends and recommendations", body = PredictiveAnalysis),
        (status = 404, description = "Report or scenario not found", body = ErrorBody),
        (status = 422, description = "Stored report is missing scores or industry", body = ErrorBody),
    ),
    tag = "reports"
)]
async fn simulate_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StoredSimulationRequest>, JsonRejection>,
) -> Result<Json<PredictiveAnalysis>, AppError> {
    let req = extract_validated_json(body)?;
    let report = fetch(state.provider(), &id)?;
    let analysis = state.simulator.simulate(&report, &req.scenario_id)?;
    tracing::info!(report = %id, scenario = %analysis.scenario_id, "simulation completed");
    Ok(Json(analysis))
}

/// GET /v1/reports/{id}/risk-distribution: Single-document risk view.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}/risk-distribution",
    params(("id" = String, Path, description = "Report id")),
    responses(
        (status = 200, description = "Risk distribution of one report", body = RiskDistribution),
        (status = 404, description = "Report not found", body = ErrorBody),
    ),
    tag = "reports"
)]
async fn report_distribution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RiskDistribution>, AppError> {
    let report = fetch(state.provider(), &id)?;
    Ok(Json(aggregate_report(&report)))
}

/// GET /v1/portfolio/risk-distribution: Risk view across every stored report.
#[utoipa::path(
    get,
    path = "/v1/portfolio/risk-distribution",
    responses(
        (status = 200, description = "Risk distribution across stored reports", body = RiskDistribution),
    ),
    tag = "reports"
)]
async fn portfolio_distribution(State(state): State<AppState>) -> Json<RiskDistribution> {
    Json(aggregate_portfolio(&state.provider().reports()))
}
