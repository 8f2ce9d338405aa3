//! # OpenAPI Document
//!
//! Every route carries a `utoipa::path` annotation; [`ApiDoc`] collects
//! them with the wire schemas and serves the result at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// OpenAPI document for the scenario, simulation, distribution and report routes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Compliance Simulator API",
        version = "0.1.0",
        description = "Scenario catalog, predictive compliance simulation and risk distributions.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::scenarios::list_scenarios,
        crate::routes::simulations::run_simulation,
        crate::routes::distribution::risk_distribution,
        crate::routes::reports::create_report,
        crate::routes::reports::list_reports,
        crate::routes::reports::get_report,
        crate::routes::reports::simulate_report,
        crate::routes::reports::report_distribution,
        crate::routes::reports::portfolio_distribution,
    ),
    components(schemas(
        // Domain types
        csim_core::ComplianceReport,
        csim_core::Risk,
        csim_core::Severity,
        csim_core::ScoreSet,
        csim_core::ChangeType,
        csim_core::ImpactLevel,
        csim_core::RegulationChange,
        csim_core::SimulationScenario,
        csim_engine::PredictiveAnalysis,
        csim_engine::RiskTrend,
        csim_engine::TrendDirection,
        csim_aggregate::RiskDistribution,
        csim_aggregate::RiskCount,
        csim_aggregate::RiskCategory,
        // DTOs
        crate::routes::simulations::SimulationRequest,
        crate::routes::reports::StoredSimulationRequest,
        crate::routes::distribution::DistributionRequest,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "scenarios", description = "What-if scenario catalog"),
        (name = "simulations", description = "Predictive compliance simulation"),
        (name = "distribution", description = "Risk aggregation"),
        (name = "reports", description = "Stored report provider"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
