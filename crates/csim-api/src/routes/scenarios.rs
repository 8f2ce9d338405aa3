//! # Scenario Catalog API
//!
//! `GET /v1/scenarios?industry=` lists the what-if scenarios for an
//! industry. Unknown or missing industries get the cross-industry set.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use csim_core::{Industry, SimulationScenario};
use csim_scenario::ScenarioSource;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::state::AppState;

/// Query parameters for the scenario list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScenarioQuery {
    /// Industry name, e.g. `Healthcare`. Matched leniently.
    pub industry: Option<String>,
}

/// Build the scenario router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/scenarios", get(list_scenarios))
}

/// GET /v1/scenarios: List scenarios for an industry.
#[utoipa::path(
    get,
    path = "/v1/scenarios",
    params(ScenarioQuery),
    responses(
        (status = 200, description = "Scenarios for the industry", body = Vec<SimulationScenario>),
    ),
    tag = "scenarios"
)]
async fn list_scenarios(
    State(state): State<AppState>,
    Query(query): Query<ScenarioQuery>,
) -> Json<Vec<SimulationScenario>> {
    let industry = query
        .industry
        .as_deref()
        .map(Industry::parse_lenient)
        .unwrap_or_default();
    Json(state.simulator.source().scenarios(industry))
}
