//! # Risk Distribution API
//!
//! `POST /v1/risk-distribution` aggregates reports supplied in the body.
//! When both `report` and `reports` are present, `report` wins.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use csim_aggregate::{aggregate, RiskDistribution};
use csim_core::ComplianceReport;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_json;
use crate::state::AppState;

/// Reports to aggregate.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    /// Single-document view.
    #[serde(default)]
    pub report: Option<ComplianceReport>,
    /// Portfolio view, used when `report` is absent.
    #[serde(default)]
    pub reports: Option<Vec<ComplianceReport>>,
}

/// Build the risk distribution router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/risk-distribution", post(risk_distribution))
}

/// POST /v1/risk-distribution: Aggregate one report or a report set.
#[utoipa::path(
    post,
    path = "/v1/risk-distribution",
    request_body = DistributionRequest,
    responses(
        (status = 200, description = "Severity buckets, categories and display risks", body = RiskDistribution),
        (status = 400, description = "Malformed JSON", body = ErrorBody),
    ),
    tag = "distribution"
)]
async fn risk_distribution(
    body: Result<Json<DistributionRequest>, JsonRejection>,
) -> Result<Json<RiskDistribution>, AppError> {
    let req = extract_json(body)?;
    Ok(Json(aggregate(req.report.as_ref(), req.reports.as_deref())))
}
