//! # csim-api: Compliance Simulator Service
//!
//! JSON boundary over the three simulation contracts plus a small report
//! provider for reports produced upstream.
//!
//! ## API Surface
//!
//! | Prefix                       | Module                       | Contract            |
//! |------------------------------|------------------------------|---------------------|
//! | `/v1/scenarios`              | [`routes::scenarios`]        | `listScenarios`     |
//! | `/v1/simulations`            | [`routes::simulations`]      | `simulate`          |
//! | `/v1/risk-distribution`      | [`routes::distribution`]     | `aggregate`         |
//! | `/v1/reports/*`, `/v1/portfolio/*` | [`routes::reports`]    | stored reports      |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the application router with fresh metrics.
pub fn app(state: AppState) -> Router {
    app_with_metrics(state, ApiMetrics::new())
}

/// Assemble the application router, recording into `metrics`.
///
/// Health probes (`/health/*`) sit outside the metrics and trace layers.
pub fn app_with_metrics(state: AppState, metrics: ApiMetrics) -> Router {
    let api = Router::new()
        .merge(routes::scenarios::router())
        .merge(routes::simulations::router())
        .merge(routes::distribution::router())
        .merge(routes::reports::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the service holds no external dependencies.
async fn readiness() -> &'static str {
    "ready"
}
