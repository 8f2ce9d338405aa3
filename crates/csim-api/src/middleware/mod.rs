//! # Middleware
//!
//! Request metrics. Tracing uses `tower_http::trace::TraceLayer` directly.

pub mod metrics;
