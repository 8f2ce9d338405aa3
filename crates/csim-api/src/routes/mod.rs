//! # API Route Modules
//!
//! Each module builds a `Router<AppState>` merged by [`crate::app`].

pub mod distribution;
pub mod reports;
pub mod scenarios;
pub mod simulations;
