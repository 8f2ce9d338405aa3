//! # csim-aggregate: Risk Distributions
//!
//! Turns one compliance report, or a set of them, into the three views a
//! dashboard needs: a severity distribution (`riskData`), a per-regulation
//! breakdown (`categoryData`) and a list of risks to display (`risks`).
//!
//! Independent of the scenario catalog and the simulation engine. Every
//! call is a pure function of its arguments.
//!
//! ## Defaulting
//!
//! Nothing is ever dropped. A risk whose severity is neither high nor medium
//! counts as low (coerced when the report is parsed), and a risk with no
//! regulation counts under `"Other"`.

pub mod aggregate;
pub mod distribution;

pub use aggregate::{aggregate, aggregate_portfolio, aggregate_report};
pub use distribution::{
    category_color, severity_color, severity_label, RiskCategory, RiskCount, RiskDistribution,
    CATEGORY_PALETTE, PORTFOLIO_TOP_RISKS,
};
