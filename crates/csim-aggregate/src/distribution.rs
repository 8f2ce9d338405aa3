//! # Distribution Types
//!
//! Presentation-ready aggregates. Recomputed on every call and never cached
//! across report changes.

use csim_core::{Risk, Severity};
use serde::{Deserialize, Serialize};

/// Colors assigned to categories, reused cyclically.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316", "#0ea5e9", "#84cc16", "#eab308",
];

/// Display truncation of the portfolio `risks` list.
///
/// This limits what is shown, not what is counted: severity and category
/// tallies always cover every risk in the portfolio.
pub const PORTFOLIO_TOP_RISKS: usize = 5;

/// Bucket label for a severity.
pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "High Risk",
        Severity::Medium => "Medium Risk",
        Severity::Low => "Low Risk",
    }
}

/// Fixed bucket color for a severity.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "#ef4444",
        Severity::Medium => "#f59e0b",
        Severity::Low => "#10b981",
    }
}

/// Palette color for the category at `index` in display order.
pub fn category_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// One severity bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskCount {
    /// Bucket label, e.g. `"High Risk"`.
    pub name: String,
    /// Number of risks in the bucket.
    pub value: usize,
    /// Display color.
    pub color: String,
}

impl RiskCount {
    pub(crate) fn bucket(severity: Severity, value: usize) -> Self {
        Self {
            name: severity_label(severity).to_string(),
            value,
            color: severity_color(severity).to_string(),
        }
    }
}

/// Risk count for one regulation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskCategory {
    /// Regulation name, or `"Other"`.
    pub category: String,
    /// Number of risks filed under the category.
    pub count: usize,
    /// Display color.
    pub color: String,
}

/// Output of the risk aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    /// Exactly three buckets: high, medium, low.
    pub risk_data: Vec<RiskCount>,
    /// Per-category counts.
    pub category_data: Vec<RiskCategory>,
    /// Risks for display. Unfiltered for a single report; the top
    /// [`PORTFOLIO_TOP_RISKS`] by severity for a portfolio.
    pub risks: Vec<Risk>,
}

impl RiskDistribution {
    /// Three zeroed buckets, no categories, no risks.
    pub fn empty() -> Self {
        Self {
            risk_data: Severity::descending()
                .iter()
                .map(|s| RiskCount::bucket(*s, 0))
                .collect(),
            category_data: Vec::new(),
            risks: Vec::new(),
        }
    }

    /// Number of risks counted across the severity buckets.
    pub fn total(&self) -> usize {
        self.risk_data.iter().map(|b| b.value).sum()
    }
}

impl Default for RiskDistribution {
    fn default() -> Self {
        Self::empty()
    }
}
