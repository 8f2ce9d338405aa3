//! # Simulation Output
//!
//! [`PredictiveAnalysis`] exists for the duration of one simulation request
//! and is owned by the caller. Its score sets satisfy, for every tracked
//! framework `f`:
//!
//! ```text
//! predicted[f] == clamp(original[f] + differences[f], 0, 100)
//! ```

use csim_core::{ImpactLevel, ScoreSet, Severity};
use serde::{Deserialize, Serialize};

/// Projected direction of a finding's severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// A stricter or new requirement governs the finding.
    Increasing,
    /// A relaxed or removed requirement governs the finding.
    Decreasing,
    /// No change in the scenario governs the finding.
    Stable,
}

impl TrendDirection {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection of one existing finding under a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RiskTrend {
    /// The finding's category (its regulation, or `"Other"`).
    pub regulation: String,
    /// The finding's description.
    pub description: String,
    /// Severity as reported.
    pub current_severity: Severity,
    /// Projected direction.
    pub predicted_change: TrendDirection,
    /// Impact level of the governing change; `low` when none applies.
    pub impact: ImpactLevel,
    /// The finding's id, or `risk-<n>` (1-based position) when it has none.
    pub risk_id: String,
}

/// Result of simulating one scenario against one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PredictiveAnalysis {
    /// Id of the simulated scenario.
    pub scenario_id: String,
    /// Display name of the simulated scenario.
    pub scenario_name: String,
    /// Description of the simulated scenario.
    pub scenario_description: String,
    /// Validated scores of the input report.
    pub original_scores: ScoreSet,
    /// Projected scores.
    pub predicted_scores: ScoreSet,
    /// `predicted - original`, per framework and overall.
    pub score_differences: ScoreSet,
    /// One trend per finding, in report order.
    pub risk_trends: Vec<RiskTrend>,
    /// Remediation guidance. Never empty.
    pub recommendations: Vec<String>,
}
