//! # Regulatory Scenarios
//!
//! A [`SimulationScenario`] is a hypothetical bundle of [`RegulationChange`]s
//! used to project future compliance posture. Scenarios are generated fresh
//! by the catalog on every request and are never persisted.

use serde::{Deserialize, Serialize};

use crate::framework::{normalize_regulation, Framework};
use crate::industry::Industry;

/// How a regulation changes under a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Existing requirements become stricter.
    Stricter,
    /// Existing requirements are relaxed.
    Relaxed,
    /// A new regulation or requirement is introduced.
    New,
    /// A regulation or requirement is withdrawn.
    Removed,
}

/// Whether a change makes compliance harder or easier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeDirection {
    /// Stricter or new requirements: scores fall, risks grow.
    Tightening,
    /// Relaxed or removed requirements: scores rise, risks shrink.
    Easing,
}

impl ChangeType {
    /// The direction this change pushes compliance posture.
    pub fn direction(self) -> ChangeDirection {
        match self {
            Self::Stricter | Self::New => ChangeDirection::Tightening,
            Self::Relaxed | Self::Removed => ChangeDirection::Easing,
        }
    }

    /// Lowercase identifier (matches serde output).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stricter => "stricter",
            Self::Relaxed => "relaxed",
            Self::New => "new",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Magnitude of a regulatory change.
///
/// Ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    /// Minor adjustment.
    Low,
    /// Noticeable change requiring planned work.
    Medium,
    /// Major change requiring immediate attention.
    High,
}

impl ImpactLevel {
    /// Lowercase identifier (matches serde output).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change to one regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegulationChange {
    /// Name of the affected regulation.
    pub regulation: String,
    /// Kind of change.
    pub change_type: ChangeType,
    /// Magnitude of the change.
    pub impact_level: ImpactLevel,
}

impl RegulationChange {
    /// Create a change.
    pub fn new(regulation: impl Into<String>, change_type: ChangeType, impact_level: ImpactLevel) -> Self {
        Self {
            regulation: regulation.into(),
            change_type,
            impact_level,
        }
    }

    /// The scored framework this change affects, if any.
    pub fn framework(&self) -> Option<Framework> {
        Framework::from_regulation(&self.regulation)
    }

    /// Whether this change governs findings filed under `regulation`.
    ///
    /// True when both names map to the same framework, or when their
    /// normalized names are equal (which covers unscored regulations such
    /// as CCPA).
    pub fn applies_to(&self, regulation: &str) -> bool {
        match (self.framework(), Framework::from_regulation(regulation)) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                let own = normalize_regulation(&self.regulation);
                !own.is_empty() && own == normalize_regulation(regulation)
            }
            _ => false,
        }
    }
}

/// A named what-if bundle of regulatory changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SimulationScenario {
    /// Stable identifier, unique within an industry's scenario list.
    pub id: String,
    /// Short display name.
    pub name: String,
    /// One-paragraph description.
    pub description: String,
    /// The changes, most impactful first.
    pub regulation_changes: Vec<RegulationChange>,
    /// Industry the scenario was generated for.
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub industry: Industry,
}

impl SimulationScenario {
    /// Changes that affect a scored framework.
    pub fn changes_for(&self, framework: Framework) -> impl Iterator<Item = &RegulationChange> {
        self.regulation_changes
            .iter()
            .filter(move |c| c.framework() == Some(framework))
    }
}
