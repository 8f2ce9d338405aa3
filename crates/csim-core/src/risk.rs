//! # Risk Findings
//!
//! A [`Risk`] is a single compliance finding produced by the (external)
//! document analysis pipeline. Findings are owned by their report and are
//! never mutated independently.
//!
//! ## Defaulting Policy
//!
//! Findings are never dropped for being malformed:
//! - any severity other than `high` or `medium` is read as [`Severity::Low`];
//! - a missing, blank or non-string regulation is grouped under
//!   [`OTHER_CATEGORY`];
//! - a missing or `null` description is read as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// Category label for findings without a governing regulation.
pub const OTHER_CATEGORY: &str = "Other";

/// Severity of a compliance finding.
///
/// Ordering follows severity weight: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low severity. Also the bucket for unrecognised severities.
    #[default]
    Low,
    /// Medium severity.
    Medium,
    /// High severity.
    High,
}

impl Severity {
    /// All severities from most to least severe.
    pub fn descending() -> &'static [Severity] {
        &[Self::High, Self::Medium, Self::Low]
    }

    /// Numeric weight used for ranking: high = 3, medium = 2, low = 1.
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Lowercase identifier (matches serde output).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parse a severity, coercing anything unrecognised to `Low`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            other => {
                tracing::warn!(severity = %other, "unrecognised risk severity, counting as low");
                Self::Low
            }
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    /// Deserialization never fails: strings are parsed leniently and any
    /// non-string value (number, null, object) is read as `Low`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(s) => Self::parse_lenient(&s),
            _ => Self::Low,
        })
    }
}

/// A single compliance finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Identifier assigned by the analysis pipeline, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable description of the finding.
    #[serde(default, deserialize_with = "lenient_description")]
    pub description: String,
    /// Severity of the finding.
    #[serde(default)]
    pub severity: Severity,
    /// Governing regulation or category name.
    #[serde(
        default,
        deserialize_with = "lenient_regulation",
        skip_serializing_if = "Option::is_none"
    )]
    pub regulation: Option<String>,
}

fn lenient_description<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_regulation<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => {
            tracing::warn!(regulation = %other, "non-string risk regulation, counting as other");
            None
        }
    })
}

impl Risk {
    /// Create a finding under a regulation.
    pub fn new(
        description: impl Into<String>,
        severity: Severity,
        regulation: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            severity,
            regulation: Some(regulation.into()),
        }
    }

    /// Attach an identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The category this finding is counted under: its trimmed regulation,
    /// or [`OTHER_CATEGORY`] when the regulation is missing or blank.
    pub fn category(&self) -> &str {
        match self.regulation.as_deref().map(str::trim) {
            Some(reg) if !reg.is_empty() => reg,
            _ => OTHER_CATEGORY,
        }
    }
}
