//! # Compliance Frameworks: Single Source of Truth
//!
//! Defines the [`Framework`] enum: the regulations a compliance report
//! carries a score for. Regulation names arriving on risks and scenario
//! changes are free-form strings ("GDPR", "SOC 2", "pci-dss"); they are
//! mapped onto this enum only through [`Framework::from_regulation`], so
//! every crate agrees on which name belongs to which score.

use serde::{Deserialize, Serialize};

/// A compliance framework tracked by a per-framework score.
///
/// Every `match` on this enum must be exhaustive: adding a fifth framework
/// is a compile error until scoring, projection and presentation all handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Framework {
    /// EU General Data Protection Regulation.
    #[serde(rename = "gdpr")]
    Gdpr,
    /// US Health Insurance Portability and Accountability Act.
    #[serde(rename = "hipaa")]
    Hipaa,
    /// AICPA SOC 2 trust services criteria.
    #[serde(rename = "soc2")]
    Soc2,
    /// Payment Card Industry Data Security Standard.
    #[serde(rename = "pciDss")]
    PciDss,
}

impl Framework {
    /// All frameworks in canonical order.
    pub fn all() -> &'static [Framework] {
        &[Self::Gdpr, Self::Hipaa, Self::Soc2, Self::PciDss]
    }

    /// The identifier used as a key in score sets (matches serde output).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gdpr => "gdpr",
            Self::Hipaa => "hipaa",
            Self::Soc2 => "soc2",
            Self::PciDss => "pciDss",
        }
    }

    /// The display label, which is also the canonical regulation name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gdpr => "GDPR",
            Self::Hipaa => "HIPAA",
            Self::Soc2 => "SOC2",
            Self::PciDss => "PCI-DSS",
        }
    }

    /// Map a free-form regulation name onto a framework.
    ///
    /// Matching is case-insensitive and ignores whitespace and punctuation,
    /// so `"SOC 2"`, `"soc-2"` and `"SOC2"` are the same framework. Names
    /// that do not correspond to a scored framework (e.g. `"CCPA"`) return
    /// `None`.
    pub fn from_regulation(name: &str) -> Option<Self> {
        match normalize_regulation(name).as_str() {
            "gdpr" => Some(Self::Gdpr),
            "hipaa" => Some(Self::Hipaa),
            "soc2" => Some(Self::Soc2),
            "pcidss" | "pci" => Some(Self::PciDss),
            _ => None,
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reduce a regulation or industry name to lowercase ASCII alphanumerics.
///
/// Two regulation names refer to the same regulation when their normalized
/// forms are equal.
pub fn normalize_regulation(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
