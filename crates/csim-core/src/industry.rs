//! # Industries
//!
//! The industry of a report is only ever used as a lookup key into the
//! scenario catalog. Parsing is lenient: common aliases are recognised and
//! anything unfamiliar becomes [`Industry::General`], which selects the
//! cross-industry scenario set. An unknown industry is a defaulting case,
//! never an error.

use serde::{Deserialize, Serialize};

use crate::framework::normalize_regulation;

/// Industry vertical used to select applicable what-if scenarios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    /// Healthcare providers, payers and health-tech.
    Healthcare,
    /// Banking, payments, insurance and fintech.
    Finance,
    /// Software, SaaS and cloud services.
    Technology,
    /// Retail and e-commerce.
    Retail,
    /// Fallback for any industry without a dedicated scenario set.
    #[default]
    General,
}

impl Industry {
    /// All industries in canonical order.
    pub fn all() -> &'static [Industry] {
        &[
            Self::Healthcare,
            Self::Finance,
            Self::Technology,
            Self::Retail,
            Self::General,
        ]
    }

    /// Canonical display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Technology => "Technology",
            Self::Retail => "Retail",
            Self::General => "General",
        }
    }

    /// Parse an industry name, falling back to [`Industry::General`].
    pub fn parse_lenient(name: &str) -> Self {
        match normalize_regulation(name).as_str() {
            "healthcare" | "health" | "medical" | "lifesciences" => Self::Healthcare,
            "finance" | "financial" | "financialservices" | "fintech" | "banking"
            | "insurance" => Self::Finance,
            "technology" | "tech" | "saas" | "software" => Self::Technology,
            "retail" | "ecommerce" => Self::Retail,
            _ => {
                tracing::debug!(industry = %name, "unrecognised industry, using general scenario set");
                Self::General
            }
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Industry {
    fn from(name: &str) -> Self {
        Self::parse_lenient(name)
    }
}

impl From<String> for Industry {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for industry in Industry::all() {
            assert_eq!(Industry::parse_lenient(industry.label()), *industry);
        }
    }

    #[test]
    fn aliases_are_recognised() {
        assert_eq!(Industry::from("healthcare"), Industry::Healthcare);
        assert_eq!(Industry::from("Financial Services"), Industry::Finance);
        assert_eq!(Industry::from("FinTech"), Industry::Finance);
        assert_eq!(Industry::from("SaaS"), Industry::Technology);
        assert_eq!(Industry::from("e-commerce"), Industry::Retail);
        assert_eq!(Industry::from("  LIFE-sciences "), Industry::Healthcare);
    }

    #[test]
    fn unknown_industry_falls_back_to_general() {
        assert_eq!(Industry::from("Aerospace"), Industry::General);
        assert_eq!(Industry::from(""), Industry::General);
    }

    #[test]
    fn serde_uses_label_and_is_lenient() {
        let json = serde_json::to_string(&Industry::Healthcare).unwrap();
        assert_eq!(json, "\"Healthcare\"");
        let parsed: Industry = serde_json::from_str("\"mining\"").unwrap();
        assert_eq!(parsed, Industry::General);
    }
}
