//! # Compliance Reports
//!
//! A [`ComplianceReport`] is the output of the (external) document analysis
//! pipeline: an overall score, one score per framework, the document's
//! industry and region, and its risk findings. Reports are immutable inputs
//! to simulation and aggregation.
//!
//! Scores are optional on the wire so that a report missing a field can be
//! rejected with a precise [`ValidationError`] instead of an opaque parse
//! failure. [`ComplianceReport::score_set`] is the only way to obtain the
//! validated scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CsimError, ValidationError};
use crate::framework::Framework;
use crate::industry::Industry;
use crate::risk::Risk;

/// Lowest valid score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest valid score.
pub const MAX_SCORE: f64 = 100.0;

/// A scanned document's compliance scores and findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Report identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the scanned document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    /// Overall compliance score (required).
    #[serde(default)]
    pub overall_score: Option<f64>,
    /// GDPR score (required).
    #[serde(default)]
    pub gdpr_score: Option<f64>,
    /// HIPAA score (required).
    #[serde(default)]
    pub hipaa_score: Option<f64>,
    /// SOC 2 score (required).
    #[serde(default)]
    pub soc2_score: Option<f64>,
    /// PCI-DSS score (optional framework).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pci_dss_score: Option<f64>,
    /// Industry of the document owner (required).
    #[serde(default)]
    pub industry: Option<String>,
    /// Region of the document owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// When the analysis produced this report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Findings, in the order the analysis produced them.
    #[serde(default)]
    pub risks: Vec<Risk>,
}

impl ComplianceReport {
    /// Create a report with the four required scores and an industry.
    pub fn new(
        id: impl Into<String>,
        industry: impl Into<String>,
        overall: f64,
        gdpr: f64,
        hipaa: f64,
        soc2: f64,
    ) -> Self {
        Self {
            id: Some(id.into()),
            overall_score: Some(overall),
            gdpr_score: Some(gdpr),
            hipaa_score: Some(hipaa),
            soc2_score: Some(soc2),
            industry: Some(industry.into()),
            ..Self::default()
        }
    }

    /// Set the PCI-DSS score.
    pub fn with_pci_dss(mut self, score: f64) -> Self {
        self.pci_dss_score = Some(score);
        self
    }

    /// Append a finding.
    pub fn with_risk(mut self, risk: Risk) -> Self {
        self.risks.push(risk);
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Check that the report carries everything a projection needs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.score_set().map(|_| ())
    }

    /// The validated scores of this report.
    ///
    /// # Errors
    ///
    /// Returns the first defect found: a missing or blank `industry`, a
    /// missing required score, or any score that is not finite or lies
    /// outside `[0, 100]`.
    pub fn score_set(&self) -> Result<ScoreSet, ValidationError> {
        self.industry()?;
        let overall = required_score("overallScore", self.overall_score)?;
        let gdpr = required_score("gdprScore", self.gdpr_score)?;
        let hipaa = required_score("hipaaScore", self.hipaa_score)?;
        let soc2 = required_score("soc2Score", self.soc2_score)?;
        let pci_dss = self
            .pci_dss_score
            .map(|v| check_score("pciDssScore", v))
            .transpose()?;
        Ok(ScoreSet {
            overall,
            gdpr,
            hipaa,
            soc2,
            pci_dss,
        })
    }

    /// The report's industry, parsed leniently.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] when the industry is absent or blank.
    pub fn industry(&self) -> Result<Industry, ValidationError> {
        match self.industry.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(Industry::parse_lenient(name)),
            _ => Err(ValidationError::MissingField("industry")),
        }
    }

    /// A label for logs: the id, else the document name, else `"<unnamed>"`.
    pub fn display_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.document_name.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// Parse one report, or an array of reports, from JSON or YAML text.
    ///
    /// The document's shape is read first; the text is then deserialized
    /// straight into that shape so errors keep their field and position.
    pub fn parse_many(input: &str, format: ReportFormat) -> Result<Vec<Self>, CsimError> {
        match format {
            ReportFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(input)?;
                if value.is_array() {
                    Ok(serde_json::from_str(input)?)
                } else {
                    Ok(vec![serde_json::from_str(input)?])
                }
            }
            ReportFormat::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_str(input)?;
                if value.is_sequence() {
                    Ok(serde_yaml::from_str(input)?)
                } else {
                    Ok(vec![serde_yaml::from_str(input)?])
                }
            }
        }
    }
}

fn required_score(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    check_score(field, value)
}

fn check_score(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::ScoreOutOfRange { field, value })
    }
}

/// Serialization format of report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl ReportFormat {
    /// Pick a format from a file extension; anything but YAML is read as JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// One value per framework plus the overall score.
///
/// Used for validated input scores, projected scores and score differences.
/// `pci_dss` is `None` when the report carries no PCI-DSS score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ScoreSet {
    /// Overall score.
    pub overall: f64,
    /// GDPR score.
    pub gdpr: f64,
    /// HIPAA score.
    pub hipaa: f64,
    /// SOC 2 score.
    pub soc2: f64,
    /// PCI-DSS score, when tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pci_dss: Option<f64>,
}

impl ScoreSet {
    /// The value for a framework, or `None` when the framework is not tracked.
    pub fn get(&self, framework: Framework) -> Option<f64> {
        match framework {
            Framework::Gdpr => Some(self.gdpr),
            Framework::Hipaa => Some(self.hipaa),
            Framework::Soc2 => Some(self.soc2),
            Framework::PciDss => self.pci_dss,
        }
    }

    /// Set the value for a framework.
    pub fn set(&mut self, framework: Framework, value: f64) {
        match framework {
            Framework::Gdpr => self.gdpr = value,
            Framework::Hipaa => self.hipaa = value,
            Framework::Soc2 => self.soc2 = value,
            Framework::PciDss => self.pci_dss = Some(value),
        }
    }

    /// The frameworks tracked by this set, in canonical order.
    pub fn frameworks(&self) -> impl Iterator<Item = Framework> + '_ {
        Framework::all()
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_some())
    }

    /// A set with the same tracked frameworks and every value zero.
    pub fn zeroed_like(&self) -> Self {
        Self {
            pci_dss: self.pci_dss.map(|_| 0.0),
            ..Self::default()
        }
    }
}
