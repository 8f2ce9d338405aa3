//! # Seeded Synthetic Reports
//!
//! Demo dashboards and load tests need plausible reports without a running
//! analysis pipeline. [`SyntheticReportGenerator`] produces them from an
//! explicit seed: the same seed always yields the same sequence of reports,
//! ids and timestamps included.
//!
//! Nothing in simulation or aggregation reads from this module. Synthetic
//! content is only ever an input supplied by a caller.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::industry::Industry;
use crate::report::ComplianceReport;
use crate::risk::{Risk, Severity};

/// 2024-01-01T00:00:00Z. Synthetic timestamps count backwards from here.
const SYNTHETIC_EPOCH_SECS: i64 = 1_704_067_200;

/// Maximum age of a synthetic report.
const MAX_AGE_DAYS: i64 = 90;

/// Maximum number of findings on a synthetic report.
const MAX_RISKS: usize = 6;

const FINDINGS: &[(&str, &str)] = &[
    ("GDPR", "Personal data retained beyond the documented retention period"),
    ("GDPR", "No lawful basis recorded for marketing data processing"),
    ("GDPR", "Data subject access requests lack a response SLA"),
    ("HIPAA", "PHI transmitted without end-to-end encryption"),
    ("HIPAA", "Business associate agreement missing for a cloud vendor"),
    ("HIPAA", "Audit logs for PHI access are not reviewed"),
    ("SOC2", "Quarterly access reviews were not performed"),
    ("SOC2", "Change management approvals are not documented"),
    ("SOC2", "Incident response plan has not been tested this year"),
    ("PCI-DSS", "Cardholder data found in application logs"),
    ("PCI-DSS", "Network segmentation of the cardholder environment is untested"),
    ("CCPA", "Do-not-sell opt-out link missing from the privacy notice"),
];

const REGIONS: &[&str] = &["EU", "US", "UK", "APAC", "LATAM"];

/// Deterministic generator of plausible compliance reports.
#[derive(Debug, Clone)]
pub struct SyntheticReportGenerator {
    rng: StdRng,
    epoch: DateTime<Utc>,
    issued: usize,
}

impl SyntheticReportGenerator {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            epoch: DateTime::<Utc>::from_timestamp(SYNTHETIC_EPOCH_SECS, 0).unwrap_or_default(),
            issued: 0,
        }
    }

    /// Produce the next report for an industry.
    pub fn next_report(&mut self, industry: Industry) -> ComplianceReport {
        self.issued += 1;
        let id = Uuid::from_u128(self.rng.gen::<u128>()).to_string();

        let gdpr = self.score();
        let hipaa = self.score();
        let soc2 = self.score();
        let pci_dss = (industry == Industry::Finance || industry == Industry::Retail)
            .then(|| self.score());

        let tracked: Vec<f64> = [Some(gdpr), Some(hipaa), Some(soc2), pci_dss]
            .into_iter()
            .flatten()
            .collect();
        let overall = (tracked.iter().sum::<f64>() / tracked.len() as f64).round();

        let age = Duration::days(self.rng.gen_range(0..=MAX_AGE_DAYS));
        let region = REGIONS.choose(&mut self.rng).copied().unwrap_or("EU");

        let mut report = ComplianceReport::new(id, industry.label(), overall, gdpr, hipaa, soc2)
            .with_region(region);
        report.pci_dss_score = pci_dss;
        report.document_name = Some(format!("synthetic-document-{:03}.pdf", self.issued));
        report.created_at = Some(self.epoch - age);

        let risk_count = self.rng.gen_range(0..=MAX_RISKS);
        for n in 0..risk_count {
            let (regulation, description) = FINDINGS
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(FINDINGS[0]);
            let risk = Risk::new(description, self.severity(), regulation)
                .with_id(format!("{}-r{}", self.issued, n + 1));
            report.risks.push(risk);
        }

        report
    }

    /// Produce `count` reports for an industry.
    pub fn portfolio(&mut self, count: usize, industry: Industry) -> Vec<ComplianceReport> {
        (0..count).map(|_| self.next_report(industry)).collect()
    }

    fn score(&mut self) -> f64 {
        f64::from(self.rng.gen_range(40u32..=98))
    }

    /// Severity skewed towards medium, as real scans are.
    fn severity(&mut self) -> Severity {
        match self.rng.gen_range(0u8..10) {
            0..=2 => Severity::High,
            3..=7 => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_reports() {
        let a = SyntheticReportGenerator::new(7).portfolio(5, Industry::Healthcare);
        let b = SyntheticReportGenerator::new(7).portfolio(5, Industry::Healthcare);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = SyntheticReportGenerator::new(1).next_report(Industry::Finance);
        let b = SyntheticReportGenerator::new(2).next_report(Industry::Finance);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn synthetic_reports_are_valid() {
        let mut generator = SyntheticReportGenerator::new(42);
        for industry in Industry::all() {
            for report in generator.portfolio(10, *industry) {
                report.validate().unwrap();
                assert!(report.risks.len() <= MAX_RISKS);
                assert_eq!(report.industry().unwrap(), *industry);
            }
        }
    }

    #[test]
    fn pci_dss_only_for_card_handling_industries() {
        let mut generator = SyntheticReportGenerator::new(3);
        assert!(generator.next_report(Industry::Retail).pci_dss_score.is_some());
        assert!(generator.next_report(Industry::Healthcare).pci_dss_score.is_none());
    }

    #[test]
    fn timestamps_precede_epoch() {
        let mut generator = SyntheticReportGenerator::new(9);
        let epoch = DateTime::<Utc>::from_timestamp(SYNTHETIC_EPOCH_SECS, 0).unwrap();
        for report in generator.portfolio(20, Industry::Technology) {
            let created = report.created_at.unwrap();
            assert!(created <= epoch);
            assert!(created >= epoch - Duration::days(MAX_AGE_DAYS));
        }
    }
}
