//! # Aggregation
//!
//! Two views over the same tallies:
//!
//! - **Single report.** Categories in first-seen order; `risks` is the
//!   report's full list, unfiltered and in report order.
//! - **Portfolio.** Categories sorted by descending count (ties keep
//!   first-seen order) and colored in that order; `risks` is the union sorted
//!   by severity, truncated to [`PORTFOLIO_TOP_RISKS`].
//!
//! Neither view mutates its input, so repeated calls give identical output.

use csim_core::{ComplianceReport, Risk, Severity};

use crate::distribution::{
    category_color, RiskCategory, RiskCount, RiskDistribution, PORTFOLIO_TOP_RISKS,
};

/// Aggregate a single report or, failing that, a report set.
///
/// `report` takes precedence when present. With neither, the result is
/// [`RiskDistribution::empty`].
pub fn aggregate(
    report: Option<&ComplianceReport>,
    all_reports: Option<&[ComplianceReport]>,
) -> RiskDistribution {
    match (report, all_reports) {
        (Some(report), _) => aggregate_report(report),
        (None, Some(reports)) if !reports.is_empty() => aggregate_portfolio(reports),
        _ => RiskDistribution::empty(),
    }
}

/// Single-document view.
pub fn aggregate_report(report: &ComplianceReport) -> RiskDistribution {
    let tally = Tally::of(report.risks.iter());
    tracing::debug!(
        report = report.display_id(),
        risks = report.risks.len(),
        categories = tally.categories.len(),
        "aggregated report"
    );

    RiskDistribution {
        risk_data: tally.buckets(),
        category_data: tally.into_categories(),
        risks: report.risks.clone(),
    }
}

/// Portfolio view across several reports.
pub fn aggregate_portfolio(reports: &[ComplianceReport]) -> RiskDistribution {
    let all = reports.iter().flat_map(|r| r.risks.iter());
    let mut tally = Tally::of(all.clone());
    // Stable: ties keep first-seen order.
    tally.categories.sort_by(|a, b| b.1.cmp(&a.1));

    let mut risks: Vec<Risk> = all.cloned().collect();
    let total = risks.len();
    risks.sort_by_key(|r| std::cmp::Reverse(r.severity));
    risks.truncate(PORTFOLIO_TOP_RISKS);

    tracing::debug!(
        reports = reports.len(),
        risks = total,
        shown = risks.len(),
        "aggregated portfolio"
    );

    RiskDistribution {
        risk_data: tally.buckets(),
        category_data: tally.into_categories(),
        risks,
    }
}

/// Severity and category counts, categories in first-seen order.
#[derive(Debug, Default)]
struct Tally {
    high: usize,
    medium: usize,
    low: usize,
    categories: Vec<(String, usize)>,
}

impl Tally {
    fn of<'a>(risks: impl Iterator<Item = &'a Risk>) -> Self {
        let mut tally = Self::default();
        for risk in risks {
            match risk.severity {
                Severity::High => tally.high += 1,
                Severity::Medium => tally.medium += 1,
                Severity::Low => tally.low += 1,
            }
            let category = risk.category();
            match tally.categories.iter_mut().find(|(name, _)| name == category) {
                Some((_, count)) => *count += 1,
                None => tally.categories.push((category.to_string(), 1)),
            }
        }
        tally
    }

    fn buckets(&self) -> Vec<RiskCount> {
        vec![
            RiskCount::bucket(Severity::High, self.high),
            RiskCount::bucket(Severity::Medium, self.medium),
            RiskCount::bucket(Severity::Low, self.low),
        ]
    }

    fn into_categories(self) -> Vec<RiskCategory> {
        self.categories
            .into_iter()
            .enumerate()
            .map(|(i, (category, count))| RiskCategory {
                category,
                count,
                color: category_color(i).to_string(),
            })
            .collect()
    }
}
