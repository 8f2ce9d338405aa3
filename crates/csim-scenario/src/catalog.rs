//! # Built-in Scenario Tables
//!
//! Static scenario templates per industry plus a cross-industry set.
//! Every industry's list is its own scenarios followed by the cross-industry
//! ones; [`Industry::General`] (the fallback for unrecognised industries)
//! gets the cross-industry set alone.
//!
//! Within a scenario, changes are listed most impactful first.

use csim_core::{ChangeType, ImpactLevel, Industry, RegulationChange, SimulationScenario};

use crate::ScenarioSource;

use csim_core::ChangeType::{New, Relaxed, Removed, Stricter};
use csim_core::ImpactLevel::{High, Low, Medium};

struct Template {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    changes: &'static [(&'static str, ChangeType, ImpactLevel)],
}

impl Template {
    fn instantiate(&self, industry: Industry) -> SimulationScenario {
        SimulationScenario {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            regulation_changes: self
                .changes
                .iter()
                .map(|(reg, change, impact)| RegulationChange::new(*reg, *change, *impact))
                .collect(),
            industry,
        }
    }
}

const CROSS_INDUSTRY: &[Template] = &[
    Template {
        id: "gdpr-tightening",
        name: "GDPR Tightening",
        description: "Supervisory authorities raise the bar on consent, retention and \
                      breach notification, with larger fines for repeat findings.",
        changes: &[("GDPR", Stricter, High)],
    },
    Template {
        id: "multi-framework-overhaul",
        name: "Multi-Framework Overhaul",
        description: "A coordinated revision of privacy and security frameworks: stricter \
                      GDPR enforcement, new SOC 2 criteria and tighter HIPAA safeguards.",
        changes: &[
            ("GDPR", Stricter, High),
            ("SOC2", New, Medium),
            ("HIPAA", Stricter, Medium),
            ("PCI-DSS", Stricter, Low),
        ],
    },
    Template {
        id: "privacy-relaxation",
        name: "Privacy Rule Relaxation",
        description: "Regulators ease documentation duties for low-risk processing and \
                      withdraw a state-level privacy requirement.",
        changes: &[("GDPR", Relaxed, Medium), ("CCPA", Removed, Low)],
    },
];

const HEALTHCARE: &[Template] = &[
    Template {
        id: "hipaa-audit-surge",
        name: "HIPAA Audit Surge",
        description: "OCR expands its audit programme, sampling more covered entities and \
                      business associates with stricter evidence requirements.",
        changes: &[("HIPAA", Stricter, High), ("SOC2", Stricter, Low)],
    },
    Template {
        id: "telehealth-data-rules",
        name: "Telehealth Data Rules",
        description: "New rules for remote care platforms govern PHI captured during \
                      video consultations and its cross-border transfer.",
        changes: &[("HIPAA", New, Medium), ("GDPR", Stricter, Low)],
    },
];

const FINANCE: &[Template] = &[
    Template {
        id: "pci-dss-v4-enforcement",
        name: "PCI-DSS v4 Enforcement",
        description: "Future-dated PCI-DSS v4 requirements become mandatory, including \
                      targeted risk analyses and authenticated internal scanning.",
        changes: &[("PCI-DSS", Stricter, High), ("SOC2", Stricter, Medium)],
    },
    Template {
        id: "open-banking-relief",
        name: "Open Banking Relief",
        description: "Regulators relax card-data scope for tokenised open-banking \
                      payments and simplify consent records.",
        changes: &[("PCI-DSS", Relaxed, Medium), ("GDPR", Relaxed, Low)],
    },
];

const TECHNOLOGY: &[Template] = &[
    Template {
        id: "ai-data-governance",
        name: "AI Data Governance",
        description: "New obligations for training-data provenance and automated \
                      decision-making, enforced through privacy and assurance frameworks.",
        changes: &[("GDPR", New, High), ("SOC2", Stricter, Medium)],
    },
    Template {
        id: "soc2-streamlining",
        name: "SOC 2 Streamlining",
        description: "The trust services criteria are consolidated, reducing evidence \
                      collection for mature control environments.",
        changes: &[("SOC2", Relaxed, Medium)],
    },
];

const RETAIL: &[Template] = &[
    Template {
        id: "card-data-crackdown",
        name: "Card Data Crackdown",
        description: "Card brands increase penalties for cardholder-data exposure in \
                      e-commerce checkouts and loyalty systems.",
        changes: &[("PCI-DSS", Stricter, High), ("GDPR", Stricter, Low)],
    },
    Template {
        id: "consumer-privacy-expansion",
        name: "Consumer Privacy Expansion",
        description: "State consumer privacy laws gain new opt-out and profiling rights \
                      alongside stricter GDPR marketing guidance.",
        changes: &[("CCPA", New, Medium), ("GDPR", Stricter, Medium)],
    },
];

/// Ids of the scenarios offered to every industry.
pub const CROSS_INDUSTRY_IDS: &[&str] = &[
    "gdpr-tightening",
    "multi-framework-overhaul",
    "privacy-relaxation",
];

fn industry_templates(industry: Industry) -> &'static [Template] {
    match industry {
        Industry::Healthcare => HEALTHCARE,
        Industry::Finance => FINANCE,
        Industry::Technology => TECHNOLOGY,
        Industry::Retail => RETAIL,
        Industry::General => &[],
    }
}

/// The scenarios available for an industry: its own, then the cross-industry set.
pub fn list_scenarios(industry: Industry) -> Vec<SimulationScenario> {
    industry_templates(industry)
        .iter()
        .chain(CROSS_INDUSTRY)
        .map(|t| t.instantiate(industry))
        .collect()
}

/// [`list_scenarios`] for a free-form industry name.
///
/// Unknown names fall back to the cross-industry set.
pub fn list_scenarios_for(industry: &str) -> Vec<SimulationScenario> {
    list_scenarios(Industry::parse_lenient(industry))
}

/// Resolve a scenario id within an industry's list.
pub fn find_scenario(industry: Industry, scenario_id: &str) -> Option<SimulationScenario> {
    let found = industry_templates(industry)
        .iter()
        .chain(CROSS_INDUSTRY)
        .find(|t| t.id == scenario_id)
        .map(|t| t.instantiate(industry));
    if found.is_none() {
        tracing::debug!(%industry, scenario_id, "scenario not in catalog");
    }
    found
}

/// The built-in scenario tables as a [`ScenarioSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ScenarioSource for BuiltinCatalog {
    fn scenarios(&self, industry: Industry) -> Vec<SimulationScenario> {
        list_scenarios(industry)
    }

    fn find(&self, industry: Industry, scenario_id: &str) -> Option<SimulationScenario> {
        find_scenario(industry, scenario_id)
    }
}
