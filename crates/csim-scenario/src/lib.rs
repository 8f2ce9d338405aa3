//! # csim-scenario: What-If Scenario Catalog
//!
//! Produces the regulatory what-if scenarios available for an industry.
//! The catalog is a pure, deterministic lookup: the same industry always
//! yields the same scenarios in the same order, so tests can assert exact
//! sets and clients can cache scenario ids.
//!
//! ## Architecture
//!
//! ```text
//! csim-core (vocabulary)  -->  csim-scenario (catalog)  -->  csim-engine (projection)
//!   Industry                     ScenarioSource trait           Simulator<S: ScenarioSource>
//!   SimulationScenario           BuiltinCatalog
//! ```
//!
//! The engine resolves scenarios through the [`ScenarioSource`] trait rather
//! than calling the built-in tables directly, so deployments with their own
//! scenario library can plug it in without touching projection logic.

pub mod catalog;

pub use catalog::{
    find_scenario, list_scenarios, list_scenarios_for, BuiltinCatalog, CROSS_INDUSTRY_IDS,
};

use csim_core::{Industry, SimulationScenario};

/// A source of what-if scenarios, keyed by industry.
pub trait ScenarioSource: Send + Sync + std::fmt::Debug {
    /// All scenarios applicable to `industry`. Never empty.
    fn scenarios(&self, industry: Industry) -> Vec<SimulationScenario>;

    /// Resolve a scenario id within an industry's scenario list.
    fn find(&self, industry: Industry, scenario_id: &str) -> Option<SimulationScenario> {
        self.scenarios(industry)
            .into_iter()
            .find(|s| s.id == scenario_id)
    }
}
