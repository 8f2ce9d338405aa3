//! # csim-engine: Predictive Compliance Simulation
//!
//! Given a compliance report and a what-if scenario, projects new
//! per-framework scores, classifies how each existing finding is expected to
//! trend, and derives remediation recommendations.
//!
//! ## Pipeline
//!
//! 1. **Validate**: the report must carry its required scores and an
//!    industry ([`SimulationError::InvalidReport`]).
//! 2. **Resolve**: the scenario id is looked up in the report industry's
//!    catalog ([`SimulationError::ScenarioNotFound`]).
//! 3. **Project**: each framework's score moves by the signed, policy-scaled
//!    sum of the changes that govern it, clamped to `[0, 100]`; the overall
//!    score moves by the mean of the affected frameworks' moves.
//! 4. **Trend**: every finding is classified `increasing`, `decreasing` or
//!    `stable` by the most impactful change that governs its regulation.
//! 5. **Recommend**: one line per high-impact change, or generic guidance.
//!
//! ## Determinism
//!
//! Every step is a pure function of `(report, scenario, policy)`. There is no
//! randomness, no clock and no shared state, so a [`Simulator`] can be shared
//! freely across threads.

pub mod analysis;
pub mod error;
pub mod policy;
pub mod recommend;
pub mod simulate;

pub use analysis::{PredictiveAnalysis, RiskTrend, TrendDirection};
pub use error::SimulationError;
pub use policy::ImpactPolicy;
pub use simulate::{simulate, simulate_scenario, Simulator};
