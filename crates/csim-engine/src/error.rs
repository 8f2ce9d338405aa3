//! # Simulation Errors

use csim_core::{Industry, ValidationError};
use thiserror::Error;

/// Why a simulation could not be produced.
///
/// Both variants are always surfaced to the caller. The engine never
/// substitutes a default report or a different scenario.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The report lacks required scores or an industry.
    #[error("invalid report: {0}")]
    InvalidReport(#[from] ValidationError),

    /// The scenario id is not in the catalog for the report's industry.
    #[error("scenario {scenario_id:?} not found for industry {industry}")]
    ScenarioNotFound {
        /// The requested scenario id.
        scenario_id: String,
        /// The industry the catalog was consulted for.
        industry: Industry,
    },
}
