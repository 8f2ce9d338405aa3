#![deny(missing_docs)]

//! # csim-core: Foundational Types for the Compliance Simulator
//!
//! This crate defines the data model every other crate in the workspace
//! depends on: compliance reports and their risk findings, regulatory
//! what-if scenarios, and the framework/industry/severity vocabulary used to
//! interpret them. It has no internal crate dependencies.
//!
//! ## Design Principles
//!
//! 1. **Single [`Framework`] enum.** One definition, four variants, exhaustive
//!    `match` everywhere. Regulation names coming off the wire are mapped onto
//!    it in exactly one place ([`Framework::from_regulation`]).
//!
//! 2. **Validate at the edge, normalize the rest.** A report missing a required
//!    score is rejected with a [`ValidationError`]. Malformed-but-present data
//!    (an unknown severity, a blank regulation, an unfamiliar industry) is
//!    coerced to a documented default and never fails.
//!
//! 3. **[`CsimError`] hierarchy.** Structured errors with `thiserror`: no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod framework;
pub mod industry;
pub mod report;
pub mod risk;
pub mod scenario;
pub mod synthetic;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{CsimError, ValidationError};
pub use framework::{normalize_regulation, Framework};
pub use industry::Industry;
pub use report::{ComplianceReport, ReportFormat, ScoreSet, MAX_SCORE, MIN_SCORE};
pub use risk::{Risk, Severity, OTHER_CATEGORY};
pub use scenario::{ChangeDirection, ChangeType, ImpactLevel, RegulationChange, SimulationScenario};
pub use synthetic::SyntheticReportGenerator;
