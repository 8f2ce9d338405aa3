//! # Impact Policy
//!
//! Score movement per regulatory change, by impact level. These magnitudes
//! are a product policy, not a derived quantity: a high-impact change moves
//! a framework score by 15 points, medium by 8, low by 3. Tightening changes
//! (stricter, new) lower scores; easing changes (relaxed, removed) raise them.

use csim_core::{ChangeDirection, ImpactLevel, RegulationChange};

/// Points moved by a high-impact change.
pub const HIGH_IMPACT_POINTS: f64 = 15.0;
/// Points moved by a medium-impact change.
pub const MEDIUM_IMPACT_POINTS: f64 = 8.0;
/// Points moved by a low-impact change.
pub const LOW_IMPACT_POINTS: f64 = 3.0;

/// Magnitudes applied per impact level. All values are non-negative; the
/// sign comes from the change direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactPolicy {
    /// Points for a high-impact change.
    pub high: f64,
    /// Points for a medium-impact change.
    pub medium: f64,
    /// Points for a low-impact change.
    pub low: f64,
}

impl Default for ImpactPolicy {
    fn default() -> Self {
        Self {
            high: HIGH_IMPACT_POINTS,
            medium: MEDIUM_IMPACT_POINTS,
            low: LOW_IMPACT_POINTS,
        }
    }
}

impl ImpactPolicy {
    /// Unsigned magnitude for an impact level.
    pub fn magnitude(&self, level: ImpactLevel) -> f64 {
        match level {
            ImpactLevel::High => self.high,
            ImpactLevel::Medium => self.medium,
            ImpactLevel::Low => self.low,
        }
    }

    /// Signed score movement caused by one change.
    pub fn signed_delta(&self, change: &RegulationChange) -> f64 {
        let magnitude = self.magnitude(change.impact_level);
        match change.change_type.direction() {
            ChangeDirection::Tightening => -magnitude,
            ChangeDirection::Easing => magnitude,
        }
    }
}
