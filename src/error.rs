//! Error types for shell-design

use thiserror::Error;

/// Reasons a design cannot be produced
///
/// Every variant describes an infeasible configuration rather than a bug: numerical
/// pipelines usually turn these into NaN sentinels through the `*_reinforcement`
/// array helpers instead of aborting a batch.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    #[error("Infeasible shell geometry: lever arm h - 2*rec = {lever_arm} (h = {h}, rec = {rec}) must be positive")]
    InfeasibleGeometry { h: f64, rec: f64, lever_arm: f64 },

    #[error("Bending capacity exceeded: reduced moment mu = {mu} exceeds 0.5")]
    BendingCapacityExceeded { mu: f64 },

    #[error("Concrete strut capacity exceeded: VEd = {ved} > VRd,max = {vrd_max}")]
    StrutCapacityExceeded { ved: f64, vrd_max: f64 },
}

/// Result type for design operations
pub type DesignResult<T> = Result<T, DesignError>;
