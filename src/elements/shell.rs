//! Shell/slab cross-section geometry

use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// Through-thickness geometry of a reinforced shell element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellSection {
    /// Total thickness
    pub h: f64,
    /// Cover to the reinforcement layer centroid (same on both faces)
    pub rec: f64,
}

impl ShellSection {
    /// Create a new shell section
    pub fn new(h: f64, rec: f64) -> Self {
        Self { h, rec }
    }

    /// Distance between top and bottom reinforcement layers, h - 2*rec
    pub fn lever_arm(&self) -> f64 {
        self.h - 2.0 * self.rec
    }

    /// Lever arm, or an error when it is not strictly positive
    ///
    /// NaN geometry is rejected as well.
    pub fn checked_lever_arm(&self) -> DesignResult<f64> {
        let z = self.lever_arm();
        if z > 0.0 {
            Ok(z)
        } else {
            Err(DesignError::InfeasibleGeometry {
                h: self.h,
                rec: self.rec,
                lever_arm: z,
            })
        }
    }
}
