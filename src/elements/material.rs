//! Concrete and reinforcing steel strengths

use serde::{Deserialize, Serialize};

use crate::design::DesignOptions;

/// Concrete characterised by its cylinder strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Characteristic compressive strength in MPa
    pub fck: f64,
}

impl Concrete {
    /// Create a concrete with given characteristic strength (MPa)
    pub fn new(fck: f64) -> Self {
        Self { fck }
    }

    /// Design compressive strength fck / gamma_c
    pub fn fcd(&self, options: &DesignOptions) -> f64 {
        self.fck / options.gamma_c
    }

    /// Ultimate compressive strain in ‰
    pub fn eps_cu2(&self) -> f64 {
        if self.fck <= 50.0 {
            3.5
        } else {
            2.6 + 35.0 * ((90.0 - self.fck) / 100.0).powi(4)
        }
    }

    /// Limit of relative neutral axis depth x/d without compression steel
    pub fn alpha_lim(&self) -> f64 {
        if self.fck <= 50.0 {
            0.45
        } else {
            0.35
        }
    }
}

impl Default for Concrete {
    fn default() -> Self {
        Self::new(20.0)
    }
}

/// Reinforcing steel characterised by its yield strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reinforcement {
    /// Characteristic yield strength in MPa
    pub fyk: f64,
}

impl Reinforcement {
    /// Create a reinforcement with given characteristic yield strength (MPa)
    pub fn new(fyk: f64) -> Self {
        Self { fyk }
    }

    /// Design yield strength fyk / gamma_s
    pub fn fyd(&self, options: &DesignOptions) -> f64 {
        self.fyk / options.gamma_s
    }
}

impl Default for Reinforcement {
    fn default() -> Self {
        Self::new(500.0)
    }
}
