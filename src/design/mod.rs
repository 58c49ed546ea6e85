//! Reinforcement design routines and their options

pub mod beam;
pub mod plane;
pub mod shell;

use serde::{Deserialize, Serialize};

pub use beam::{
    bending_reinforcement, bending_reinforcement_or_nan, bending_resistance,
    concrete_shear_resistance, design_beam_bending, design_beam_shear, shear_reinforcement,
    shear_reinforcement_or_nan, shear_resistance, strut_capacity,
};
pub use plane::{design_plane, plane_reinforcement, DesignCase};
pub use shell::{design_shell, design_shell_layers, shell_reinforcement};

/// Options shared by the design routines
///
/// Partial safety factors and unit bridging factors are passed explicitly so
/// callers with different conventions can run side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignOptions {
    /// Substitute for near-zero denominators
    pub epsilon: f64,
    /// Concrete partial safety factor
    pub gamma_c: f64,
    /// Reinforcement partial safety factor
    pub gamma_s: f64,
    /// Bridges kN, kNm and m inputs with MPa strengths
    pub force_scale: f64,
    /// Converts m² to the reported area unit (cm²)
    pub area_scale: f64,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self::eurocode()
    }
}

impl DesignOptions {
    /// Recommended Eurocode 2 values, kN/m/MPa units and areas in cm²
    pub fn eurocode() -> Self {
        Self {
            epsilon: 1.0e-12,
            gamma_c: 1.5,
            gamma_s: 1.15,
            force_scale: 1000.0,
            area_scale: 10_000.0,
        }
    }

    /// Set the denominator guard
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the partial safety factors
    pub fn with_partial_factors(mut self, gamma_c: f64, gamma_s: f64) -> Self {
        self.gamma_c = gamma_c;
        self.gamma_s = gamma_s;
        self
    }

    /// Set the unit scale factors
    pub fn with_scales(mut self, force_scale: f64, area_scale: f64) -> Self {
        self.force_scale = force_scale;
        self.area_scale = area_scale;
        self
    }
}
