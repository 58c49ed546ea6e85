//! Shell Design - stress tensor analysis and reinforced concrete shell design
//!
//! This library provides the numerical kernels used when post-processing
//! structural analysis results of concrete plates and shells:
//! - Principal stresses and directions of a 3D stress tensor
//! - Stress invariants (J2, J3, Lode coordinates, triaxiality)
//! - Reinforcement design of membrane force states
//! - Top/bottom layer reinforcement of shell elements
//! - Bending and shear checks of rectangular beams
//!
//! ## Example
//! ```rust
//! use shell_design::prelude::*;
//!
//! // Stress state in MPa
//! let stress = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
//! let principal = principal_stresses(&stress);
//! let inv = invariants(&stress);
//! assert!(principal.min() <= principal.max());
//! assert!((inv.eqv_stress - stress.von_mises()).abs() < 1e-9);
//!
//! // Slab forces in kN/m and kNm/m, 300 mm thick with 30 mm cover
//! let forces = ShellForceState::new(0.0, 0.0, 0.0, 10.0, 4.0, 1.5);
//! let section = ShellSection::new(0.3, 0.03);
//! let reinforcement = design_shell(&forces, &section, &DesignOptions::default()).unwrap();
//! assert!(reinforcement.top.asx > 0.0);
//! ```

pub mod design;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod results;
pub mod stress;

// Re-export common types
pub mod prelude {
    pub use crate::design::{
        bending_reinforcement, bending_resistance, concrete_shear_resistance,
        design_beam_bending, design_beam_shear, design_plane, design_shell, design_shell_layers,
        plane_reinforcement, shear_reinforcement, shear_resistance, shell_reinforcement,
        strut_capacity, DesignCase, DesignOptions,
    };
    pub use crate::elements::{BeamSection, Concrete, Reinforcement, ShellSection};
    pub use crate::error::{DesignError, DesignResult};
    pub use crate::loads::{PlaneForceState, ShellForceState};
    pub use crate::math::{Mat3, Vec3};
    pub use crate::results::{
        BendingDesign, BendingResistance, ConcreteShear, DoublyReinforcedDesign, Invariant,
        InvariantSet, PlaneReinforcement, PrincipalState, ShearDesign, ShellReinforcement,
    };
    pub use crate::stress::{invariants, principal_stresses, principal_vectors, StressTensor};
}
