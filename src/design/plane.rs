//! Reinforcement design of a single membrane force state
//!
//! The force state (Nxx, Nyy, Nxy) is classified into one of four regions by
//! comparing each normal force with the shear magnitude |Nxy|. Each region has a
//! closed-form resolution into reinforcement forces along x and y, a concrete
//! compression demand and the strut angle theta that was used.
//!
//! With both directions sufficient the strut sits at 45° and the resolved forces
//! satisfy `Nxx - asx = |Nxy| cot(theta)` and `Nyy - asy = |Nxy| tan(theta)`. In a
//! deficient direction the reinforcement is zero and the strut carries the
//! magnitude of that force (at least |Nxy|), so only the other direction keeps the
//! relation.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use super::DesignOptions;
use crate::loads::PlaneForceState;
use crate::results::PlaneReinforcement;

/// Sign/magnitude region of a membrane force state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCase {
    /// Nxx >= |Nxy| and Nyy >= |Nxy|: shear taken at 45° in both directions
    BothSufficient,
    /// Nxx < |Nxy| <= Nyy: no x steel, the shear deficit is redistributed into y
    XDeficient,
    /// Nyy < |Nxy| <= Nxx: no y steel, the shear deficit is redistributed into x
    YDeficient,
    /// Both Nxx and Nyy below |Nxy|: shear carried by a concrete strut along the
    /// principal direction with no reinforcement demand
    ShearGoverned,
}

impl DesignCase {
    /// Classify a force state
    ///
    /// The four regions partition the input space. NaN components fall into
    /// [`DesignCase::ShearGoverned`].
    pub fn classify(forces: &PlaneForceState) -> Self {
        let v = forces.shear();
        match (forces.n_xx >= v, forces.n_yy >= v) {
            (true, true) => DesignCase::BothSufficient,
            (false, true) => DesignCase::XDeficient,
            (true, false) => DesignCase::YDeficient,
            (false, false) => DesignCase::ShearGoverned,
        }
    }
}

/// Design the reinforcement for one membrane force state
///
/// Never fails. The strut force in a deficient direction is floored at |Nxy|, and a
/// vanishing divisor is replaced by `options.epsilon`.
pub fn design_plane(forces: &PlaneForceState, options: &DesignOptions) -> PlaneReinforcement {
    let PlaneForceState { n_xx, n_yy, n_xy } = *forces;
    let v = n_xy.abs();
    let eps = options.epsilon;
    let case = DesignCase::classify(forces);

    let (asx, asy, asc, theta) = match case {
        DesignCase::BothSufficient => (n_xx - v, n_yy - v, 2.0 * v, FRAC_PI_4),
        DesignCase::XDeficient => {
            // Strut component along x is dx = |Nxy| cot(theta), never below |Nxy|
            let dx = n_xx.abs().max(v).max(eps);
            (0.0, n_yy - v * v / dx, 0.0, v.atan2(dx))
        }
        DesignCase::YDeficient => {
            let dy = n_yy.abs().max(v).max(eps);
            (n_xx - v * v / dy, 0.0, 0.0, dy.atan2(v))
        }
        DesignCase::ShearGoverned => {
            let (_, n2, _) = forces.principal();
            let theta = (n_xx - n_yy).atan2(2.0 * n_xy) / 2.0;
            (0.0, 0.0, n2.abs(), theta)
        }
    };

    log::debug!(
        "plane design {:?}: n=({n_xx}, {n_yy}, {n_xy}) -> asx={asx}, asy={asy}, asc={asc}, theta={theta}",
        case
    );

    PlaneReinforcement {
        asx,
        asy,
        asc,
        theta,
        case,
    }
}

/// Plane design as [asx, asy, asc, theta] using default options
pub fn plane_reinforcement(n_xx: f64, n_yy: f64, n_xy: f64) -> [f64; 4] {
    design_plane(
        &PlaneForceState::from_array([n_xx, n_yy, n_xy]),
        &DesignOptions::default(),
    )
    .to_array()
}
