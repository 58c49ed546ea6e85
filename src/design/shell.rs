//! Top/bottom layer reinforcement design of a shell element
//!
//! Membrane forces and moments are resolved into two membrane force states, one
//! per reinforcement layer, separated by the lever arm z = h - 2*rec. Each layer
//! is then designed with [`design_plane`].

use super::plane::design_plane;
use super::DesignOptions;
use crate::elements::ShellSection;
use crate::error::DesignResult;
use crate::loads::{PlaneForceState, ShellForceState};
use crate::results::ShellReinforcement;

/// Design top and bottom reinforcement for a shell element
///
/// # Errors
/// [`DesignError::InfeasibleGeometry`](crate::error::DesignError::InfeasibleGeometry)
/// when the lever arm `h - 2*rec` is not strictly positive.
pub fn design_shell(
    forces: &ShellForceState,
    section: &ShellSection,
    options: &DesignOptions,
) -> DesignResult<ShellReinforcement> {
    let z = section
        .checked_lever_arm()
        .inspect_err(|e| log::debug!("shell design skipped: {e}"))?;

    let (top, bottom) = forces.layer_forces(z);
    log::debug!("shell layers with z={z}: top={top:?}, bottom={bottom:?}");

    Ok(design_shell_layers(&top, &bottom, options))
}

/// Design already resolved top and bottom layer forces
pub fn design_shell_layers(
    top: &PlaneForceState,
    bottom: &PlaneForceState,
    options: &DesignOptions,
) -> ShellReinforcement {
    ShellReinforcement {
        top: design_plane(top, options),
        bottom: design_plane(bottom, options),
    }
}

/// Shell design as [asx_top, asy_top, asc_top, asx_bot, asy_bot, asc_bot]
///
/// Uses default options. Infeasible geometry yields six NaNs.
#[allow(clippy::too_many_arguments)]
pub fn shell_reinforcement(
    n_xx: f64,
    n_yy: f64,
    n_xy: f64,
    m_xx: f64,
    m_yy: f64,
    m_xy: f64,
    rec: f64,
    h: f64,
) -> [f64; 6] {
    design_shell(
        &ShellForceState::from_array([n_xx, n_yy, n_xy, m_xx, m_yy, m_xy]),
        &ShellSection::new(h, rec),
        &DesignOptions::default(),
    )
    .map(|r| r.to_array())
    .unwrap_or_else(|_| ShellReinforcement::nan_array())
}
