//! Membrane and bending resultants of a shell element

use serde::{Deserialize, Serialize};

use super::PlaneForceState;

/// Force and moment resultants per unit width at the mid-plane of a shell
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShellForceState {
    /// Membrane force in x direction
    pub n_xx: f64,
    /// Membrane force in y direction
    pub n_yy: f64,
    /// Membrane shear force
    pub n_xy: f64,
    /// Bending moment in x direction
    pub m_xx: f64,
    /// Bending moment in y direction
    pub m_yy: f64,
    /// Twisting moment
    pub m_xy: f64,
}

impl ShellForceState {
    /// Create a new shell force state
    pub fn new(n_xx: f64, n_yy: f64, n_xy: f64, m_xx: f64, m_yy: f64, m_xy: f64) -> Self {
        Self {
            n_xx,
            n_yy,
            n_xy,
            m_xx,
            m_yy,
            m_xy,
        }
    }

    /// Create from array [Nxx, Nyy, Nxy, Mxx, Myy, Mxy]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    /// Pure membrane state
    pub fn membrane(n_xx: f64, n_yy: f64, n_xy: f64) -> Self {
        Self::new(n_xx, n_yy, n_xy, 0.0, 0.0, 0.0)
    }

    /// Pure bending/torsion state
    pub fn bending(m_xx: f64, m_yy: f64, m_xy: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, m_xx, m_yy, m_xy)
    }

    /// Membrane part of the state
    pub fn membrane_forces(&self) -> PlaneForceState {
        PlaneForceState::new(self.n_xx, self.n_yy, self.n_xy)
    }

    /// Resolve into top and bottom layer forces separated by lever arm `z`
    ///
    /// Each pair (N, M) becomes N/2 + M/z on the top layer and N/2 - M/z on the
    /// bottom layer. `z` is not checked here.
    ///
    /// # Returns
    /// (top, bottom)
    pub fn layer_forces(&self, z: f64) -> (PlaneForceState, PlaneForceState) {
        let split = |n: f64, m: f64| (0.5 * n + m / z, 0.5 * n - m / z);

        let (t_xx, b_xx) = split(self.n_xx, self.m_xx);
        let (t_yy, b_yy) = split(self.n_yy, self.m_yy);
        let (t_xy, b_xy) = split(self.n_xy, self.m_xy);

        (
            PlaneForceState::new(t_xx, t_yy, t_xy),
            PlaneForceState::new(b_xx, b_yy, b_xy),
        )
    }
}
