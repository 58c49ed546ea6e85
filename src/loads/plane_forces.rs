//! Membrane force state of a single reinforcement layer

use serde::{Deserialize, Serialize};

/// In-plane force resultants per unit width
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaneForceState {
    /// Normal force in x direction
    pub n_xx: f64,
    /// Normal force in y direction
    pub n_yy: f64,
    /// In-plane shear force
    pub n_xy: f64,
}

impl PlaneForceState {
    /// Create a new membrane force state
    pub fn new(n_xx: f64, n_yy: f64, n_xy: f64) -> Self {
        Self { n_xx, n_yy, n_xy }
    }

    /// Create from array [Nxx, Nyy, Nxy]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Values as [Nxx, Nyy, Nxy]
    pub fn to_array(&self) -> [f64; 3] {
        [self.n_xx, self.n_yy, self.n_xy]
    }

    /// Magnitude of the shear force
    pub fn shear(&self) -> f64 {
        self.n_xy.abs()
    }

    /// Principal membrane forces
    ///
    /// # Returns
    /// (n1, n2, angle) with n1 >= n2 and `angle` the direction of n1 from the
    /// x axis in radians
    pub fn principal(&self) -> (f64, f64, f64) {
        let avg = (self.n_xx + self.n_yy) / 2.0;
        let r = ((self.n_xx - self.n_yy).powi(2) / 4.0 + self.n_xy.powi(2)).sqrt();
        let angle = 0.5 * (2.0 * self.n_xy).atan2(self.n_xx - self.n_yy);
        (avg + r, avg - r, angle)
    }

    /// Scale all components by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.n_xx * factor, self.n_yy * factor, self.n_xy * factor)
    }
}
