//! Rectangular reinforced concrete beam section

use serde::{Deserialize, Serialize};

/// Rectangular beam section with tension and compression reinforcement covers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Breadth in m
    pub b: f64,
    /// Total height in m
    pub h: f64,
    /// Mechanical cover of tension reinforcement in m
    pub at: f64,
    /// Mechanical cover of compression reinforcement in m
    pub ac: f64,
}

impl BeamSection {
    /// Create a new beam section
    pub fn new(b: f64, h: f64, at: f64, ac: f64) -> Self {
        Self { b, h, at, ac }
    }

    /// Section with equal covers on both faces
    pub fn symmetric(b: f64, h: f64, cover: f64) -> Self {
        Self::new(b, h, cover, cover)
    }

    /// Effective depth d = h - at
    pub fn d(&self) -> f64 {
        self.h - self.at
    }

    /// Distance between tension and compression reinforcement, d - ac
    pub fn steel_lever_arm(&self) -> f64 {
        self.d() - self.ac
    }
}
