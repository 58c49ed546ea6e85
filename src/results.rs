//! Result types for tensor analysis and reinforcement design

use serde::{Deserialize, Serialize};

use crate::design::DesignCase;
use crate::math::{Mat3, Vec3};

/// Principal stresses and directions of a symmetric stress tensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalState {
    /// Principal stresses in ascending order
    pub values: Vec3,
    /// Unit principal directions; column i belongs to `values[i]`
    ///
    /// The sign of each column is arbitrary.
    pub directions: Mat3,
}

impl PrincipalState {
    /// Unit direction of principal stress `i` (0 = minimum, 2 = maximum)
    pub fn direction(&self, i: usize) -> Vec3 {
        self.directions.column(i).into_owned()
    }

    /// Minimum principal stress
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Intermediate principal stress
    pub fn mid(&self) -> f64 {
        self.values[1]
    }

    /// Maximum principal stress
    pub fn max(&self) -> f64 {
        self.values[2]
    }

    /// Maximum shear stress (Tresca radius)
    pub fn max_shear(&self) -> f64 {
        (self.values[2] - self.values[0]) / 2.0
    }

    /// Directions scaled by their principal stress
    pub fn scaled_vectors(&self) -> [Vec3; 3] {
        [
            self.direction(0) * self.values[0],
            self.direction(1) * self.values[1],
            self.direction(2) * self.values[2],
        ]
    }

    /// Rebuild the stress matrix as V * diag(values) * V^T
    pub fn reconstruct(&self) -> Mat3 {
        self.directions * Mat3::from_diagonal(&self.values) * self.directions.transpose()
    }
}

/// Selector for one entry of an [`InvariantSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Invariant {
    I1,
    J2,
    J3,
    MeanStress,
    EqvStress,
    LodeR,
    LodeZ,
    LodeTheta,
    Cos3Theta,
    Triaxiality,
}

impl Invariant {
    /// All invariants in output order
    pub const ALL: [Invariant; 10] = [
        Invariant::I1,
        Invariant::J2,
        Invariant::J3,
        Invariant::MeanStress,
        Invariant::EqvStress,
        Invariant::LodeR,
        Invariant::LodeZ,
        Invariant::LodeTheta,
        Invariant::Cos3Theta,
        Invariant::Triaxiality,
    ];

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Invariant::I1 => "I1",
            Invariant::J2 => "J2",
            Invariant::J3 => "J3",
            Invariant::MeanStress => "Mean Stress",
            Invariant::EqvStress => "Equivalent Stress",
            Invariant::LodeR => "Lode R",
            Invariant::LodeZ => "Lode Z",
            Invariant::LodeTheta => "Lode Theta",
            Invariant::Cos3Theta => "Cos(3Theta)",
            Invariant::Triaxiality => "Triaxiality",
        }
    }
}

/// Stress invariants and derived scalar measures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvariantSet {
    /// First invariant (trace)
    pub i1: f64,
    /// Second deviatoric invariant
    pub j2: f64,
    /// Third deviatoric invariant
    pub j3: f64,
    /// Mean (hydrostatic) stress, I1 / 3
    pub mean_stress: f64,
    /// Von Mises equivalent stress, sqrt(3 J2)
    pub eqv_stress: f64,
    /// Lode radius, sqrt(2 J2)
    pub lode_r: f64,
    /// Lode axial coordinate, I1 / sqrt(3)
    pub lode_z: f64,
    /// Lode angle in radians, within [-pi/6, pi/6]
    pub lode_theta: f64,
    /// cos(3 theta) measure; 0 for a purely hydrostatic state
    pub cos3t: f64,
    /// Mean stress over equivalent stress; non-finite when the equivalent stress is zero
    pub triaxiality: f64,
}

impl InvariantSet {
    /// Values in the order (I1, J2, J3, mean, eqv, lode_r, lode_z, lode_theta, cos3t, triaxiality)
    pub fn to_array(&self) -> [f64; 10] {
        [
            self.i1,
            self.j2,
            self.j3,
            self.mean_stress,
            self.eqv_stress,
            self.lode_r,
            self.lode_z,
            self.lode_theta,
            self.cos3t,
            self.triaxiality,
        ]
    }

    /// Get a single invariant
    pub fn get(&self, invariant: Invariant) -> f64 {
        match invariant {
            Invariant::I1 => self.i1,
            Invariant::J2 => self.j2,
            Invariant::J3 => self.j3,
            Invariant::MeanStress => self.mean_stress,
            Invariant::EqvStress => self.eqv_stress,
            Invariant::LodeR => self.lode_r,
            Invariant::LodeZ => self.lode_z,
            Invariant::LodeTheta => self.lode_theta,
            Invariant::Cos3Theta => self.cos3t,
            Invariant::Triaxiality => self.triaxiality,
        }
    }

    /// Triaxiality if it is defined (non-zero equivalent stress)
    pub fn triaxiality_checked(&self) -> Option<f64> {
        self.triaxiality.is_finite().then_some(self.triaxiality)
    }
}

/// Reinforcement demand for one membrane force state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneReinforcement {
    /// Reinforcement force in x direction
    pub asx: f64,
    /// Reinforcement force in y direction
    pub asy: f64,
    /// Concrete compression demand
    pub asc: f64,
    /// Design angle in radians
    pub theta: f64,
    /// Sign/magnitude region that produced this result
    pub case: DesignCase,
}

impl PlaneReinforcement {
    /// Values as [asx, asy, asc, theta]
    pub fn to_array(&self) -> [f64; 4] {
        [self.asx, self.asy, self.asc, self.theta]
    }

    /// Design angle in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }
}

/// Reinforcement demand of the top and bottom layers of a shell element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellReinforcement {
    pub top: PlaneReinforcement,
    pub bottom: PlaneReinforcement,
}

impl ShellReinforcement {
    /// Values as [asx_top, asy_top, asc_top, asx_bot, asy_bot, asc_bot]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.top.asx,
            self.top.asy,
            self.top.asc,
            self.bottom.asx,
            self.bottom.asy,
            self.bottom.asc,
        ]
    }

    /// Both layers as [asx, asy, asc, theta], top first
    pub fn to_layer_arrays(&self) -> [[f64; 4]; 2] {
        [self.top.to_array(), self.bottom.to_array()]
    }

    /// Sentinel row used by array pipelines for infeasible input
    pub fn nan_array() -> [f64; 6] {
        [f64::NAN; 6]
    }
}

/// Tension reinforcement for a singly reinforced rectangular section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendingDesign {
    /// Tension reinforcement area (cm²)
    pub ast: f64,
    /// Steel strain (‰)
    pub eps_s: f64,
    /// Relative neutral axis depth x/d
    pub alpha: f64,
    /// Mechanical reinforcement ratio
    pub omega: f64,
    /// Reduced moment
    pub mu: f64,
}

/// Bending resistance of a singly reinforced rectangular section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendingResistance {
    /// Resisting moment (kNm)
    pub mrd: f64,
    /// Steel strain (‰)
    pub eps_s: f64,
    /// Relative neutral axis depth x/d
    pub alpha: f64,
}

/// Bending design of a beam that may need compression reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoublyReinforcedDesign {
    /// Total tension reinforcement (cm²)
    pub ast: f64,
    /// Compression reinforcement (cm²), zero when not required
    pub asc: f64,
    /// Relative neutral axis depth x/d
    pub alpha: f64,
    /// Tension steel strain (‰)
    pub eps_st: f64,
    /// Compression steel strain (‰), present only when compression steel is required
    pub eps_sc: Option<f64>,
}

/// Shear link design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearDesign {
    /// Link area per unit length (m²/m)
    pub asw_s: f64,
    /// Strut crushing capacity (kN)
    pub vrd_max: f64,
}

/// Shear resistance of a member without shear reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteShear {
    /// Lower bound resistance (kN)
    pub vrd_min: f64,
    /// Resistance from longitudinal reinforcement ratio (kN)
    pub vrd_c: f64,
    /// Governing resistance, max(vrd_min, vrd_c)
    pub vrd: f64,
}
