//! Stress tensor analysis
//!
//! Principal stresses, principal directions and the invariant family used by
//! plasticity and failure criteria (J2, J3, Lode coordinates, triaxiality).

use serde::{Deserialize, Serialize};

use crate::math::{self, Mat3, Vec3};
use crate::results::{InvariantSet, PrincipalState};

/// Lode radius relative to the tensor norm below which the deviator is treated as zero
const ZERO_DEVIATOR: f64 = 1.0e-12;

/// sqrt(3) * 3 / 2, the scaling between J3 / J2^1.5 and sin/cos(3 theta)
const LODE_SCALE: f64 = 2.598_076_211_353_316;

/// Symmetric 3D stress tensor given by its six independent components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressTensor {
    pub xx: f64,
    pub yy: f64,
    pub zz: f64,
    pub xy: f64,
    pub yz: f64,
    pub zx: f64,
}

impl StressTensor {
    /// Create a tensor from (σxx, σyy, σzz, σxy, σyz, σzx)
    pub fn new(xx: f64, yy: f64, zz: f64, xy: f64, yz: f64, zx: f64) -> Self {
        Self { xx, yy, zz, xy, yz, zx }
    }

    /// Create from an array [σxx, σyy, σzz, σxy, σyz, σzx]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    /// Hydrostatic state p·I
    pub fn hydrostatic_state(p: f64) -> Self {
        Self::new(p, p, p, 0.0, 0.0, 0.0)
    }

    /// Plane stress state (σzz = σyz = σzx = 0)
    pub fn plane(xx: f64, yy: f64, xy: f64) -> Self {
        Self::new(xx, yy, 0.0, xy, 0.0, 0.0)
    }

    /// Full symmetric 3x3 matrix
    pub fn to_matrix(&self) -> Mat3 {
        math::symmetric_matrix(self.xx, self.yy, self.zz, self.xy, self.yz, self.zx)
    }

    /// Mean (hydrostatic) stress
    pub fn hydrostatic(&self) -> f64 {
        (self.xx + self.yy + self.zz) / 3.0
    }

    /// Von Mises equivalent stress
    pub fn von_mises(&self) -> f64 {
        let term1 = (self.xx - self.yy).powi(2)
            + (self.yy - self.zz).powi(2)
            + (self.zz - self.xx).powi(2);
        let term2 = 6.0 * (self.xy.powi(2) + self.yz.powi(2) + self.zx.powi(2));

        ((term1 + term2) / 2.0).sqrt()
    }

    /// Principal stresses and directions, see [`principal_stresses`]
    pub fn principal(&self) -> PrincipalState {
        principal_stresses(self)
    }

    /// Invariant set, see [`invariants`]
    pub fn invariants(&self) -> InvariantSet {
        invariants(self)
    }
}

/// Principal stresses (ascending) with their unit directions
///
/// Non-finite components produce NaN values and directions.
pub fn principal_stresses(tensor: &StressTensor) -> PrincipalState {
    let (values, directions) = math::sorted_symmetric_eigen(&tensor.to_matrix());
    PrincipalState { values, directions }
}

/// Principal directions scaled by their principal stress
///
/// Ordered like [`principal_stresses`]: the first vector belongs to the minimum
/// principal stress.
pub fn principal_vectors(tensor: &StressTensor) -> [Vec3; 3] {
    principal_stresses(tensor).scaled_vectors()
}

/// Stress invariants and derived measures
///
/// J2 and J3 come from direct products of the deviatoric tensor, not from the
/// eigenvalues. The Lode angle argument is clamped to [-1, 1] before `asin`;
/// a deviator that vanishes relative to the tensor magnitude gives
/// `lode_theta = 0` and `cos3t = 0`. Triaxiality is left
/// unguarded and is non-finite when the equivalent stress vanishes.
pub fn invariants(tensor: &StressTensor) -> InvariantSet {
    let sigma = tensor.to_matrix();
    let (dev, mean_stress) = math::deviatoric(&sigma);

    let i1 = sigma.trace();
    let dev2 = dev * dev;
    let j2 = 0.5 * dev2.trace();
    let j3 = (dev2 * dev).trace() / 3.0;

    let eqv_stress = (3.0 * j2).sqrt();
    let lode_r = (2.0 * j2).sqrt();
    let lode_z = i1 / 3.0_f64.sqrt();

    let j2_32 = j2.powf(1.5);
    let ratio = if lode_r > ZERO_DEVIATOR * sigma.norm() && j2_32 > 0.0 {
        LODE_SCALE * j3 / j2_32
    } else {
        0.0
    };
    let lode_theta = math::clamp_unit(ratio).asin() / 3.0;
    let cos3t = ratio;

    let triaxiality = mean_stress / eqv_stress;

    log::trace!(
        "invariants: I1={i1}, J2={j2}, J3={j3}, theta={lode_theta}, triaxiality={triaxiality}"
    );

    InvariantSet {
        i1,
        j2,
        j3,
        mean_stress,
        eqv_stress,
        lode_r,
        lode_z,
        lode_theta,
        cos3t,
        triaxiality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_von_mises_uniaxial() {
        let stress = StressTensor::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(stress.von_mises(), 100.0, epsilon = 1e-10);
        assert_relative_eq!(invariants(&stress).eqv_stress, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_von_mises_pure_shear() {
        // von Mises = sqrt(3) * tau
        let stress = StressTensor::new(0.0, 0.0, 0.0, 100.0, 0.0, 0.0);
        assert_relative_eq!(stress.von_mises(), 100.0 * 3.0_f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(
            invariants(&stress).eqv_stress,
            100.0 * 3.0_f64.sqrt(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_from_array_and_hydrostatic() {
        let tensor = StressTensor::from_array([3.0, 2.0, -1.0, 0.3, -0.4, 0.5]);
        assert_eq!(tensor, StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5));
        assert_relative_eq!(tensor.hydrostatic(), 4.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            tensor.hydrostatic(),
            invariants(&tensor).mean_stress,
            epsilon = 1e-12
        );
        assert_eq!(StressTensor::plane(1.0, 2.0, 3.0).to_matrix()[(2, 2)], 0.0);
    }

    #[test]
    fn test_principal_diagonal() {
        let p = principal_stresses(&StressTensor::new(3.0, 2.0, -1.0, 0.0, 0.0, 0.0));
        assert_relative_eq!(p.min(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(p.mid(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.max(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.max_shear(), 2.0, epsilon = 1e-12);

        // Minimum principal stress acts along z
        assert_relative_eq!(p.direction(0)[2].abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_reconstructs_tensor() {
        let tensor = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
        let p = principal_stresses(&tensor);
        let rebuilt = p.reconstruct();
        let original = tensor.to_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(rebuilt[(i, j)], original[(i, j)], epsilon = 1e-12);
            }
        }
        assert!(p.values[0] <= p.values[1] && p.values[1] <= p.values[2]);
    }

    #[test]
    fn test_principal_vectors_magnitude() {
        let tensor = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
        let p = principal_stresses(&tensor);
        let vectors = principal_vectors(&tensor);
        for i in 0..3 {
            assert_relative_eq!(vectors[i].norm(), p.values[i].abs(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invariants_reference_state() {
        let tensor = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
        let inv = invariants(&tensor);

        assert_relative_eq!(inv.i1, 4.0, epsilon = 1e-12);
        assert_relative_eq!(inv.mean_stress, 4.0 / 3.0, epsilon = 1e-12);

        // J2 = 1/6 [(sx-sy)^2 + (sy-sz)^2 + (sz-sx)^2] + txy^2 + tyz^2 + tzx^2
        let j2 = (1.0 + 9.0 + 16.0) / 6.0 + 0.09 + 0.16 + 0.25;
        assert_relative_eq!(inv.j2, j2, epsilon = 1e-12);
        assert_relative_eq!(inv.eqv_stress, tensor.von_mises(), epsilon = 1e-12);
        assert_relative_eq!(inv.lode_r, (2.0 * j2).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(inv.lode_z, 4.0 / 3.0_f64.sqrt(), epsilon = 1e-12);

        // J3 of a traceless tensor equals its determinant
        let (dev, _) = math::deviatoric(&tensor.to_matrix());
        assert_relative_eq!(inv.j3, dev.determinant(), epsilon = 1e-12);

        let limit = std::f64::consts::FRAC_PI_6;
        assert!(inv.lode_theta >= -limit - 1e-12 && inv.lode_theta <= limit + 1e-12);
        assert_relative_eq!((3.0 * inv.lode_theta).sin(), inv.cos3t, epsilon = 1e-9);
    }

    #[test]
    fn test_uniaxial_lode_angle_is_clamped() {
        // Uniaxial tension sits exactly on the boundary of the asin domain
        let inv = invariants(&StressTensor::new(250.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(inv.lode_theta.is_finite());
        assert_relative_eq!(inv.lode_theta.abs(), std::f64::consts::FRAC_PI_6, epsilon = 1e-6);
        assert_relative_eq!(inv.triaxiality, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hydrostatic_state() {
        let inv = invariants(&StressTensor::hydrostatic_state(100.0));
        assert_eq!(inv.j2, 0.0);
        assert_eq!(inv.j3, 0.0);
        assert_eq!(inv.eqv_stress, 0.0);
        assert_eq!(inv.lode_theta, 0.0);
        assert_eq!(inv.cos3t, 0.0);
        assert_relative_eq!(inv.mean_stress, 100.0, epsilon = 1e-12);
        assert!(!inv.triaxiality.is_finite());
        assert_eq!(inv.triaxiality_checked(), None);
    }

    #[test]
    fn test_lode_angle_is_scale_free() {
        let base = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
        let reference = invariants(&base);
        assert!(reference.lode_theta != 0.0);

        for scale in [1.0e-13, 1.0e-6, 1.0e6] {
            let t = StressTensor::from_array(
                [base.xx, base.yy, base.zz, base.xy, base.yz, base.zx].map(|v| v * scale),
            );
            let inv = invariants(&t);
            assert_relative_eq!(inv.lode_theta, reference.lode_theta, epsilon = 1e-9);
            assert_relative_eq!(inv.cos3t, reference.cos3t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rounding_noise_is_not_deviatoric() {
        // The mean of three 0.1 entries leaves at most rounding noise in the deviator
        let inv = invariants(&StressTensor::hydrostatic_state(0.1));
        assert_eq!(inv.lode_theta, 0.0);
        assert_eq!(inv.cos3t, 0.0);
        assert!(inv.eqv_stress < 1e-15);
    }

    #[test]
    fn test_zero_state() {
        let inv = invariants(&StressTensor::default());
        assert_eq!(inv.i1, 0.0);
        assert_eq!(inv.cos3t, 0.0);
        assert!(inv.triaxiality.is_nan());
    }
}
