//! Mathematical utilities for tensor and design calculations

use nalgebra::{Matrix3, Vector3};

pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

/// Build the full 3x3 symmetric matrix from six independent components
///
/// Off-diagonal components are reused for both mirrored positions, so the
/// result is exactly symmetric.
#[rustfmt::skip]
pub fn symmetric_matrix(xx: f64, yy: f64, zz: f64, xy: f64, yz: f64, zx: f64) -> Mat3 {
    Mat3::new(
        xx, xy, zx,
        xy, yy, yz,
        zx, yz, zz,
    )
}

/// Split a tensor into its deviatoric part and its mean (hydrostatic) value
///
/// # Returns
/// (deviatoric tensor, mean of the diagonal)
pub fn deviatoric(m: &Mat3) -> (Mat3, f64) {
    let mean = m.trace() / 3.0;
    (m - Mat3::identity() * mean, mean)
}

/// Symmetric eigen-decomposition with eigenpairs sorted by ascending eigenvalue
///
/// # Arguments
/// * `m` - Symmetric matrix (only the lower triangle is read by the solver)
///
/// # Returns
/// (eigenvalues ascending, matrix whose column i is the unit eigenvector of eigenvalue i)
///
/// A matrix with any non-finite entry is never handed to the iterative solver;
/// all outputs are NaN instead.
pub fn sorted_symmetric_eigen(m: &Mat3) -> (Vec3, Mat3) {
    if !m.iter().all(|v| v.is_finite()) {
        return (Vec3::from_element(f64::NAN), Mat3::from_element(f64::NAN));
    }

    let eigen = m.symmetric_eigen();

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    let values = Vec3::new(
        eigen.eigenvalues[order[0]],
        eigen.eigenvalues[order[1]],
        eigen.eigenvalues[order[2]],
    );
    let vectors = Mat3::from_columns(&[
        eigen.eigenvectors.column(order[0]).into_owned(),
        eigen.eigenvectors.column(order[1]).into_owned(),
        eigen.eigenvectors.column(order[2]).into_owned(),
    ]);

    (values, vectors)
}

/// Clamp an inverse-trig argument to [-1, 1]
///
/// NaN passes through unchanged.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
