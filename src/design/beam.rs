//! Ultimate limit state checks for rectangular reinforced concrete beams
//!
//! Simplified rectangular stress block for bending and the variable strut
//! inclination method for shear. Dimensions are in m, moments in kNm, forces in
//! kN, strengths in MPa; `DesignOptions::force_scale` bridges those units and
//! `DesignOptions::area_scale` sets the reported longitudinal steel unit (cm²).
//!
//! Infeasible designs are reported as [`DesignError`]; the `*_or_nan` helpers
//! turn them into a NaN scalar for numerical pipelines.

use super::DesignOptions;
use crate::elements::{BeamSection, Concrete, Reinforcement};
use crate::error::{DesignError, DesignResult};
use crate::results::{
    BendingDesign, BendingResistance, ConcreteShear, DoublyReinforcedDesign, ShearDesign,
};

/// Steel strain (‰) for a relative neutral axis depth with concrete at 3.5‰
fn steel_strain(alpha: f64) -> f64 {
    (1.0 - alpha) * 3.5 / alpha
}

/// Tension reinforcement of a singly reinforced rectangular section
///
/// # Arguments
/// * `b` - Breadth (m)
/// * `d` - Effective depth (m)
/// * `med` - Design moment (kNm)
/// * `fcd`, `fyd` - Design strengths (MPa)
///
/// # Errors
/// [`DesignError::BendingCapacityExceeded`] when the reduced moment exceeds 0.5.
pub fn bending_reinforcement(
    b: f64,
    d: f64,
    med: f64,
    fcd: f64,
    fyd: f64,
    options: &DesignOptions,
) -> DesignResult<BendingDesign> {
    let mu = med / b / d.powi(2) / fcd / options.force_scale;
    let discriminant = 1.0 - 2.0 * mu;
    if !(discriminant >= 0.0) {
        return Err(DesignError::BendingCapacityExceeded { mu });
    }

    let omega = 1.0 - discriminant.sqrt();
    let alpha = 1.25 * omega;
    let ast = omega * b * d * fcd / fyd * options.area_scale;

    Ok(BendingDesign {
        ast,
        eps_s: steel_strain(alpha),
        alpha,
        omega,
        mu,
    })
}

/// Tension reinforcement area, NaN when the section cannot resist the moment
pub fn bending_reinforcement_or_nan(
    b: f64,
    d: f64,
    med: f64,
    fcd: f64,
    fyd: f64,
    options: &DesignOptions,
) -> f64 {
    bending_reinforcement(b, d, med, fcd, fyd, options).map_or(f64::NAN, |r| r.ast)
}

/// Resisting moment of a singly reinforced rectangular section
///
/// # Arguments
/// * `ast` - Tension reinforcement area in the `area_scale` unit (cm²)
pub fn bending_resistance(
    b: f64,
    d: f64,
    ast: f64,
    fcd: f64,
    fyd: f64,
    options: &DesignOptions,
) -> BendingResistance {
    let omega = ast * fyd / b / d / fcd / options.area_scale;
    let mu = omega * (1.0 - 0.5 * omega);
    let alpha = 1.25 * omega;

    BendingResistance {
        mrd: mu * b * d * d * fcd * options.force_scale,
        eps_s: steel_strain(alpha),
        alpha,
    }
}

/// Bending design of a beam, adding compression steel above the ductility limit
///
/// The tension steel is designed for min(MEd, MEd,max) where MEd,max follows from
/// the concrete's limiting neutral axis depth; any excess moment is carried by a
/// steel couple over `d - ac` and added to both faces.
pub fn design_beam_bending(
    section: &BeamSection,
    med: f64,
    concrete: &Concrete,
    reinforcement: &Reinforcement,
    options: &DesignOptions,
) -> DesignResult<DoublyReinforcedDesign> {
    let fcd = concrete.fcd(options);
    let fyd = reinforcement.fyd(options);
    let d = section.d();

    let omega_max = concrete.alpha_lim() / 1.25;
    let mu_max = omega_max * (1.0 - 0.5 * omega_max);
    let med_max = mu_max * section.b * d * d * fcd * options.force_scale;

    let tension = bending_reinforcement(section.b, d, med.min(med_max), fcd, fyd, options)?;

    let (asc, eps_sc) = if med <= med_max {
        (0.0, None)
    } else {
        let asc = (med - med_max) / (section.steel_lever_arm() * fyd) * options.area_scale
            / options.force_scale;
        let alpha_c = section.ac / d;
        let eps_sc = (tension.alpha - alpha_c) / tension.alpha * concrete.eps_cu2();
        log::debug!("beam needs compression steel: MEd={med} > MEd,max={med_max}, As2={asc}");
        (asc, Some(eps_sc))
    };

    Ok(DoublyReinforcedDesign {
        ast: tension.ast + asc,
        asc,
        alpha: tension.alpha,
        eps_st: tension.eps_s,
        eps_sc,
    })
}

/// Strut crushing capacity VRd,max (kN)
///
/// # Arguments
/// * `bw` - Web width (m)
/// * `d` - Effective depth (m)
/// * `fck` - Concrete characteristic strength (MPa)
/// * `cot_theta` - Strut inclination cot(theta)
pub fn strut_capacity(bw: f64, d: f64, fck: f64, cot_theta: f64, options: &DesignOptions) -> f64 {
    let z = 0.9 * d;
    let nu = 0.6 * (1.0 - fck / 250.0);
    bw * z * nu * fck / options.gamma_c * options.force_scale / (cot_theta + 1.0 / cot_theta)
}

/// Vertical link area per unit length for a design shear force
///
/// # Errors
/// [`DesignError::StrutCapacityExceeded`] when VEd exceeds VRd,max.
pub fn shear_reinforcement(
    bw: f64,
    d: f64,
    fck: f64,
    fyk: f64,
    cot_theta: f64,
    ved: f64,
    options: &DesignOptions,
) -> DesignResult<ShearDesign> {
    let z = 0.9 * d;
    let vrd_max = strut_capacity(bw, d, fck, cot_theta, options);

    if vrd_max >= ved {
        let asw_s = ved / z / fyk * options.gamma_s / cot_theta / options.force_scale;
        Ok(ShearDesign { asw_s, vrd_max })
    } else {
        Err(DesignError::StrutCapacityExceeded { ved, vrd_max })
    }
}

/// Link area per unit length, NaN when the struts would crush
pub fn shear_reinforcement_or_nan(
    bw: f64,
    d: f64,
    fck: f64,
    fyk: f64,
    cot_theta: f64,
    ved: f64,
    options: &DesignOptions,
) -> f64 {
    shear_reinforcement(bw, d, fck, fyk, cot_theta, ved, options).map_or(f64::NAN, |r| r.asw_s)
}

/// Shear resistance with links, min(VRd,s, VRd,max) in kN
///
/// # Arguments
/// * `asw_s` - Link area per unit length (m²/m)
pub fn shear_resistance(
    bw: f64,
    d: f64,
    fck: f64,
    fyk: f64,
    cot_theta: f64,
    asw_s: f64,
    options: &DesignOptions,
) -> f64 {
    let z = 0.9 * d;
    let vrd_s = asw_s * z * fyk / options.gamma_s * cot_theta * options.force_scale;
    vrd_s.min(strut_capacity(bw, d, fck, cot_theta, options))
}

/// Shear resistance of a member without shear reinforcement (kN)
///
/// # Arguments
/// * `rho_l` - Longitudinal reinforcement ratio As / (bw d)
pub fn concrete_shear_resistance(
    bw: f64,
    d: f64,
    fck: f64,
    rho_l: f64,
    options: &DesignOptions,
) -> ConcreteShear {
    let k = (1.0 + (0.2 / d).sqrt()).min(2.0);
    let vrd_min = 0.035 * k.powf(1.5) * fck.sqrt() * bw * d * options.force_scale;
    let vrd_c = 0.18 / options.gamma_c * k * (100.0 * rho_l * fck).cbrt() * bw * d
        * options.force_scale;

    ConcreteShear {
        vrd_min,
        vrd_c,
        vrd: vrd_min.max(vrd_c),
    }
}

/// Shear design of a beam section with the given strut inclination
pub fn design_beam_shear(
    section: &BeamSection,
    ved: f64,
    cot_theta: f64,
    concrete: &Concrete,
    reinforcement: &Reinforcement,
    options: &DesignOptions,
) -> DesignResult<ShearDesign> {
    shear_reinforcement(
        section.b,
        section.d(),
        concrete.fck,
        reinforcement.fyk,
        cot_theta,
        ved,
        options,
    )
}

impl BeamSection {
    /// See [`design_beam_bending`]
    pub fn design_bending(
        &self,
        med: f64,
        concrete: &Concrete,
        reinforcement: &Reinforcement,
        options: &DesignOptions,
    ) -> DesignResult<DoublyReinforcedDesign> {
        design_beam_bending(self, med, concrete, reinforcement, options)
    }

    /// See [`design_beam_shear`]
    pub fn design_shear(
        &self,
        ved: f64,
        cot_theta: f64,
        concrete: &Concrete,
        reinforcement: &Reinforcement,
        options: &DesignOptions,
    ) -> DesignResult<ShearDesign> {
        design_beam_shear(self, ved, cot_theta, concrete, reinforcement, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn opts() -> DesignOptions {
        DesignOptions::default()
    }

    #[test]
    fn test_bending_reinforcement_reference() {
        let r = bending_reinforcement(0.3, 0.45, 100.0, 20.0, 434.8, &opts()).unwrap();
        assert_relative_eq!(r.mu, 100.0 / 1215.0, epsilon = 1e-12);
        assert_relative_eq!(r.omega, 1.0 - (1.0 - 200.0 / 1215.0_f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(r.alpha, 1.25 * r.omega, epsilon = 1e-12);
        assert!(r.ast > 5.0 && r.ast < 5.5, "ast = {}", r.ast);
        assert!(r.eps_s > 3.5 / 1.25, "steel should yield well beyond 3.5/1.25 ‰");
    }

    #[test]
    fn test_resistance_inverts_design() {
        let o = opts();
        let design = bending_reinforcement(0.25, 0.55, 180.0, 16.7, 435.0, &o).unwrap();
        let resistance = bending_resistance(0.25, 0.55, design.ast, 16.7, 435.0, &o);
        assert_relative_eq!(resistance.mrd, 180.0, epsilon = 1e-9);
        assert_relative_eq!(resistance.alpha, design.alpha, epsilon = 1e-12);
    }

    #[test]
    fn test_bending_over_capacity() {
        let err = bending_reinforcement(0.2, 0.3, 1000.0, 20.0, 435.0, &opts()).unwrap_err();
        assert!(matches!(err, DesignError::BendingCapacityExceeded { mu } if mu > 0.5));
        assert!(bending_reinforcement_or_nan(0.2, 0.3, 1000.0, 20.0, 435.0, &opts()).is_nan());
    }

    #[test]
    fn test_beam_bending_below_limit() {
        let section = BeamSection::symmetric(0.3, 0.5, 0.05);
        let r = section
            .design_bending(100.0, &Concrete::new(30.0), &Reinforcement::new(500.0), &opts())
            .unwrap();
        assert_eq!(r.asc, 0.0);
        assert!(r.eps_sc.is_none());
        assert!(r.alpha < 0.45);
    }

    #[test]
    fn test_beam_bending_needs_compression_steel() {
        let o = opts();
        let section = BeamSection::symmetric(0.3, 0.5, 0.05);
        let concrete = Concrete::new(30.0);
        let steel = Reinforcement::new(500.0);
        let r = design_beam_bending(&section, 500.0, &concrete, &steel, &o).unwrap();

        assert!(r.asc > 0.0);
        assert_relative_eq!(r.alpha, 0.45, epsilon = 1e-9);
        let eps_sc = r.eps_sc.unwrap();
        assert_relative_eq!(eps_sc, (0.45 - 0.05 / 0.45) / 0.45 * 3.5, epsilon = 1e-9);

        // Tension steel is the limit design plus the compression couple
        let d = section.d();
        let fcd = concrete.fcd(&o);
        let med_max = 0.36 * (1.0 - 0.18) * 0.3 * d * d * fcd * 1000.0;
        let limit = bending_reinforcement(0.3, d, med_max, fcd, steel.fyd(&o), &o).unwrap();
        assert_relative_eq!(r.ast, limit.ast + r.asc, epsilon = 1e-9);
    }

    #[test]
    fn test_strut_capacity_cot_symmetry() {
        let o = opts();
        let a = strut_capacity(0.3, 0.45, 30.0, 2.0, &o);
        let b = strut_capacity(0.3, 0.45, 30.0, 0.5, &o);
        assert_relative_eq!(a, b, epsilon = 1e-9);
        // 0.3 * 0.405 * 0.528 * 20 * 1000 / 2.5
        assert_relative_eq!(a, 0.3 * 0.405 * 0.528 * 20.0 * 1000.0 / 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_shear_reinforcement_round_trip() {
        let o = opts();
        let r = shear_reinforcement(0.3, 0.45, 30.0, 500.0, 2.5, 200.0, &o).unwrap();
        assert!(r.asw_s > 0.0);
        let vrd = shear_resistance(0.3, 0.45, 30.0, 500.0, 2.5, r.asw_s, &o);
        assert_relative_eq!(vrd, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shear_struts_crush() {
        let o = opts();
        let err = shear_reinforcement(0.2, 0.3, 20.0, 500.0, 2.5, 5000.0, &o).unwrap_err();
        assert!(matches!(err, DesignError::StrutCapacityExceeded { .. }));
        assert!(shear_reinforcement_or_nan(0.2, 0.3, 20.0, 500.0, 2.5, 5000.0, &o).is_nan());
    }

    #[test]
    fn test_concrete_shear_resistance() {
        let o = opts();
        let v = concrete_shear_resistance(0.3, 0.45, 30.0, 0.01, &o);
        let k = 1.0 + (0.2_f64 / 0.45).sqrt();
        assert_relative_eq!(
            v.vrd_min,
            35.0 * k.powf(1.5) * 30.0_f64.sqrt() * 0.3 * 0.45,
            epsilon = 1e-9
        );
        assert_relative_eq!(v.vrd, v.vrd_min.max(v.vrd_c), epsilon = 1e-12);

        // k is capped at 2 for shallow members
        let shallow = concrete_shear_resistance(0.3, 0.1, 30.0, 0.01, &o);
        assert_relative_eq!(
            shallow.vrd_min,
            35.0 * 2.0_f64.powf(1.5) * 30.0_f64.sqrt() * 0.3 * 0.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_beam_shear_uses_effective_depth() {
        let o = opts();
        let section = BeamSection::symmetric(0.3, 0.5, 0.05);
        let via_section = design_beam_shear(
            &section,
            150.0,
            2.0,
            &Concrete::new(25.0),
            &Reinforcement::new(500.0),
            &o,
        )
        .unwrap();
        let direct = shear_reinforcement(0.3, 0.45, 25.0, 500.0, 2.0, 150.0, &o).unwrap();
        assert_relative_eq!(via_section.asw_s, direct.asw_s, epsilon = 1e-12);
        assert_relative_eq!(via_section.vrd_max, direct.vrd_max, epsilon = 1e-9);
    }
}
