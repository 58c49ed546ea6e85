//! Shell Design Example - Stress point and slab panel

use anyhow::Context;
use serde_json::json;
use shell_design::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Shell Design Example ===\n");

    // Stress state at an integration point (MPa)
    let stress = StressTensor::new(3.0, 2.0, -1.0, 0.3, -0.4, 0.5);
    let principal = principal_stresses(&stress);
    let inv = invariants(&stress);

    println!("Stress Analysis:");
    println!(
        "  Principal: s1={:.4}, s2={:.4}, s3={:.4} MPa",
        principal.max(),
        principal.mid(),
        principal.min()
    );
    for invariant in Invariant::ALL {
        println!("  {:<18} {:>10.4}", invariant.label(), inv.get(invariant));
    }

    // Slab panel: 250 mm thick, 35 mm cover, forces in kN/m and kNm/m
    //
    //     top layer    ----------  +M/z
    //                  |  N/2   |
    //     bottom layer ----------  -M/z
    //
    let section = ShellSection::new(0.25, 0.035);
    let options = DesignOptions::default();
    let panels = [
        ("Midspan", ShellForceState::new(20.0, 5.0, 2.0, 45.0, 30.0, 4.0)),
        ("Support", ShellForceState::new(-10.0, 0.0, 8.0, -60.0, -25.0, -12.0)),
        ("Corner", ShellForceState::new(0.0, 0.0, 0.0, 0.0, 0.0, 20.0)),
    ];

    println!("\nSlab Design (z = {:.3} m):", section.lever_arm());
    let mut report = Vec::new();
    for (name, forces) in &panels {
        let design = design_shell(forces, &section, &options)
            .with_context(|| format!("designing panel {name}"))?;
        println!(
            "  {:<8} top: asx={:>8.2} asy={:>8.2} asc={:>8.2} ({:?})",
            name, design.top.asx, design.top.asy, design.top.asc, design.top.case
        );
        println!(
            "  {:<8} bot: asx={:>8.2} asy={:>8.2} asc={:>8.2} ({:?})",
            "", design.bottom.asx, design.bottom.asy, design.bottom.asc, design.bottom.case
        );
        report.push(json!({ "panel": name, "forces": forces, "design": design }));
    }

    // Beam strip under the support moment
    let beam = BeamSection::symmetric(1.0, 0.25, 0.035);
    let concrete = Concrete::new(30.0);
    let steel = Reinforcement::new(500.0);
    let bending = beam.design_bending(60.0, &concrete, &steel, &options)?;
    let shear = beam.design_shear(80.0, 2.5, &concrete, &steel, &options)?;
    println!(
        "\nBeam Strip: As={:.2} cm2, As2={:.2} cm2, Asw/s={:.2e} m2/m",
        bending.ast, bending.asc, shear.asw_s
    );

    let output = json!({
        "stress": { "tensor": stress, "principal": principal, "invariants": inv },
        "slab": report,
        "beam": { "bending": bending, "shear": shear },
    });
    println!("\n{}", serde_json::to_string_pretty(&output)?);

    println!("\n=== Design Complete ===");
    Ok(())
}
