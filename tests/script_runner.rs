// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! End-to-end tests for the guarded script runner

use anyhow::Result;
use partforge::{io, script};
use std::fs;
use tempfile::TempDir;

fn run(source: &str) -> Result<(TempDir, Vec<std::path::PathBuf>)> {
    let dir = TempDir::new()?;
    let script_path = dir.path().join("design.pf");
    fs::write(&script_path, source)?;
    let out_dir = dir.path().join("out");
    let written = script::run_script(&script_path, &out_dir)?;
    Ok((dir, written))
}

#[test]
fn test_exports_one_stl_per_output() -> Result<()> {
    let src = r#"
        let plate = box(60, 40, 4, true);
        let post = cylinder(radius = 4, height = 20);
        output plate = plate;
        output post = post;
    "#;
    let (_dir, written) = run(src)?;
    assert_eq!(written.len(), 2);
    for path in &written {
        let metadata = fs::metadata(path)?;
        assert!(metadata.len() > 84, "STL too small: {}", path.display());
    }
    assert!(written[0].ends_with("plate.stl"));
    assert!(written[1].ends_with("post.stl"));
    Ok(())
}

#[test]
fn test_build_block_outputs_discovered() -> Result<()> {
    let src = r#"
        let scratch = box(5, 5, 5);
        build {
            let bracket = box(40, 40, 4).screw_holes(nema17(), size = "M3");
        }
    "#;
    let (_dir, written) = run(src)?;
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("bracket.stl"));
    Ok(())
}

#[test]
fn test_assembly_expands_to_base_and_lid() -> Result<()> {
    let src = "let case = rect_enclosure(100, 60, 40, 2.4, 10);\n";
    let (_dir, written) = run(src)?;
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["case_base.stl", "case_lid.stl"]);
    Ok(())
}

#[test]
fn test_repeated_output_name_exports_once() -> Result<()> {
    let src = "output lid = box(10, 10, 10, true);\noutput lid = box(5, 5, 5, true);\n";
    let (_dir, written) = run(src)?;
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("lid.stl"));
    // Last definition wins.
    let report = io::measure_stl(&written[0])?;
    assert!((report.volume - 125.0).abs() < 1.0);
    Ok(())
}

#[test]
fn test_forbidden_import_fails() -> Result<()> {
    let src = "import geometry;\nlet p = box(10, 10, 10);\n";
    let err = run(src).unwrap_err();
    assert!(err.to_string().contains("forbidden import: geometry"));
    Ok(())
}

#[test]
fn test_parse_error_fails() -> Result<()> {
    let err = run("let = box(10, 10, 10);\n").unwrap_err();
    assert!(err.to_string().contains("parse"));
    Ok(())
}

#[test]
fn test_validation_error_fails() -> Result<()> {
    // Wall thicker than the radius is rejected by the parameter record.
    let err = run("let t = tube(10, 6, 40);\n").unwrap_err();
    assert!(err.to_string().contains("wall_thickness"));
    Ok(())
}

#[test]
fn test_no_outputs_fails() -> Result<()> {
    let err = run("let n = 42;\n").unwrap_err();
    assert!(err.to_string().contains("no outputs"));
    Ok(())
}

#[test]
fn test_output_names_sanitized() -> Result<()> {
    let src = "output part_v2 = box(10, 10, 10);\n";
    let (_dir, written) = run(src)?;
    assert!(written[0].ends_with("part_v2.stl"));
    Ok(())
}

#[test]
fn test_exported_stl_measures_back() -> Result<()> {
    let src = "output cube = box(10, 10, 10, true);\n";
    let (_dir, written) = run(src)?;
    let report = io::measure_stl(&written[0])?;
    assert!((report.volume - 1000.0).abs() < 1.0);
    assert!((report.bbox[0] + 5.0).abs() < 1e-3);
    assert!((report.bbox[3] - 5.0).abs() < 1e-3);
    assert!(report.center.iter().all(|c| c.abs() < 1e-3));
    assert_eq!(report.triangles, 12);
    Ok(())
}

#[test]
fn test_drilled_tube_end_to_end() -> Result<()> {
    let src = r#"
        import fasteners;
        let body = tube(40, 3, 60, "one_end_closed", 3);
        let mounts = bolt_circle(4, 14, 45, [0, 0, -27]);
        output body = body.screw_holes(mounts, size = "M3", through = false, depth = 6);
    "#;
    let (_dir, written) = run(src)?;
    assert_eq!(written.len(), 1);
    let report = io::measure_stl(&written[0])?;
    assert!(report.volume > 0.0);
    // 40 mm outer diameter, 60 mm tall, centered about the origin.
    assert!((report.bbox[5] - report.bbox[2] - 60.0).abs() < 0.1);
    Ok(())
}
