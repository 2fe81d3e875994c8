// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Binary STL export and measurement

use crate::geometry::Solid;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use stl_io::{Normal, Triangle, Vertex, write_stl};

/// Write a solid as binary STL. Facet normals come from the polygon planes.
pub fn export_stl(solid: &Solid, path: &Path) -> Result<()> {
    let mut triangles = Vec::<Triangle>::with_capacity(solid.triangle_count());
    for poly in &solid.polygons {
        let n = poly.plane.normal;
        for [a, b, c] in poly.triangles() {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [a, b, c].map(|v| {
                    Vertex::new([v.pos.x as f32, v.pos.y as f32, v.pos.z as f32])
                }),
            });
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_stl(&mut writer, triangles.iter())
        .with_context(|| format!("Failed to write STL to {}", path.display()))?;
    Ok(())
}

/// Measurement summary of an STL file, serialized to JSON by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct MeasureReport {
    pub path: String,
    pub bbox: [f64; 6],
    pub center: [f64; 3],
    pub volume: f64,
    pub triangles: usize,
}

/// Read an STL file and report bounding box, bbox center and enclosed
/// volume. Volume assumes a closed, outward-oriented mesh.
pub fn measure_stl(path: &Path) -> Result<MeasureReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mesh = stl_io::read_stl(&mut reader)
        .with_context(|| format!("Failed to read STL from {}", path.display()))?;

    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for v in &mesh.vertices {
        for axis in 0..3 {
            let c = f64::from(v[axis]);
            min[axis] = min[axis].min(c);
            max[axis] = max[axis].max(c);
        }
    }
    if mesh.vertices.is_empty() {
        min = [0.0; 3];
        max = [0.0; 3];
    }

    let mut volume = 0.0;
    for face in &mesh.faces {
        let [a, b, c] = face.vertices.map(|i| {
            let v = &mesh.vertices[i];
            [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])]
        });
        volume += a[0] * (b[1] * c[2] - b[2] * c[1])
            + a[1] * (b[2] * c[0] - b[0] * c[2])
            + a[2] * (b[0] * c[1] - b[1] * c[0]);
    }
    volume /= 6.0;

    Ok(MeasureReport {
        path: path.display().to_string(),
        bbox: [min[0], min[1], min[2], max[0], max[1], max[2]],
        center: [
            (min[0] + max[0]) / 2.0,
            (min[1] + max[1]) / 2.0,
            (min[2] + max[2]) / 2.0,
        ],
        volume,
        triangles: mesh.faces.len(),
    })
}
