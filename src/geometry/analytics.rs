// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Solid measurement and statistics

use super::Solid;
use serde::{Deserialize, Serialize};

/// Measured properties of a solid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolidStats {
    /// Enclosed volume in mm³
    pub volume: f64,
    /// Surface area in mm²
    pub surface_area: f64,
    /// Bounding box [min_x, min_y, min_z, max_x, max_y, max_z]
    pub bbox: [f64; 6],
    /// Center of mass [x, y, z]
    pub centroid: [f64; 3],
    pub vertex_count: usize,
    pub triangle_count: usize,
}

/// Measure a solid.
pub fn analyze(solid: &Solid) -> SolidStats {
    let bbox = solid.bounding_box();
    let bbox = if bbox.is_empty() {
        [0.0; 6]
    } else {
        [
            bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z,
        ]
    };
    let centroid = solid.centroid();

    SolidStats {
        volume: solid.volume(),
        surface_area: solid.surface_area(),
        bbox,
        centroid: [centroid.x, centroid.y, centroid.z],
        vertex_count: solid.vertex_count(),
        triangle_count: solid.triangle_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_analyze_cube() {
        let stats = analyze(&Solid::cuboid(10.0, 10.0, 10.0, true));
        assert_relative_eq!(stats.volume, 1000.0, max_relative = 1e-9);
        assert_relative_eq!(stats.surface_area, 600.0, max_relative = 1e-9);
        assert_eq!(stats.bbox[0], -5.0);
        assert_eq!(stats.bbox[5], 5.0);
        assert_eq!(stats.triangle_count, 12);
    }

    #[test]
    fn test_analyze_empty() {
        let stats = analyze(&Solid::new());
        assert_eq!(stats.volume, 0.0);
        assert_eq!(stats.bbox, [0.0; 6]);
    }
}
