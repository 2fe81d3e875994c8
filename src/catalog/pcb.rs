// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! PCB mounting features: pockets and standoffs

use crate::geometry::{Solid, DEFAULT_SEGMENTS};

/// Rectangular PCB pocket in XY, extruded in +Z. The pocket is oversized by
/// `clearance` on each side; depth defaults to the board thickness.
pub fn pcb_pocket(
    board_length: f64,
    board_width: f64,
    thickness: f64,
    clearance: f64,
    depth: Option<f64>,
) -> Solid {
    let depth = depth.unwrap_or(thickness);
    let length = board_length + 2.0 * clearance;
    let width = board_width + 2.0 * clearance;
    Solid::cuboid(length, width, depth, false)
}

/// Fused drilled standoffs at the given PCB hole locations, sitting on
/// z = 0.
pub fn pcb_standoffs(
    hole_locations_xy: &[[f64; 2]],
    height: f64,
    outer_d: f64,
    hole_d: f64,
) -> Solid {
    let mut result = Solid::new();
    for &[x, y] in hole_locations_xy {
        let post = Solid::cylinder(outer_d / 2.0, 0.0, height, DEFAULT_SEGMENTS);
        let bore = Solid::cylinder(hole_d / 2.0, -0.5, height + 0.5, DEFAULT_SEGMENTS);
        result = result.union(&post.difference(&bore).translate(x, y, 0.0));
    }
    result
}

/// Defaults matching common M3 standoff stock.
pub const DEFAULT_STANDOFF_OUTER_D: f64 = 6.0;
pub const DEFAULT_STANDOFF_HOLE_D: f64 = 3.2;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_pocket_oversized_by_clearance() {
        let pocket = pcb_pocket(50.0, 30.0, 1.6, 0.2, None);
        let bbox = pocket.bounding_box();
        assert_relative_eq!(bbox.size().x, 50.4, epsilon = 1e-9);
        assert_relative_eq!(bbox.size().y, 30.4, epsilon = 1e-9);
        assert_relative_eq!(bbox.size().z, 1.6, epsilon = 1e-9);
    }

    #[test]
    fn test_pocket_depth_override() {
        let pocket = pcb_pocket(50.0, 30.0, 1.6, 0.2, Some(3.0));
        assert_relative_eq!(pocket.bounding_box().size().z, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_standoffs_volume() {
        let holes = [[-20.0, -10.0], [20.0, -10.0], [20.0, 10.0], [-20.0, 10.0]];
        let posts = pcb_standoffs(
            &holes,
            6.0,
            DEFAULT_STANDOFF_OUTER_D,
            DEFAULT_STANDOFF_HOLE_D,
        );
        let annulus = PI * (3.0f64.powi(2) - 1.6f64.powi(2));
        assert_relative_eq!(posts.volume(), 4.0 * annulus * 6.0, max_relative = 0.02);
    }
}
