// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Cylindrical tubes with configurable wall thickness and end closures

use super::params::{EndStyle, TubeParams};
use crate::geometry::{Solid, DEFAULT_SEGMENTS};

/// Create a cylindrical tube. Geometry is centered on the origin with Z up;
/// the height spans symmetrically about z = 0.
pub fn tube(params: &TubeParams) -> Solid {
    let outer_radius = params.outer_diameter / 2.0;
    let inner_radius = (outer_radius - params.wall_thickness).max(0.0);
    let half = params.height / 2.0;

    let body = Solid::cylinder(outer_radius, -half, half, DEFAULT_SEGMENTS);
    if inner_radius <= 0.0 {
        return body;
    }

    // Extend through-cuts slightly past the faces so the boolean is clean.
    let eps = 0.01;
    let void = match params.end_style {
        EndStyle::Open => {
            Solid::cylinder(inner_radius, -half - eps, half + eps, DEFAULT_SEGMENTS)
        }
        EndStyle::OneEndClosed => {
            let z0 = -half + params.end_cap_thickness;
            if half - z0 <= 0.0 {
                return body;
            }
            Solid::cylinder(inner_radius, z0, half + eps, DEFAULT_SEGMENTS)
        }
        EndStyle::BothClosed => {
            let z0 = -half + params.end_cap_thickness;
            let z1 = half - params.end_cap_thickness;
            if z1 - z0 <= 0.0 {
                return body;
            }
            Solid::cylinder(inner_radius, z0, z1, DEFAULT_SEGMENTS)
        }
    };

    body.difference(&void)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::params::TubeParams;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_open_tube_volume() {
        let params = TubeParams::open(20.0, 2.4, 40.0).unwrap();
        let solid = tube(&params);
        let expected = PI * (100.0 - (10.0 - 2.4) * (10.0 - 2.4)) * 40.0;
        assert_relative_eq!(solid.volume(), expected, max_relative = 0.02);
    }

    #[test]
    fn test_closed_tube_is_heavier_than_open() {
        let open = tube(&TubeParams::open(20.0, 2.4, 40.0).unwrap());
        let closed = tube(
            &TubeParams::new(20.0, 2.4, 40.0, EndStyle::BothClosed, 2.0).unwrap(),
        );
        let one = tube(
            &TubeParams::new(20.0, 2.4, 40.0, EndStyle::OneEndClosed, 2.0).unwrap(),
        );
        assert!(closed.volume() > one.volume());
        assert!(one.volume() > open.volume());
    }

    #[test]
    fn test_thick_wall_becomes_solid_rod() {
        // Wall consumes the full radius: no inner void is cut.
        let params = TubeParams::new(4.0, 1.9, 10.0, EndStyle::Open, 2.0).unwrap();
        let solid = tube(&params);
        assert_relative_eq!(solid.volume(), PI * 4.0 * 10.0, max_relative = 0.02);
    }
}
