// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Duplicate-and-fuse placement patterns

use crate::geometry::Solid;

fn fuse(instances: impl IntoIterator<Item = Solid>) -> Solid {
    instances
        .into_iter()
        .fold(Solid::new(), |acc, s| acc.union(&s))
}

/// Duplicate `solid` `n` times along the vector (dx, dy, dz) and fuse. The
/// first instance stays at the original position.
pub fn linear_array(solid: &Solid, n: u32, dx: f64, dy: f64, dz: f64) -> Solid {
    fuse((0..n).map(|i| {
        let i = f64::from(i);
        solid.translate(dx * i, dy * i, dz * i)
    }))
}

/// nx × ny grid of `solid` spaced by (dx, dy), fused. If `centered`, the
/// grid is centered around the original position.
pub fn grid_array(solid: &Solid, nx: u32, ny: u32, dx: f64, dy: f64, centered: bool) -> Solid {
    let x0 = if centered {
        -(f64::from(nx.saturating_sub(1)) * dx) / 2.0
    } else {
        0.0
    };
    let y0 = if centered {
        -(f64::from(ny.saturating_sub(1)) * dy) / 2.0
    } else {
        0.0
    };
    fuse((0..nx).flat_map(|ix| {
        (0..ny).map(move |iy| (ix, iy))
    })
    .map(|(ix, iy)| {
        solid.translate(x0 + f64::from(ix) * dx, y0 + f64::from(iy) * dy, 0.0)
    }))
}

/// Distribute `solid` around a circle or arc of `radius`, fused. A full
/// 360° span spaces instances by 360/n; a partial arc spans end to end.
pub fn circular_array(
    solid: &Solid,
    n: u32,
    radius: f64,
    start_angle_deg: f64,
    arc_span_deg: f64,
) -> Solid {
    if n == 0 {
        return Solid::new();
    }
    let step = if arc_span_deg < 360.0 {
        arc_span_deg / f64::from(n.saturating_sub(1).max(1))
    } else {
        360.0 / f64::from(n)
    };
    fuse((0..n).map(|i| {
        let ang = (start_angle_deg + step * f64::from(i)).to_radians();
        solid.translate(radius * ang.cos(), radius * ang.sin(), 0.0)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn peg() -> Solid {
        Solid::cylinder(3.0, 0.0, 10.0, 32)
    }

    #[test]
    fn test_linear_array_volume() {
        let line = linear_array(&peg(), 3, 8.0, 0.0, 0.0);
        assert_relative_eq!(line.volume(), 3.0 * peg().volume(), max_relative = 1e-6);
    }

    #[test]
    fn test_grid_array_centered_bbox() {
        let grid = grid_array(&peg(), 2, 2, 12.0, 12.0, true);
        let bbox = grid.bounding_box();
        assert_relative_eq!(bbox.min.x, -9.0, epsilon = 1e-6);
        assert_relative_eq!(bbox.max.x, 9.0, epsilon = 1e-6);
        assert_relative_eq!(grid.volume(), 4.0 * peg().volume(), max_relative = 1e-6);
    }

    #[test]
    fn test_circular_array_full_circle() {
        let ring = circular_array(&peg(), 6, 20.0, 0.0, 360.0);
        assert_relative_eq!(ring.volume(), 6.0 * peg().volume(), max_relative = 1e-6);
    }

    #[test]
    fn test_circular_array_partial_arc_spans_endpoints() {
        let arc = circular_array(&peg(), 3, 20.0, 0.0, 90.0);
        let bbox = arc.bounding_box();
        // Instances at 0°, 45°, 90°: x reaches 20 + r and y reaches 20 + r.
        assert_relative_eq!(bbox.max.x, 23.0, epsilon = 1e-6);
        assert_relative_eq!(bbox.max.y, 23.0, epsilon = 1e-6);
    }
}
