// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! O-ring glands and gasket channels

use crate::geometry::{profile, Solid, DEFAULT_SEGMENTS};

/// Circular face-seal O-ring gland pocket, returned as a solid to cut.
///
/// * `diameter` — nominal O-ring centerline diameter
/// * `cross_section` — cord diameter
/// * `squeeze` — target compression ratio (typically 0.1–0.3)
/// * `groove_depth_factor` — fraction of the cord used as groove depth
pub fn o_ring_gland_face(
    diameter: f64,
    cross_section: f64,
    squeeze: f64,
    groove_depth_factor: f64,
) -> Solid {
    let groove_depth = cross_section * groove_depth_factor;
    let inner_d = diameter - cross_section * (1.0 - squeeze);
    let outer_d = diameter + cross_section * (1.0 - squeeze);

    let outer = Solid::cylinder(outer_d / 2.0, 0.0, groove_depth, DEFAULT_SEGMENTS);
    let inner = Solid::cylinder(inner_d / 2.0, -0.01, groove_depth + 0.01, DEFAULT_SEGMENTS);
    outer.difference(&inner)
}

pub const DEFAULT_SQUEEZE: f64 = 0.15;
pub const DEFAULT_GROOVE_DEPTH_FACTOR: f64 = 0.85;

/// Rectangular gasket channel, returned as a solid to cut. The channel path
/// follows a rounded rectangle; `channel_width` and `depth` parametrize the
/// cut and the corner radius is kept below the channel width.
pub fn gasket_channel_rect(
    length: f64,
    width: f64,
    channel_width: f64,
    depth: f64,
    corner_radius: f64,
) -> Solid {
    let r_outer = corner_radius.max(0.0).min(channel_width * 0.9);
    let outer = Solid::extrude(
        &profile::rounded_rectangle(length, width, r_outer, 8),
        0.0,
        depth,
    );
    // Channels wider than half the footprint leave no inner island; the cut
    // is the full pocket.
    let inner_l = length - 2.0 * channel_width;
    let inner_w = width - 2.0 * channel_width;
    if inner_l <= 0.0 || inner_w <= 0.0 {
        return outer;
    }
    let inner = Solid::extrude(
        &profile::rounded_rectangle(inner_l, inner_w, (r_outer - channel_width).max(0.0), 8),
        -0.01,
        depth + 0.01,
    );
    outer.difference(&inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_gland_ring_volume() {
        let gland = o_ring_gland_face(60.0, 2.5, DEFAULT_SQUEEZE, DEFAULT_GROOVE_DEPTH_FACTOR);
        let depth = 2.5 * 0.85;
        let inner_r = (60.0 - 2.5 * 0.85) / 2.0;
        let outer_r = (60.0 + 2.5 * 0.85) / 2.0;
        let expected = PI * (outer_r * outer_r - inner_r * inner_r) * depth;
        assert_relative_eq!(gland.volume(), expected, max_relative = 0.02);
    }

    #[test]
    fn test_gland_cuts_into_panel() {
        let panel = Solid::cuboid(80.0, 80.0, 4.0, false);
        let gland = o_ring_gland_face(60.0, 2.5, 0.15, 0.85);
        let cut = panel.difference(&gland);
        assert!(cut.volume() > 0.0);
        assert!(cut.volume() < panel.volume());
    }

    #[test]
    fn test_wide_channel_fills_the_footprint() {
        // channel_width >= width / 2 leaves no inner island; the cut is the
        // whole slab minus the rounded corners.
        let pocket = gasket_channel_rect(100.0, 10.0, 6.0, 2.0, 1.0);
        assert!(pocket.volume() > 0.0);
        assert_relative_eq!(pocket.volume(), 100.0 * 10.0 * 2.0, max_relative = 0.01);
    }

    #[test]
    fn test_gasket_channel_is_a_ring() {
        let channel = gasket_channel_rect(100.0, 60.0, 4.0, 2.0, 1.0);
        assert!(channel.volume() > 0.0);
        // Much smaller than the filled outer footprint.
        assert!(channel.volume() < 100.0 * 60.0 * 2.0 * 0.3);
        let size = channel.bounding_box().size();
        assert_relative_eq!(size.x, 100.0, epsilon = 1e-6);
        assert_relative_eq!(size.y, 60.0, epsilon = 1e-6);
    }
}
