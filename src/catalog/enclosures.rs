// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Two-part enclosures: shelled base plus mating lid

use super::params::RectEnclosureParams;
use crate::geometry::{profile, Solid, DEFAULT_SEGMENTS};

const CORNER_SEGMENTS: u32 = 8;
const CUT_EPS: f64 = 0.01;

/// A two-part enclosure. The parts carry stable names so exporters can write
/// one file per solid.
#[derive(Debug, Clone)]
pub struct Enclosure {
    pub base: Solid,
    pub lid: Solid,
}

impl Enclosure {
    /// Named parts in export order.
    pub fn parts(&self) -> [(&'static str, &Solid); 2] {
        [("base", &self.base), ("lid", &self.lid)]
    }
}

/// Rectangular base-and-lid enclosure with a slip-fit mating lip.
///
/// The base is shelled open-top with a standing lip ring around its rim; the
/// lid is a shelled cap whose cavity accepts the lip with `lid_clearance`
/// per side. Assembled height equals `params.height`. Corner radii are
/// clamped to the printable maximum for the footprint.
pub fn rectangular_enclosure_base_and_lid(params: &RectEnclosureParams) -> Enclosure {
    let l = params.length;
    let w = params.width;
    let t = params.wall_thickness;
    let clearance = params.lid_clearance;
    let lid_h = params.lid_height;
    let base_h = params.height - lid_h;

    let max_r = (l.min(w) / 2.0 - 0.1).max(0.0);
    let cr = params.corner_radius.min(max_r);
    let inner_cr = (cr - t).max(0.0);

    // Open-top shelled base body.
    let outer = Solid::extrude(
        &profile::rounded_rectangle(l, w, cr, CORNER_SEGMENTS),
        0.0,
        base_h,
    );
    let body = if l - 2.0 * t > 0.0 && w - 2.0 * t > 0.0 {
        let cavity = Solid::extrude(
            &profile::rounded_rectangle(l - 2.0 * t, w - 2.0 * t, inner_cr, CORNER_SEGMENTS),
            t,
            base_h + CUT_EPS,
        );
        outer.difference(&cavity)
    } else {
        outer
    };

    // Standing lip ring on the rim. Its outer footprint is inset by the wall
    // plus clearance so the lid wall slides over it.
    let lip_h = (lid_h * 0.6).min((lid_h - 1.0).max(2.0));
    let lip_l = l - 2.0 * (t + clearance);
    let lip_w = w - 2.0 * (t + clearance);
    let lip_cr = (cr - t - clearance).max(0.0);
    let base = if lip_l > 0.0 && lip_w > 0.0 {
        let lip_outer = Solid::extrude(
            &profile::rounded_rectangle(lip_l, lip_w, lip_cr, CORNER_SEGMENTS),
            base_h,
            base_h + lip_h,
        );
        // Walls too thick to hollow the lip leave it solid.
        let lip = if lip_l > 2.0 * t && lip_w > 2.0 * t {
            let lip_inner = Solid::extrude(
                &profile::rounded_rectangle(
                    lip_l - 2.0 * t,
                    lip_w - 2.0 * t,
                    (lip_cr - t).max(0.0),
                    CORNER_SEGMENTS,
                ),
                base_h - CUT_EPS,
                base_h + lip_h + CUT_EPS,
            );
            lip_outer.difference(&lip_inner)
        } else {
            lip_outer
        };
        body.union(&lip)
    } else {
        body
    };

    // Lid cap: shelled open-bottom, cavity deep enough to seat the lip.
    let lid_outer = Solid::extrude(
        &profile::rounded_rectangle(l, w, cr, CORNER_SEGMENTS),
        0.0,
        lid_h,
    );
    let lid = if l - 2.0 * t > 0.0 && w - 2.0 * t > 0.0 {
        let recess_depth = (lid_h - t).max(lip_h);
        let recess = Solid::extrude(
            &profile::rounded_rectangle(l - 2.0 * t, w - 2.0 * t, inner_cr, CORNER_SEGMENTS),
            -CUT_EPS,
            recess_depth,
        );
        lid_outer.difference(&recess)
    } else {
        lid_outer
    };

    Enclosure { base, lid }
}

/// Oval (capsule-profile) enclosure. Falls back to a circular footprint when
/// the length does not exceed the width, since the straight section would
/// vanish.
pub fn elliptical_enclosure(
    length: f64,
    width: f64,
    height: f64,
    wall_thickness: f64,
    lid_height: f64,
) -> Enclosure {
    let t = wall_thickness;
    let outer_profile = capsule_profile(length, width);

    let base_outer = Solid::extrude(&outer_profile, 0.0, height);
    let lid_outer = Solid::extrude(&outer_profile, 0.0, lid_height);

    // Walls thicker than the half-width leave the parts solid.
    if width - 2.0 * t <= 0.0 {
        return Enclosure {
            base: base_outer,
            lid: lid_outer,
        };
    }
    let inner_profile = capsule_profile(length - 2.0 * t, width - 2.0 * t);

    let base_cavity = Solid::extrude(&inner_profile, t, height + CUT_EPS);
    let base = base_outer.difference(&base_cavity);

    let lid_cavity = Solid::extrude(&inner_profile, -CUT_EPS, lid_height - t);
    let lid = lid_outer.difference(&lid_cavity);

    Enclosure { base, lid }
}

fn capsule_profile(length: f64, width: f64) -> Vec<nalgebra::Point2<f64>> {
    if length <= width {
        profile::circle(width / 2.0, DEFAULT_SEGMENTS)
    } else {
        profile::stadium(length, width, DEFAULT_SEGMENTS / 2)
    }
}

/// D-shaped enclosure: a cylinder fused with a flat-sided box. The flat face
/// spans the full diameter and extends `flat_width` in -Y.
pub fn d_shaped_enclosure(
    diameter: f64,
    flat_width: f64,
    height: f64,
    wall_thickness: f64,
    lid_height: f64,
) -> Enclosure {
    let t = wall_thickness;

    let base_outer = d_body(diameter, flat_width, 0.0, height);
    let base_cavity = d_body(
        diameter - 2.0 * t,
        (flat_width - t).max(0.0),
        t,
        height + CUT_EPS,
    );
    let base = base_outer.difference(&base_cavity);

    let lid_outer = d_body(diameter, flat_width, 0.0, lid_height);
    let lid_cavity = d_body(
        diameter - 2.0 * t,
        (flat_width - t).max(0.0),
        -CUT_EPS,
        lid_height - t,
    );
    let lid = lid_outer.difference(&lid_cavity);

    Enclosure { base, lid }
}

fn d_body(diameter: f64, flat_width: f64, z0: f64, z1: f64) -> Solid {
    if diameter <= 0.0 {
        return Solid::new();
    }
    let r = diameter / 2.0;
    let round = Solid::cylinder(r, z0, z1, DEFAULT_SEGMENTS);
    if flat_width <= 0.0 {
        return round;
    }
    let flat = Solid::extrude(&profile::rectangle(diameter, flat_width), z0, z1)
        .translate(0.0, -flat_width / 2.0, 0.0);
    round.union(&flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::params::RectEnclosureParams;
    use approx::assert_relative_eq;

    fn params() -> RectEnclosureParams {
        RectEnclosureParams::new(100.0, 60.0, 40.0, 2.4, 10.0, 0.2).unwrap()
    }

    #[test]
    fn test_rect_enclosure_part_heights() {
        let enc = rectangular_enclosure_base_and_lid(&params());
        let base_bbox = enc.base.bounding_box();
        let lid_bbox = enc.lid.bounding_box();
        // Base spans its body plus the standing lip; lid is the cap height.
        let lip_h = (10.0f64 * 0.6).min(9.0f64.max(2.0));
        assert_relative_eq!(base_bbox.size().z, 30.0 + lip_h, epsilon = 1e-6);
        assert_relative_eq!(lid_bbox.size().z, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rect_enclosure_is_hollow() {
        let enc = rectangular_enclosure_base_and_lid(&params());
        let solid_block = 100.0 * 60.0 * 30.0;
        assert!(enc.base.volume() > 0.0);
        assert!(enc.base.volume() < solid_block * 0.5);
    }

    #[test]
    fn test_rounded_corners_shrink_volume() {
        let square = rectangular_enclosure_base_and_lid(&params());
        let rounded_params = params().with_corner_radius(8.0).unwrap();
        let rounded = rectangular_enclosure_base_and_lid(&rounded_params);
        assert!(rounded.base.volume() < square.base.volume());
        assert!(rounded.base.volume() > 0.0);
    }

    #[test]
    fn test_elliptical_fallback_to_circle() {
        let enc = elliptical_enclosure(40.0, 60.0, 30.0, 2.0, 8.0);
        let size = enc.base.bounding_box().size();
        // Circular footprint of the wider dimension.
        assert_relative_eq!(size.x, 60.0, epsilon = 1e-3);
        assert_relative_eq!(size.y, 60.0, epsilon = 1e-3);
    }

    #[test]
    fn test_elliptical_capsule_extents() {
        let enc = elliptical_enclosure(80.0, 40.0, 30.0, 2.0, 8.0);
        let size = enc.base.bounding_box().size();
        assert_relative_eq!(size.x, 80.0, epsilon = 1e-3);
        assert_relative_eq!(size.y, 40.0, epsilon = 1e-3);
        assert!(enc.lid.volume() > 0.0);
    }

    #[test]
    fn test_d_shape_extents() {
        let enc = d_shaped_enclosure(50.0, 20.0, 30.0, 2.0, 8.0);
        let bbox = enc.base.bounding_box();
        assert_relative_eq!(bbox.size().x, 50.0, epsilon = 1e-3);
        // Circle dominates in Y; the flat stays inside its radius.
        assert_relative_eq!(bbox.max.y, 25.0, epsilon = 1e-3);
        assert_relative_eq!(bbox.min.y, -25.0, epsilon = 1e-3);
    }
}
