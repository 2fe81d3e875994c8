// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Screw clearance holes with optional counterbore/countersink recesses

use super::fit::apply_fit_to_hole;
use super::params::{HeadType, HoleSpec, ScrewSize};
use crate::geometry::{Solid, DEFAULT_SEGMENTS};

/// Close/normal ISO clearance hole diameters in mm, before fit adjustment.
pub fn iso_clearance_diameter(size: ScrewSize) -> f64 {
    match size {
        ScrewSize::M2 => 2.4,
        ScrewSize::M2_5 => 3.0,
        ScrewSize::M3 => 3.4,
        ScrewSize::M4 => 4.5,
        ScrewSize::M5 => 5.5,
        ScrewSize::M6 => 6.6,
    }
}

/// Approximate head diameter/height for common cap screws.
#[derive(Debug, Clone, Copy)]
pub struct HeadDims {
    pub diameter: f64,
    pub height: f64,
}

/// Head dimensions are tabulated for the sizes the library is normally used
/// with; other sizes fall back to a plain hole.
pub fn head_dims(size: ScrewSize, head_type: HeadType) -> Option<HeadDims> {
    match (size, head_type) {
        (ScrewSize::M3, HeadType::Pan) => Some(HeadDims {
            diameter: 6.0,
            height: 2.4,
        }),
        (ScrewSize::M3, HeadType::Socket) => Some(HeadDims {
            diameter: 5.5,
            height: 3.0,
        }),
        (ScrewSize::M3, HeadType::Flat) => Some(HeadDims {
            diameter: 6.0,
            height: 0.0,
        }),
        (ScrewSize::M4, HeadType::Pan) => Some(HeadDims {
            diameter: 8.0,
            height: 3.1,
        }),
        (ScrewSize::M4, HeadType::Socket) => Some(HeadDims {
            diameter: 7.0,
            height: 4.0,
        }),
        (ScrewSize::M4, HeadType::Flat) => Some(HeadDims {
            diameter: 8.5,
            height: 0.0,
        }),
        _ => None,
    }
}

/// Included countersink angle for flat heads.
pub const FLAT_HEAD_ANGLE_DEG: f64 = 90.0;

/// Clearance hole diameter for a spec: table lookup plus fit allowance.
pub fn hole_diameter(spec: &HoleSpec) -> f64 {
    apply_fit_to_hole(iso_clearance_diameter(spec.size), spec.fit)
}

/// Drill screw holes into `target` at the given XYZ locations. Each location
/// is the point on the surface the screw head seats against; through holes
/// pass the whole part, blind holes descend `depth` from the location plane.
pub fn apply_screw_holes(target: &Solid, locations: &[[f64; 3]], spec: &HoleSpec) -> Solid {
    let hole_d = hole_diameter(spec);
    let bbox = target.bounding_box();
    if bbox.is_empty() {
        return target.clone();
    }
    // Overshoot so cuts clear the faces.
    let z_bottom = bbox.min.z - 1.0;
    let z_top = bbox.max.z + 1.0;

    let head = spec
        .head_type
        .and_then(|h| head_dims(spec.size, h))
        .filter(|_| spec.counterbore || spec.countersink);

    let mut result = target.clone();
    for &[x, y, z] in locations {
        let shank_top = z;
        let shank_bottom = match spec.depth {
            Some(depth) if !spec.through => z - depth,
            _ => z_bottom,
        };

        let mut cutter = Solid::cylinder(hole_d / 2.0, shank_bottom, shank_top, DEFAULT_SEGMENTS);

        if spec.countersink && spec.head_type == Some(HeadType::Flat) {
            // Conical recess; 90 degree included angle gives a depth of half
            // the diametral difference.
            let csk_d = head.map(|h| h.diameter).unwrap_or(hole_d * 2.0);
            let half_angle = (FLAT_HEAD_ANGLE_DEG / 2.0).to_radians();
            let csk_depth = (csk_d - hole_d) / 2.0 / half_angle.tan();
            let cone = Solid::cone_frustum(
                hole_d / 2.0,
                csk_d / 2.0,
                z - csk_depth,
                z,
                DEFAULT_SEGMENTS,
            );
            let clear = Solid::cylinder(csk_d / 2.0, z, z_top, DEFAULT_SEGMENTS);
            cutter = cutter.union(&cone).union(&clear);
        } else if spec.counterbore && spec.head_type != Some(HeadType::Flat) {
            if let Some(head) = head {
                let cbore_d = head.diameter + 0.2;
                let cbore_h = head.height + 0.3;
                let recess =
                    Solid::cylinder(cbore_d / 2.0, z - cbore_h, z_top, DEFAULT_SEGMENTS);
                cutter = cutter.union(&recess);
            }
        }

        result = result.difference(&cutter.translate(x, y, 0.0));
    }

    result
}
