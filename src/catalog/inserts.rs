// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Bosses for heat-set threaded inserts

use super::params::{ParamError, ScrewSize};
use crate::geometry::{Solid, DEFAULT_SEGMENTS};

/// Heat-set insert stock dimensions: outer diameter and length in mm.
#[derive(Debug, Clone, Copy)]
pub struct InsertDims {
    pub outer_d: f64,
    pub length: f64,
}

pub fn heat_set_insert(size: ScrewSize) -> Result<InsertDims, ParamError> {
    match size {
        ScrewSize::M2 => Ok(InsertDims {
            outer_d: 3.0,
            length: 3.0,
        }),
        ScrewSize::M2_5 => Ok(InsertDims {
            outer_d: 3.5,
            length: 4.0,
        }),
        ScrewSize::M3 => Ok(InsertDims {
            outer_d: 4.6,
            length: 5.0,
        }),
        ScrewSize::M4 => Ok(InsertDims {
            outer_d: 6.0,
            length: 6.0,
        }),
        other => Err(ParamError::UnknownInsertSize(other)),
    }
}

/// Cylindrical boss for a heat-set insert, sitting on z = 0.
///
/// * `wall` — radial wall thickness around the insert OD
/// * `through_hole` — drill through, or leave 0.8 mm of floor
///
/// The bore is undersized by 0.2 mm for a heat press fit, and a small
/// relief groove near the top eases insertion.
pub fn insert_boss(
    size: ScrewSize,
    height: f64,
    wall: f64,
    through_hole: bool,
) -> Result<Solid, ParamError> {
    let insert = heat_set_insert(size)?;
    let od = insert.outer_d + 2.0 * wall;
    let hole_d = insert.outer_d - 0.2;

    let boss = Solid::cylinder(od / 2.0, 0.0, height, DEFAULT_SEGMENTS);
    let bore = if through_hole {
        Solid::cylinder(hole_d / 2.0, -0.5, height + 0.5, DEFAULT_SEGMENTS)
    } else {
        Solid::cylinder(hole_d / 2.0, 0.8, height + 0.5, DEFAULT_SEGMENTS)
    };
    let mut boss = boss.difference(&bore);

    let groove_outer = Solid::cylinder(od / 2.0 + 0.01, height * 0.6, height * 0.6 + 0.6,
        DEFAULT_SEGMENTS);
    let groove_inner = Solid::cylinder(
        od / 2.0 - 0.3,
        height * 0.6 - 0.01,
        height * 0.6 + 0.61,
        DEFAULT_SEGMENTS,
    );
    let groove = groove_outer.difference(&groove_inner);
    boss = boss.difference(&groove);

    Ok(boss)
}
