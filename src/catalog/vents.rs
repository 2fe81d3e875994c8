// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Vented panels with angled louvres

use crate::geometry::Solid;

/// Rectangular plate with tilted ventilation slots, self-supporting for FDM
/// printing. Slots run along X and repeat along Y at `slot_pitch`; the plate
/// is returned unmodified when no slot fits.
pub fn louvre_panel(
    length: f64,
    width: f64,
    thickness: f64,
    slot_width: f64,
    slot_pitch: f64,
    tilt_deg: f64,
) -> Solid {
    let plate = Solid::cuboid(length, width, thickness, false);

    let n_slots = ((width - slot_pitch) / slot_pitch).floor() as i64;
    if n_slots <= 0 {
        return plate;
    }

    let y0 = -((n_slots - 1) as f64) * slot_pitch / 2.0;
    let mut result = plate;
    for i in 0..n_slots {
        let y = y0 + (i as f64) * slot_pitch;
        // Slot cut deeper than the plate so the tilted box clears both faces.
        let slot = Solid::cuboid(length * 0.8, slot_width, 3.0 * thickness, true)
            .rotate_x(tilt_deg)
            .translate(0.0, y, thickness / 2.0);
        result = result.difference(&slot);
    }
    result
}
