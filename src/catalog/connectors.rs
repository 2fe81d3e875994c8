// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Panel cutout solids for common connectors
//!
//! Each function returns a solid meant to be subtracted from a panel; the
//! depth equals the panel thickness and openings are oversized by the
//! clearance on every side.

use crate::geometry::{profile, Solid, DEFAULT_SEGMENTS};

pub const DEFAULT_USB_C_CLEARANCE: f64 = 0.2;
pub const DEFAULT_RJ45_CLEARANCE: f64 = 0.3;
pub const DEFAULT_DC_BARREL_CLEARANCE: f64 = 0.2;

/// USB-C receptacle opening: 9.0 × 6.0 mm with 0.8 mm corner radii.
pub fn cutout_usb_c(panel_thickness: f64, clearance: f64) -> Solid {
    let w = 9.0 + 2.0 * clearance;
    let h = 6.0 + 2.0 * clearance;
    Solid::extrude(
        &profile::rounded_rectangle(w, h, 0.8, 8),
        0.0,
        panel_thickness,
    )
}

/// RJ45 jack opening: 14.5 × 12.5 mm.
pub fn cutout_rj45(panel_thickness: f64, clearance: f64) -> Solid {
    let w = 14.5 + 2.0 * clearance;
    let h = 12.5 + 2.0 * clearance;
    Solid::cuboid(w, h, panel_thickness, false)
}

/// Panel-mount DC barrel jack opening: 8 mm round hole.
pub fn cutout_dc_barrel(panel_thickness: f64, clearance: f64) -> Solid {
    let d = 8.0 + 2.0 * clearance;
    Solid::cylinder(d / 2.0, 0.0, panel_thickness, DEFAULT_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_usb_c_cutout_dimensions() {
        let cut = cutout_usb_c(4.0, DEFAULT_USB_C_CLEARANCE);
        let size = cut.bounding_box().size();
        assert_relative_eq!(size.x, 9.4, epsilon = 1e-6);
        assert_relative_eq!(size.y, 6.4, epsilon = 1e-6);
        assert_relative_eq!(size.z, 4.0, epsilon = 1e-6);
        // Rounded corners shave material off the plain box.
        assert!(cut.volume() < 9.4 * 6.4 * 4.0);
        assert!(cut.volume() > 0.0);
    }

    #[test]
    fn test_rj45_cutout_dimensions() {
        let cut = cutout_rj45(4.0, DEFAULT_RJ45_CLEARANCE);
        let size = cut.bounding_box().size();
        assert_relative_eq!(size.x, 15.1, epsilon = 1e-6);
        assert_relative_eq!(size.y, 13.1, epsilon = 1e-6);
    }

    #[test]
    fn test_dc_barrel_cutout_diameter() {
        let cut = cutout_dc_barrel(4.0, DEFAULT_DC_BARREL_CLEARANCE);
        let size = cut.bounding_box().size();
        assert_relative_eq!(size.x, 8.4, epsilon = 1e-3);
        assert_relative_eq!(size.y, 8.4, epsilon = 1e-3);
    }

    #[test]
    fn test_cutouts_subtract_from_panel() {
        let panel = Solid::cuboid(120.0, 60.0, 4.0, false);
        let panel = panel
            .difference(&cutout_usb_c(4.0, 0.2).translate(-30.0, 0.0, 0.0))
            .difference(&cutout_rj45(4.0, 0.3))
            .difference(&cutout_dc_barrel(4.0, 0.2).translate(30.0, 0.0, 0.0));
        assert!(panel.volume() > 0.0);
        assert!(panel.volume() < 120.0 * 60.0 * 4.0);
    }
}
