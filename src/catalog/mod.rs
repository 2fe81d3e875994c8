// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Parametric feature catalog for printable mechanical parts
//!
//! Every generator validates its inputs up front, builds geometry through the
//! CSG kernel, and returns solids in millimeters with deterministic
//! tessellation.

pub mod connectors;
pub mod enclosures;
pub mod fasteners;
pub mod fit;
pub mod inserts;
pub mod params;
pub mod patterns;
pub mod pcb;
pub mod sealing;
pub mod standards;
pub mod tube;
pub mod vents;

pub use connectors::{cutout_dc_barrel, cutout_rj45, cutout_usb_c};
pub use enclosures::{
    d_shaped_enclosure, elliptical_enclosure, rectangular_enclosure_base_and_lid, Enclosure,
};
pub use fasteners::{apply_screw_holes, head_dims, hole_diameter, iso_clearance_diameter, HeadDims};
pub use fit::Fit;
pub use inserts::{heat_set_insert, insert_boss, InsertDims};
pub use params::{
    EndStyle, HeadType, HoleSpec, ParamError, RectEnclosureParams, ScrewSize, TubeParams,
};
pub use patterns::{circular_array, grid_array, linear_array};
pub use pcb::{pcb_pocket, pcb_standoffs};
pub use sealing::{gasket_channel_rect, o_ring_gland_face};
pub use standards::{bolt_circle, pattern_nema17, pattern_vesa};
pub use tube::tube;
pub use vents::louvre_panel;
