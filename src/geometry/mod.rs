// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Geometry substrate - polygon solids, BSP booleans, and measurement
//!
//! The catalog never manipulates polygons directly; it composes the
//! operations exposed here.

mod analytics;
mod bbox;
mod bsp;
mod plane;
mod polygon;
pub mod profile;
mod solid;
mod vertex;

pub use analytics::{analyze, SolidStats};
pub use bbox::BoundingBox;
pub use plane::Plane;
pub use polygon::Polygon;
pub use solid::Solid;
pub use vertex::Vertex;

/// Default chord count for tessellated round features.
pub const DEFAULT_SEGMENTS: u32 = 64;
