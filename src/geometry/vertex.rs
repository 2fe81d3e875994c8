// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Polygon vertices with position and normal

use nalgebra::{Point3, Vector3};

/// A vertex of a polygon, holding position and normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub const fn new(pos: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { pos, normal }
    }

    /// Flip the vertex normal in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// Normals are interpolated as well; they are not re-normalized here
    /// because BSP splitting only needs a consistent orientation.
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Vertex {
        let pos = self.pos + (other.pos - self.pos) * t;
        let normal = self.normal + (other.normal - self.normal) * t;
        Vertex::new(pos, normal)
    }
}
