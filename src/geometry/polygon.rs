// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Planar polygons from which solids are composed

use super::plane::Plane;
use super::vertex::Vertex;

/// A convex planar polygon with a cached supporting plane.
///
/// Winding is counter-clockwise when viewed from the outside of the solid,
/// so the plane normal points outward.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon from at least three vertices. The supporting plane
    /// is derived from the first three.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon needs at least 3 vertices");
        let plane = Plane::from_points(
            &vertices[0].pos,
            &vertices[1].pos,
            &vertices[2].pos,
        );
        Self { vertices, plane }
    }

    /// Reverse winding and flip normals, turning the polygon inside out.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Fan-triangulate into vertex triples. Valid because polygons are
    /// convex by construction.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> {
        (1..self.vertices.len().saturating_sub(1)).map(move |i| {
            [
                &self.vertices[0],
                &self.vertices[i],
                &self.vertices[i + 1],
            ]
        })
    }
}
