// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Solid bodies as closed polygon soups with CSG boolean operations

use super::bbox::BoundingBox;
use super::bsp::Node;
use super::polygon::Polygon;
use super::profile;
use super::vertex::Vertex;
use nalgebra::{Matrix4, Point2, Point3, Rotation3, Vector3};

/// A closed solid bounded by outward-facing convex polygons.
#[derive(Debug, Clone, Default)]
pub struct Solid {
    pub polygons: Vec<Polygon>,
}

impl Solid {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    // ---- primitives -----------------------------------------------------

    /// Extrude a counter-clockwise convex profile from `z0` to `z1`.
    pub fn extrude(profile_pts: &[Point2<f64>], z0: f64, z1: f64) -> Self {
        debug_assert!(profile_pts.len() >= 3);
        debug_assert!(profile::signed_area(profile_pts) > 0.0);
        if z1 <= z0 {
            return Self::new();
        }

        let n = profile_pts.len();
        let mut polygons = Vec::with_capacity(n + 2);

        // Side walls, one quad per profile edge, outward normal.
        for i in 0..n {
            let j = (i + 1) % n;
            let pi = profile_pts[i];
            let pj = profile_pts[j];
            let d = pj - pi;
            let normal = Vector3::new(d.y, -d.x, 0.0).normalize();
            polygons.push(Polygon::new(vec![
                Vertex::new(Point3::new(pi.x, pi.y, z0), normal),
                Vertex::new(Point3::new(pj.x, pj.y, z0), normal),
                Vertex::new(Point3::new(pj.x, pj.y, z1), normal),
                Vertex::new(Point3::new(pi.x, pi.y, z1), normal),
            ]));
        }

        // Bottom cap winds clockwise seen from above, so it faces -Z.
        let down = -Vector3::z();
        polygons.push(Polygon::new(
            profile_pts
                .iter()
                .rev()
                .map(|p| Vertex::new(Point3::new(p.x, p.y, z0), down))
                .collect(),
        ));

        let up = Vector3::z();
        polygons.push(Polygon::new(
            profile_pts
                .iter()
                .map(|p| Vertex::new(Point3::new(p.x, p.y, z1), up))
                .collect(),
        ));

        Self::from_polygons(polygons)
    }

    /// Circular cylinder about the Z axis between `z0` and `z1`.
    pub fn cylinder(radius: f64, z0: f64, z1: f64, segments: u32) -> Self {
        Self::extrude(&profile::circle(radius, segments), z0, z1)
    }

    /// Axis-aligned box centered on the XY origin. With `centered_z` the box
    /// spans ±height/2, otherwise it sits on z = 0.
    pub fn cuboid(length: f64, width: f64, height: f64, centered_z: bool) -> Self {
        let (z0, z1) = if centered_z {
            (-height / 2.0, height / 2.0)
        } else {
            (0.0, height)
        };
        Self::extrude(&profile::rectangle(length, width), z0, z1)
    }

    /// Conical frustum about the Z axis: radius `r0` at `z0`, `r1` at `z1`.
    /// Both radii must be positive.
    pub fn cone_frustum(r0: f64, r1: f64, z0: f64, z1: f64, segments: u32) -> Self {
        debug_assert!(r0 > 0.0 && r1 > 0.0 && z1 > z0);
        let bottom = profile::circle(r0, segments);
        let top = profile::circle(r1, segments);
        let n = bottom.len();
        let mut polygons = Vec::with_capacity(n + 2);

        for i in 0..n {
            let j = (i + 1) % n;
            let a0 = Point3::new(bottom[i].x, bottom[i].y, z0);
            let b0 = Point3::new(bottom[j].x, bottom[j].y, z0);
            let b1 = Point3::new(top[j].x, top[j].y, z1);
            let a1 = Point3::new(top[i].x, top[i].y, z1);
            let normal = (b0 - a0).cross(&(a1 - a0)).normalize();
            polygons.push(Polygon::new(vec![
                Vertex::new(a0, normal),
                Vertex::new(b0, normal),
                Vertex::new(b1, normal),
                Vertex::new(a1, normal),
            ]));
        }

        let down = -Vector3::z();
        polygons.push(Polygon::new(
            bottom
                .iter()
                .rev()
                .map(|p| Vertex::new(Point3::new(p.x, p.y, z0), down))
                .collect(),
        ));
        let up = Vector3::z();
        polygons.push(Polygon::new(
            top.iter()
                .map(|p| Vertex::new(Point3::new(p.x, p.y, z1), up))
                .collect(),
        ));

        Self::from_polygons(polygons)
    }

    // ---- boolean operations ---------------------------------------------

    /// Union of two solids.
    pub fn union(&self, other: &Solid) -> Solid {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        Solid::from_polygons(a.all_polygons())
    }

    /// Subtract `other` from this solid.
    pub fn difference(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);
        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(&b.all_polygons());
        a.invert();
        Solid::from_polygons(a.all_polygons())
    }

    /// Intersection of two solids.
    pub fn intersection(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() {
            return Solid::new();
        }
        let mut a = Node::from_polygons(&self.polygons);
        let mut b = Node::from_polygons(&other.polygons);
        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(&b.all_polygons());
        a.invert();
        Solid::from_polygons(a.all_polygons())
    }

    // ---- transforms ------------------------------------------------------

    /// Apply a rigid transform to every vertex and rebuild polygon planes.
    pub fn transform(&self, matrix: &Matrix4<f64>) -> Solid {
        let polygons = self
            .polygons
            .iter()
            .map(|poly| {
                Polygon::new(
                    poly.vertices
                        .iter()
                        .map(|v| {
                            let pos = matrix.transform_point(&v.pos);
                            let normal = matrix.transform_vector(&v.normal);
                            let normal = if normal.norm_squared() > 0.0 {
                                normal.normalize()
                            } else {
                                normal
                            };
                            Vertex::new(pos, normal)
                        })
                        .collect(),
                )
            })
            .collect();
        Solid::from_polygons(polygons)
    }

    pub fn translate(&self, x: f64, y: f64, z: f64) -> Solid {
        self.transform(&Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    pub fn rotate_x(&self, degrees: f64) -> Solid {
        let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians());
        self.transform(&rot.to_homogeneous())
    }

    pub fn rotate_z(&self, degrees: f64) -> Solid {
        let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians());
        self.transform(&rot.to_homogeneous())
    }

    // ---- measurement -----------------------------------------------------

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        for poly in &self.polygons {
            for v in &poly.vertices {
                bbox.expand_to_include(&v.pos);
            }
        }
        bbox
    }

    /// Enclosed volume via the divergence theorem over the triangulated
    /// boundary. Correct for closed, outward-oriented surfaces.
    pub fn volume(&self) -> f64 {
        let mut total = 0.0;
        for poly in &self.polygons {
            for [a, b, c] in poly.triangles() {
                total += a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords));
            }
        }
        total / 6.0
    }

    pub fn surface_area(&self) -> f64 {
        let mut total = 0.0;
        for poly in &self.polygons {
            for [a, b, c] in poly.triangles() {
                total += (b.pos - a.pos).cross(&(c.pos - a.pos)).norm();
            }
        }
        total / 2.0
    }

    /// Center of mass, assuming uniform density.
    pub fn centroid(&self) -> Point3<f64> {
        let mut weighted = Vector3::zeros();
        let mut volume = 0.0;
        for poly in &self.polygons {
            for [a, b, c] in poly.triangles() {
                // Signed volume of the tetrahedron (origin, a, b, c).
                let v = a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0;
                weighted += (a.pos.coords + b.pos.coords + c.pos.coords) * (v / 4.0);
                volume += v;
            }
        }
        if volume.abs() < 1e-12 {
            return Point3::origin();
        }
        Point3::from(weighted / volume)
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(|p| p.vertices.len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.vertices.len().saturating_sub(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_cuboid_volume_and_area() {
        let cube = Solid::cuboid(10.0, 10.0, 10.0, true);
        assert_relative_eq!(cube.volume(), 1000.0, max_relative = 1e-9);
        assert_relative_eq!(cube.surface_area(), 600.0, max_relative = 1e-9);
    }

    #[test]
    fn test_cylinder_volume_converges() {
        let cyl = Solid::cylinder(5.0, 0.0, 10.0, 96);
        assert_relative_eq!(cyl.volume(), PI * 25.0 * 10.0, max_relative = 0.01);
    }

    #[test]
    fn test_union_of_disjoint_cubes() {
        let a = Solid::cuboid(2.0, 2.0, 2.0, true);
        let b = a.translate(10.0, 0.0, 0.0);
        let fused = a.union(&b);
        assert_relative_eq!(fused.volume(), 16.0, max_relative = 1e-6);
    }

    #[test]
    fn test_union_of_overlapping_cubes() {
        let a = Solid::cuboid(2.0, 2.0, 2.0, true);
        let b = a.translate(1.0, 0.0, 0.0);
        let fused = a.union(&b);
        // 8 + 8 - 4 overlap
        assert_relative_eq!(fused.volume(), 12.0, max_relative = 1e-6);
    }

    #[test]
    fn test_difference_drills_hole() {
        let plate = Solid::cuboid(10.0, 10.0, 4.0, true);
        let hole = Solid::cylinder(2.0, -3.0, 3.0, 64);
        let drilled = plate.difference(&hole);
        let expected = 400.0 - PI * 4.0 * 4.0;
        assert_relative_eq!(drilled.volume(), expected, max_relative = 0.01);
    }

    #[test]
    fn test_intersection_volume() {
        let a = Solid::cuboid(4.0, 4.0, 4.0, true);
        let b = a.translate(2.0, 0.0, 0.0);
        let overlap = a.intersection(&b);
        assert_relative_eq!(overlap.volume(), 32.0, max_relative = 1e-6);
    }

    #[test]
    fn test_centroid_of_translated_cube() {
        let cube = Solid::cuboid(2.0, 2.0, 2.0, true).translate(5.0, 0.0, 0.0);
        let c = cube.centroid();
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_z_preserves_volume() {
        let box_ = Solid::cuboid(6.0, 2.0, 2.0, true);
        let rotated = box_.rotate_z(37.0);
        assert_relative_eq!(rotated.volume(), box_.volume(), max_relative = 1e-9);
    }

    #[test]
    fn test_cone_frustum_volume() {
        let frustum = Solid::cone_frustum(4.0, 2.0, 0.0, 6.0, 96);
        // V = pi*h/3 * (r0^2 + r0*r1 + r1^2)
        let expected = PI * 6.0 / 3.0 * (16.0 + 8.0 + 4.0);
        assert_relative_eq!(frustum.volume(), expected, max_relative = 0.01);
    }
}
