// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Oriented planes and polygon splitting for BSP construction

use super::polygon::Polygon;
use super::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Tolerance used when classifying points against a plane.
pub const EPSILON: f64 = 1e-5;

pub const COPLANAR: i8 = 0;
pub const FRONT: i8 = 1;
pub const BACK: i8 = 2;
pub const SPANNING: i8 = 3;

/// A plane in Hessian normal form: `normal · p = w`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub w: f64,
}

impl Plane {
    pub fn from_normal(normal: Vector3<f64>, w: f64) -> Self {
        Self {
            normal: normal.normalize(),
            w,
        }
    }

    /// Plane through three points; normal follows the right-hand rule.
    pub fn from_points(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Self {
        let cross = (b - a).cross(&(c - a));
        if cross.norm_squared() < EPSILON * EPSILON {
            // Degenerate triangle; callers filter these polygons out.
            return Self {
                normal: Vector3::z(),
                w: 0.0,
            };
        }
        let normal = cross.normalize();
        let w = normal.dot(&a.coords);
        Self { normal, w }
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Classify a point as COPLANAR, FRONT, or BACK.
    pub fn orient_point(&self, p: &Point3<f64>) -> i8 {
        let t = self.normal.dot(&p.coords) - self.w;
        if t < -EPSILON {
            BACK
        } else if t > EPSILON {
            FRONT
        } else {
            COPLANAR
        }
    }

    /// Classify another plane by its normal direction relative to ours.
    pub fn orient_plane(&self, other: &Plane) -> i8 {
        if self.normal.dot(&other.normal) > 0.0 {
            FRONT
        } else {
            BACK
        }
    }

    /// Split `polygon` by this plane into coplanar-front, coplanar-back,
    /// front, and back pieces. Spanning polygons are cut along the plane
    /// with interpolated vertices.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
    ) -> (Vec<Polygon>, Vec<Polygon>, Vec<Polygon>, Vec<Polygon>) {
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        let types: Vec<i8> = polygon
            .vertices
            .iter()
            .map(|v| self.orient_point(&v.pos))
            .collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if self.orient_plane(&polygon.plane) == FRONT {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let mut f: Vec<Vertex> = Vec::with_capacity(polygon.vertices.len() + 1);
                let mut b: Vec<Vertex> = Vec::with_capacity(polygon.vertices.len() + 1);
                let n = polygon.vertices.len();
                for i in 0..n {
                    let j = (i + 1) % n;
                    let ti = types[i];
                    let tj = types[j];
                    let vi = &polygon.vertices[i];
                    let vj = &polygon.vertices[j];
                    if ti != BACK {
                        f.push(vi.clone());
                    }
                    if ti != FRONT {
                        b.push(vi.clone());
                    }
                    if (ti | tj) == SPANNING {
                        let denom = self.normal.dot(&(vj.pos - vi.pos));
                        if denom.abs() > EPSILON {
                            let t = (self.w - self.normal.dot(&vi.pos.coords)) / denom;
                            let v = vi.interpolate(vj, t);
                            f.push(v.clone());
                            b.push(v);
                        }
                    }
                }
                if f.len() >= 3 {
                    front.push(Polygon::new(f));
                }
                if b.len() >= 3 {
                    back.push(Polygon::new(b));
                }
            }
        }

        (coplanar_front, coplanar_back, front, back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at_z(z: f64) -> Polygon {
        let n = Vector3::z();
        Polygon::new(vec![
            Vertex::new(Point3::new(-1.0, -1.0, z), n),
            Vertex::new(Point3::new(1.0, -1.0, z), n),
            Vertex::new(Point3::new(1.0, 1.0, z), n),
            Vertex::new(Point3::new(-1.0, 1.0, z), n),
        ])
    }

    #[test]
    fn test_orient_point() {
        let plane = Plane::from_normal(Vector3::z(), 0.0);
        assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, 1.0)), FRONT);
        assert_eq!(plane.orient_point(&Point3::new(0.0, 0.0, -1.0)), BACK);
        assert_eq!(plane.orient_point(&Point3::new(5.0, 5.0, 0.0)), COPLANAR);
    }

    #[test]
    fn test_split_spanning_polygon() {
        // Vertical plane x = 0 cuts the square into two quads.
        let plane = Plane::from_normal(Vector3::x(), 0.0);
        let (cf, cb, front, back) = plane.split_polygon(&square_at_z(0.0));
        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);
        assert!(front[0].vertices.iter().all(|v| v.pos.x >= -EPSILON));
        assert!(back[0].vertices.iter().all(|v| v.pos.x <= EPSILON));
    }

    #[test]
    fn test_split_coplanar_polygon() {
        let plane = Plane::from_normal(Vector3::z(), 0.0);
        let (cf, cb, front, back) = plane.split_polygon(&square_at_z(0.0));
        assert_eq!(cf.len(), 1);
        assert!(cb.is_empty() && front.is_empty() && back.is_empty());
    }
}
