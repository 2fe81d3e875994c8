// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Convex 2D profiles used as extrusion cross-sections
//!
//! Profiles are counter-clockwise point loops in the XY plane. Keeping them
//! convex lets caps stay single polygons and keeps BSP splitting exact.

use nalgebra::Point2;
use std::f64::consts::PI;

/// Circle of `radius` approximated by `segments` chords.
pub fn circle(radius: f64, segments: u32) -> Vec<Point2<f64>> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let a = 2.0 * PI * (i as f64) / (segments as f64);
            Point2::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}

/// Axis-aligned rectangle centered on the origin.
pub fn rectangle(length: f64, width: f64) -> Vec<Point2<f64>> {
    let hl = length / 2.0;
    let hw = width / 2.0;
    vec![
        Point2::new(-hl, -hw),
        Point2::new(hl, -hw),
        Point2::new(hl, hw),
        Point2::new(-hl, hw),
    ]
}

/// Rectangle with quarter-circle corners of `corner_radius`, centered on the
/// origin. The radius is clamped to half the shorter side.
pub fn rounded_rectangle(
    length: f64,
    width: f64,
    corner_radius: f64,
    corner_segments: u32,
) -> Vec<Point2<f64>> {
    let r = corner_radius.min(length.min(width) / 2.0).max(0.0);
    if r <= 0.0 {
        return rectangle(length, width);
    }
    let corner_segments = corner_segments.max(1);
    let hl = length / 2.0 - r;
    let hw = width / 2.0 - r;

    // Corner centers in CCW order starting from the +x/+y quadrant.
    let centers = [
        (hl, hw, 0.0),
        (-hl, hw, PI / 2.0),
        (-hl, -hw, PI),
        (hl, -hw, 3.0 * PI / 2.0),
    ];

    let mut pts = Vec::with_capacity(4 * (corner_segments as usize + 1));
    for (cx, cy, start) in centers {
        for i in 0..=corner_segments {
            let a = start + (PI / 2.0) * (i as f64) / (corner_segments as f64);
            pts.push(Point2::new(cx + r * a.cos(), cy + r * a.sin()));
        }
    }
    pts
}

/// Stadium (racetrack/slot) profile: overall `length` along X, `width`
/// along Y, semicircular ends. Requires `length > width`; callers fall back
/// to a circle otherwise.
pub fn stadium(length: f64, width: f64, segments_per_end: u32) -> Vec<Point2<f64>> {
    let r = width / 2.0;
    let half_straight = (length - width) / 2.0;
    let n = segments_per_end.max(2);

    let mut pts = Vec::with_capacity(2 * (n as usize + 1));
    // Right end cap, from -90° to +90°.
    for i in 0..=n {
        let a = -PI / 2.0 + PI * (i as f64) / (n as f64);
        pts.push(Point2::new(half_straight + r * a.cos(), r * a.sin()));
    }
    // Left end cap, from +90° to +270°.
    for i in 0..=n {
        let a = PI / 2.0 + PI * (i as f64) / (n as f64);
        pts.push(Point2::new(-half_straight + r * a.cos(), r * a.sin()));
    }
    pts
}

/// Signed area of a profile; positive means counter-clockwise winding.
pub fn signed_area(profile: &[Point2<f64>]) -> f64 {
    let n = profile.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = &profile[i];
        let b = &profile[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}
