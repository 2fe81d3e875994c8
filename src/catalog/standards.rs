// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Hole locations for common mounting standards

use super::params::ParamError;

/// XY hole locations for a NEMA17 motor mount: 4 holes on a 31 mm square,
/// centered on the shaft. Coordinates in mm.
pub fn pattern_nema17(origin: [f64; 3]) -> Vec<[f64; 3]> {
    let half = 31.0 / 2.0;
    let [ox, oy, oz] = origin;
    vec![
        [ox - half, oy - half, oz],
        [ox + half, oy - half, oz],
        [ox + half, oy + half, oz],
        [ox - half, oy + half, oz],
    ]
}

/// Hole locations for VESA 75 or VESA 100 mounts.
pub fn pattern_vesa(size_mm: u32, origin: [f64; 3]) -> Result<Vec<[f64; 3]>, ParamError> {
    if size_mm != 75 && size_mm != 100 {
        return Err(ParamError::InvalidVesaSize);
    }
    let half = f64::from(size_mm) / 2.0;
    let [ox, oy, oz] = origin;
    Ok(vec![
        [ox - half, oy - half, oz],
        [ox + half, oy - half, oz],
        [ox + half, oy + half, oz],
        [ox - half, oy + half, oz],
    ])
}

/// `n` equally spaced hole locations on a circle of `radius`.
pub fn bolt_circle(n: u32, radius: f64, start_angle_deg: f64, origin: [f64; 3]) -> Vec<[f64; 3]> {
    if n == 0 {
        return Vec::new();
    }
    let step = 360.0 / f64::from(n);
    let [ox, oy, oz] = origin;
    (0..n)
        .map(|i| {
            let ang = (start_angle_deg + step * f64::from(i)).to_radians();
            [ox + radius * ang.cos(), oy + radius * ang.sin(), oz]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nema17_four_holes_on_31mm_square() {
        let pts = pattern_nema17([0.0, 0.0, 0.0]);
        assert_eq!(pts.len(), 4);
        for p in &pts {
            assert_relative_eq!(p[0].abs(), 15.5);
            assert_relative_eq!(p[1].abs(), 15.5);
        }
    }

    #[test]
    fn test_vesa_sizes() {
        assert_eq!(pattern_vesa(75, [0.0; 3]).unwrap().len(), 4);
        assert_eq!(pattern_vesa(100, [0.0; 3]).unwrap().len(), 4);
        let err = pattern_vesa(80, [0.0; 3]).unwrap_err();
        assert!(err.to_string().contains("VESA size must be 75 or 100 mm"));
    }

    #[test]
    fn test_bolt_circle_count_and_radius() {
        let pts = bolt_circle(6, 20.0, 0.0, [0.0; 3]);
        assert_eq!(pts.len(), 6);
        for p in &pts {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert_relative_eq!(r, 20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bolt_circle_respects_origin() {
        let pts = bolt_circle(4, 10.0, 0.0, [5.0, -3.0, 2.0]);
        assert_relative_eq!(pts[0][0], 15.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0][1], -3.0, epsilon = 1e-9);
        assert_relative_eq!(pts[0][2], 2.0, epsilon = 1e-9);
    }
}
