// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Validated parameter records for the feature catalog
//!
//! Every record is checked at construction and never mutated afterwards.
//! Error messages name the violated constraint so generated-script authors
//! can correct the call site.

use super::fit::Fit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parameter validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field} must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("wall_thickness must be < outer_diameter / 2")]
    WallTooThick,
    #[error("depth must be provided for blind holes")]
    MissingBlindDepth,
    #[error("lid_height must be < total height")]
    LidTooTall,
    #[error("VESA size must be 75 or 100 mm")]
    InvalidVesaSize,
    #[error("no heat-set insert data for {0}")]
    UnknownInsertSize(ScrewSize),
    #[error("unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ParamError> {
    if value < min || value > max || !value.is_finite() {
        return Err(ParamError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Metric screw sizes covered by the clearance tables.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrewSize {
    M2,
    M2_5,
    M3,
    M4,
    M5,
    M6,
}

impl fmt::Display for ScrewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScrewSize::M2 => "M2",
            ScrewSize::M2_5 => "M2_5",
            ScrewSize::M3 => "M3",
            ScrewSize::M4 => "M4",
            ScrewSize::M5 => "M5",
            ScrewSize::M6 => "M6",
        };
        f.write_str(s)
    }
}

impl FromStr for ScrewSize {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "M2" => Ok(ScrewSize::M2),
            "M2_5" | "M2.5" => Ok(ScrewSize::M2_5),
            "M3" => Ok(ScrewSize::M3),
            "M4" => Ok(ScrewSize::M4),
            "M5" => Ok(ScrewSize::M5),
            "M6" => Ok(ScrewSize::M6),
            other => Err(ParamError::UnknownName {
                kind: "screw size",
                value: other.to_string(),
            }),
        }
    }
}

/// Tube end closure style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EndStyle {
    #[default]
    Open,
    OneEndClosed,
    BothClosed,
}

impl FromStr for EndStyle {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(EndStyle::Open),
            "one_end_closed" => Ok(EndStyle::OneEndClosed),
            "both_closed" => Ok(EndStyle::BothClosed),
            other => Err(ParamError::UnknownName {
                kind: "end style",
                value: other.to_string(),
            }),
        }
    }
}

/// Screw head style for counterbore/countersink recesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadType {
    Flat,
    Pan,
    Socket,
}

impl FromStr for HeadType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(HeadType::Flat),
            "pan" => Ok(HeadType::Pan),
            "socket" => Ok(HeadType::Socket),
            other => Err(ParamError::UnknownName {
                kind: "head type",
                value: other.to_string(),
            }),
        }
    }
}

/// Parameters for [`crate::catalog::tube`]. Dimensions in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    pub outer_diameter: f64,
    pub wall_thickness: f64,
    pub height: f64,
    pub end_style: EndStyle,
    pub end_cap_thickness: f64,
}

impl TubeParams {
    pub fn new(
        outer_diameter: f64,
        wall_thickness: f64,
        height: f64,
        end_style: EndStyle,
        end_cap_thickness: f64,
    ) -> Result<Self, ParamError> {
        check_range("outer_diameter", outer_diameter, 2.0, 1000.0)?;
        check_range("wall_thickness", wall_thickness, 0.8, 100.0)?;
        check_range("height", height, 1.0, 2000.0)?;
        check_range("end_cap_thickness", end_cap_thickness, 0.8, 20.0)?;
        if wall_thickness * 2.0 >= outer_diameter {
            return Err(ParamError::WallTooThick);
        }
        Ok(Self {
            outer_diameter,
            wall_thickness,
            height,
            end_style,
            end_cap_thickness,
        })
    }

    /// Open-ended tube with the default 2 mm cap thickness reserve.
    pub fn open(outer_diameter: f64, wall_thickness: f64, height: f64) -> Result<Self, ParamError> {
        Self::new(outer_diameter, wall_thickness, height, EndStyle::Open, 2.0)
    }
}

/// Screw hole specification for [`crate::catalog::apply_screw_holes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub size: ScrewSize,
    pub fit: Fit,
    pub through: bool,
    pub depth: Option<f64>,
    pub counterbore: bool,
    pub countersink: bool,
    pub head_type: Option<HeadType>,
}

impl HoleSpec {
    pub fn new(
        size: ScrewSize,
        fit: Fit,
        through: bool,
        depth: Option<f64>,
    ) -> Result<Self, ParamError> {
        if !through && !depth.map(|d| d > 0.0).unwrap_or(false) {
            return Err(ParamError::MissingBlindDepth);
        }
        Ok(Self {
            size,
            fit,
            through,
            depth,
            counterbore: false,
            countersink: false,
            head_type: None,
        })
    }

    pub fn through(size: ScrewSize, fit: Fit) -> Self {
        Self {
            size,
            fit,
            through: true,
            depth: None,
            counterbore: false,
            countersink: false,
            head_type: None,
        }
    }

    pub fn blind(size: ScrewSize, fit: Fit, depth: f64) -> Result<Self, ParamError> {
        Self::new(size, fit, false, Some(depth))
    }

    pub fn with_counterbore(mut self, head_type: HeadType) -> Self {
        self.counterbore = true;
        self.head_type = Some(head_type);
        self
    }

    pub fn with_countersink(mut self) -> Self {
        self.countersink = true;
        self.head_type = Some(HeadType::Flat);
        self
    }
}

/// Parameters for the rectangular base-and-lid enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectEnclosureParams {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub lid_height: f64,
    pub lid_clearance: f64,
    pub corner_radius: f64,
}

impl RectEnclosureParams {
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        wall_thickness: f64,
        lid_height: f64,
        lid_clearance: f64,
    ) -> Result<Self, ParamError> {
        check_range("length", length, 20.0, 1000.0)?;
        check_range("width", width, 20.0, 1000.0)?;
        check_range("height", height, 10.0, 1000.0)?;
        check_range("wall_thickness", wall_thickness, 1.2, 10.0)?;
        check_range("lid_height", lid_height, 2.0, 30.0)?;
        check_range("lid_clearance", lid_clearance, 0.05, 1.0)?;
        if lid_height >= height {
            return Err(ParamError::LidTooTall);
        }
        Ok(Self {
            length,
            width,
            height,
            wall_thickness,
            lid_height,
            lid_clearance,
            corner_radius: 0.0,
        })
    }

    /// Round the vertical corners. The radius is clamped later to keep a
    /// printable wall; negative values are rejected here.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Result<Self, ParamError> {
        check_range("corner_radius", corner_radius, 0.0, 100.0)?;
        self.corner_radius = corner_radius;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tube_wall_too_thick_message() {
        let err = TubeParams::open(10.0, 6.0, 20.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("wall_thickness"), "{msg}");
        assert!(msg.contains("< outer_diameter / 2"), "{msg}");
    }

    #[test]
    fn test_tube_range_check() {
        let err = TubeParams::open(1.0, 0.4, 20.0).unwrap_err();
        assert!(matches!(err, ParamError::OutOfRange { field: "outer_diameter", .. }));
    }

    #[test]
    fn test_blind_hole_requires_depth() {
        let err = HoleSpec::new(ScrewSize::M3, Fit::Snap, false, None).unwrap_err();
        assert!(err.to_string().contains("depth must be provided for blind holes"));

        let err = HoleSpec::new(ScrewSize::M3, Fit::Snap, false, Some(-1.0)).unwrap_err();
        assert_eq!(err, ParamError::MissingBlindDepth);

        assert!(HoleSpec::blind(ScrewSize::M3, Fit::Snap, 4.0).is_ok());
    }

    #[test]
    fn test_lid_must_be_shorter_than_body() {
        let err =
            RectEnclosureParams::new(100.0, 60.0, 20.0, 2.4, 20.0, 0.2).unwrap_err();
        assert!(err.to_string().contains("lid_height must be < total height"));
    }

    #[test]
    fn test_screw_size_parsing() {
        assert_eq!("M2_5".parse::<ScrewSize>().unwrap(), ScrewSize::M2_5);
        assert_eq!("m4".parse::<ScrewSize>().unwrap(), ScrewSize::M4);
        assert!("M7".parse::<ScrewSize>().is_err());
    }
}
