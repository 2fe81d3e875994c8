// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Discrete clearance fits for printed parts

use super::params::ParamError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_NOZZLE_DIAMETER_MM: f64 = 0.4;
pub const DEFAULT_LAYER_HEIGHT_MM: f64 = 0.2;

/// Named clearance allowances in millimeters, applied additively to nominal
/// dimensions such as hole diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Fit {
    Tight,
    #[default]
    Snap,
    Slide,
}

impl Fit {
    /// Additive diametral clearance in millimeters.
    pub const fn clearance_mm(self) -> f64 {
        match self {
            Fit::Tight => 0.10,
            Fit::Snap => 0.20,
            Fit::Slide => 0.40,
        }
    }
}

impl FromStr for Fit {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TIGHT" => Ok(Fit::Tight),
            "SNAP" => Ok(Fit::Snap),
            "SLIDE" => Ok(Fit::Slide),
            other => Err(ParamError::UnknownName {
                kind: "fit",
                value: other.to_string(),
            }),
        }
    }
}

/// Expand a nominal hole diameter by the selected fit. Printed clearance
/// holes grow; the shaft stays nominal.
pub fn apply_fit_to_hole(nominal_diameter_mm: f64, fit: Fit) -> f64 {
    nominal_diameter_mm + fit.clearance_mm()
}

/// Minimum practical FDM wall thickness: perimeter count times nozzle
/// diameter.
pub fn min_printable_wall_mm(nozzle_mm: f64, line_count: u32) -> f64 {
    nozzle_mm * f64::from(line_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_clearances_ordered() {
        assert!(Fit::Tight.clearance_mm() < Fit::Snap.clearance_mm());
        assert!(Fit::Snap.clearance_mm() < Fit::Slide.clearance_mm());
    }

    #[test]
    fn test_apply_fit() {
        assert_relative_eq!(apply_fit_to_hole(3.4, Fit::Snap), 3.6);
    }

    #[test]
    fn test_min_printable_wall() {
        assert_relative_eq!(min_printable_wall_mm(DEFAULT_NOZZLE_DIAMETER_MM, 2), 0.8);
    }
}
