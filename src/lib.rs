// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Partforge
//!
//! A parametric feature library for printable mechanical parts: tubes,
//! enclosures, fastener holes, connector cutouts, seals and vents, built on
//! a BSP-based CSG kernel, plus a guarded runner for generated design
//! scripts that exports named solids to STL.

pub mod catalog;
pub mod geometry;
pub mod io;
pub mod script;

pub use catalog::{
    Enclosure, EndStyle, Fit, HeadType, HoleSpec, ParamError, RectEnclosureParams, ScrewSize,
    TubeParams,
};
pub use geometry::{analyze, Solid, SolidStats};
pub use io::{export_stl, measure_stl, MeasureReport};
pub use script::{parse_script, run_script, ScriptError, Value};

use anyhow::Result;

/// Evaluate design script source to its named outputs, with the same import
/// guard the runner applies.
pub fn evaluate(source: &str) -> Result<Vec<(String, Value)>> {
    let script = parse_script(source)?;
    script::check_imports(&script)?;
    Ok(script::eval_script(&script)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_script() {
        let outputs = evaluate("let plate = box(20, 20, 3);").unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, "plate");
    }
}
