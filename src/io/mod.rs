// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Mesh file I/O

mod stl;

pub use stl::{export_stl, measure_stl, MeasureReport};
