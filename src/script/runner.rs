// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Guarded script runner
//!
//! Scripts are untrusted generated code: imports of kernel internals are
//! rejected statically before anything is evaluated, and every failure path
//! surfaces as an error for the CLI to turn into a non-zero exit.

use super::ast::{Script, Stmt};
use super::eval::{eval_script, ScriptError, Value};
use super::parser::parse_script;
use crate::geometry::Solid;
use crate::io::export_stl;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Module names a script may not import. Everything the catalog offers is
/// already in scope; reaching for the kernel directly is always a bug or an
/// escape attempt.
const FORBIDDEN_MODULES: &[&str] = &["geometry", "bsp", "brep", "mesh", "kernel", "occt"];

/// Reject imports of kernel internals before evaluation.
pub fn check_imports(script: &Script) -> Result<(), ScriptError> {
    fn walk(statements: &[Stmt]) -> Result<(), ScriptError> {
        for stmt in statements {
            match stmt {
                Stmt::Import(name) => {
                    let root = name.split('_').next().unwrap_or(name);
                    if FORBIDDEN_MODULES.contains(&name.as_str())
                        || FORBIDDEN_MODULES.contains(&root)
                    {
                        return Err(ScriptError::ForbiddenImport(name.clone()));
                    }
                }
                Stmt::Build(inner) => walk(inner)?,
                _ => {}
            }
        }
        Ok(())
    }
    walk(&script.statements)
}

/// Keep only filename-safe characters; empty names fall back to "part".
fn sanitize_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe.is_empty() {
        "part".to_string()
    } else {
        safe
    }
}

/// Parse, guard, evaluate and export a design script. Returns the STL paths
/// written, one per named output; assemblies expand to `<name>_base` and
/// `<name>_lid`.
pub fn run_script(script_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script: {}", script_path.display()))?;

    let script = parse_script(&source)?;
    check_imports(&script)?;
    let outputs = eval_script(&script)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut written = Vec::new();
    for (name, value) in outputs {
        let solids: Vec<(String, Solid)> = match value {
            Value::Solid(solid) => vec![(sanitize_name(&name), solid)],
            Value::Assembly(assembly) => {
                let base = sanitize_name(&name);
                vec![
                    (format!("{base}_base"), assembly.base),
                    (format!("{base}_lid"), assembly.lid),
                ]
            }
            other => {
                return Err(ScriptError::NotExportable {
                    name,
                    kind: other.kind(),
                }
                .into())
            }
        };
        for (file_name, solid) in solids {
            let path = out_dir.join(format!("{file_name}.stl"));
            export_stl(&solid, &path)
                .with_context(|| format!("Export failed for {}", path.display()))?;
            written.push(path);
        }
    }
    Ok(written)
}
