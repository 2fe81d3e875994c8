// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Design script language: parser, evaluator and guarded runner

pub mod ast;
pub mod eval;
pub mod parser;
pub mod runner;

pub use ast::Script;
pub use eval::{eval_script, ScriptError, Value};
pub use parser::parse_script;
pub use runner::{check_imports, run_script};
