// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! AST for design scripts

use serde::Serialize;

/// A parsed design script.
#[derive(Debug, Clone, Serialize)]
pub struct Script {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, Serialize)]
pub enum Stmt {
    /// `import name;` — checked against the forbidden-module list, otherwise
    /// a no-op since the whole catalog is in scope.
    Import(String),
    /// `let name = expr;`
    Let { name: String, value: Expr },
    /// `output name = expr;` — always exported.
    Output { name: String, value: Expr },
    /// `build { ... }` — bindings inside take precedence as exports.
    Build(Vec<Stmt>),
}

#[derive(Debug, Clone, Serialize)]
pub enum Expr {
    Number(f64),
    Str(String),
    Bool(bool),
    Vector(Vec<Expr>),
    Ident(String),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Arg>,
    },
    Method {
        receiver: Box<Expr>,
        name: String,
        args: Vec<Arg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// A call argument, positional or named.
#[derive(Debug, Clone, Serialize)]
pub struct Arg {
    pub name: Option<String>,
    pub value: Expr,
}
