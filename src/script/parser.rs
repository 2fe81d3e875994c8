// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Design script parser using pest

use super::ast::{Arg, BinOp, Expr, Script, Stmt};
use anyhow::{anyhow, Context, Result};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "script/design.pest"]
struct DesignParser;

/// Parse design script source into an AST.
pub fn parse_script(source: &str) -> Result<Script> {
    let mut pairs =
        DesignParser::parse(Rule::program, source).context("Failed to parse design script")?;

    let mut statements = Vec::new();
    if let Some(program) = pairs.next() {
        for pair in program.into_inner() {
            match pair.as_rule() {
                Rule::statement => statements.push(parse_statement(pair)?),
                Rule::EOI => {}
                _ => {}
            }
        }
    }

    Ok(Script { statements })
}

fn parse_statement(pair: Pair<Rule>) -> Result<Stmt> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| anyhow!("Empty statement"))?;

    match inner.as_rule() {
        Rule::import_stmt => {
            let name = first_ident(inner)?;
            Ok(Stmt::Import(name))
        }
        Rule::let_stmt => {
            let mut parts = inner.into_inner();
            let name = ident_text(parts.next())?;
            let value = parse_expr(parts.next().ok_or_else(|| anyhow!("let without value"))?)?;
            Ok(Stmt::Let { name, value })
        }
        Rule::output_stmt => {
            let mut parts = inner.into_inner();
            let name = ident_text(parts.next())?;
            let value = parse_expr(parts.next().ok_or_else(|| anyhow!("output without value"))?)?;
            Ok(Stmt::Output { name, value })
        }
        Rule::build_block => {
            let statements = inner
                .into_inner()
                .map(parse_statement)
                .collect::<Result<Vec<_>>>()?;
            Ok(Stmt::Build(statements))
        }
        other => Err(anyhow!("Unexpected statement rule: {:?}", other)),
    }
}

fn parse_expr(pair: Pair<Rule>) -> Result<Expr> {
    // expr = term (add_op term)*
    let mut parts = pair.into_inner();
    let mut lhs = parse_term(parts.next().ok_or_else(|| anyhow!("Empty expression"))?)?;
    while let Some(op) = parts.next() {
        let rhs = parse_term(parts.next().ok_or_else(|| anyhow!("Operator without operand"))?)?;
        let op = match op.as_str() {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            other => return Err(anyhow!("Unknown operator: {}", other)),
        };
        lhs = Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }
    Ok(lhs)
}

fn parse_term(pair: Pair<Rule>) -> Result<Expr> {
    let mut parts = pair.into_inner();
    let mut lhs = parse_factor(parts.next().ok_or_else(|| anyhow!("Empty term"))?)?;
    while let Some(op) = parts.next() {
        let rhs = parse_factor(parts.next().ok_or_else(|| anyhow!("Operator without operand"))?)?;
        let op = match op.as_str() {
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            other => return Err(anyhow!("Unknown operator: {}", other)),
        };
        lhs = Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
    }
    Ok(lhs)
}

fn parse_factor(pair: Pair<Rule>) -> Result<Expr> {
    let mut negated = false;
    let mut result = None;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::neg => negated = true,
            Rule::postfix => result = Some(parse_postfix(part)?),
            other => return Err(anyhow!("Unexpected factor rule: {:?}", other)),
        }
    }
    let expr = result.ok_or_else(|| anyhow!("Empty factor"))?;
    Ok(if negated {
        Expr::Neg(Box::new(expr))
    } else {
        expr
    })
}

fn parse_postfix(pair: Pair<Rule>) -> Result<Expr> {
    let mut parts = pair.into_inner();
    let mut expr = parse_primary(parts.next().ok_or_else(|| anyhow!("Empty postfix"))?)?;
    for method in parts {
        let mut inner = method.into_inner();
        let name = ident_text(inner.next())?;
        let args = inner.next().map(parse_args).transpose()?.unwrap_or_default();
        expr = Expr::Method {
            receiver: Box::new(expr),
            name,
            args,
        };
    }
    Ok(expr)
}

fn parse_primary(pair: Pair<Rule>) -> Result<Expr> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| anyhow!("Empty primary"))?;
    match inner.as_rule() {
        Rule::number => inner
            .as_str()
            .parse::<f64>()
            .map(Expr::Number)
            .with_context(|| format!("Invalid number: {}", inner.as_str())),
        Rule::string => {
            let text = inner.as_str();
            Ok(Expr::Str(text[1..text.len() - 1].to_string()))
        }
        Rule::boolean => Ok(Expr::Bool(inner.as_str() == "true")),
        Rule::vector => {
            let elems = inner
                .into_inner()
                .map(parse_expr)
                .collect::<Result<Vec<_>>>()?;
            Ok(Expr::Vector(elems))
        }
        Rule::ident => Ok(Expr::Ident(inner.as_str().to_string())),
        Rule::call => {
            let mut parts = inner.into_inner();
            let name = ident_text(parts.next())?;
            let args = parts.next().map(parse_args).transpose()?.unwrap_or_default();
            Ok(Expr::Call { name, args })
        }
        Rule::expr => parse_expr(inner),
        other => Err(anyhow!("Unexpected primary rule: {:?}", other)),
    }
}

fn parse_args(pair: Pair<Rule>) -> Result<Vec<Arg>> {
    pair.into_inner()
        .map(|arg| {
            let inner = arg
                .into_inner()
                .next()
                .ok_or_else(|| anyhow!("Empty argument"))?;
            match inner.as_rule() {
                Rule::named_arg => {
                    let mut parts = inner.into_inner();
                    let name = ident_text(parts.next())?;
                    let value =
                        parse_expr(parts.next().ok_or_else(|| anyhow!("Named arg without value"))?)?;
                    Ok(Arg {
                        name: Some(name),
                        value,
                    })
                }
                Rule::expr => Ok(Arg {
                    name: None,
                    value: parse_expr(inner)?,
                }),
                other => Err(anyhow!("Unexpected argument rule: {:?}", other)),
            }
        })
        .collect()
}

fn first_ident(pair: Pair<Rule>) -> Result<String> {
    ident_text(pair.into_inner().next())
}

fn ident_text(pair: Option<Pair<Rule>>) -> Result<String> {
    let pair = pair.ok_or_else(|| anyhow!("Expected identifier"))?;
    if pair.as_rule() != Rule::ident {
        return Err(anyhow!("Expected identifier, got {:?}", pair.as_rule()));
    }
    Ok(pair.as_str().to_string())
}
