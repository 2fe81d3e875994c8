// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Design script evaluator
//!
//! Walks the AST with a simple binding environment. Every catalog generator
//! is exposed as a builtin; solids and assemblies carry method chains for
//! booleans and placement.

use super::ast::{Arg, BinOp, Expr, Script, Stmt};
use crate::catalog::{
    self, connectors, enclosures::Enclosure, fit::Fit, params::ParamError, pcb, sealing,
    EndStyle, HeadType, HoleSpec, RectEnclosureParams, ScrewSize, TubeParams,
};
use crate::geometry::{Solid, DEFAULT_SEGMENTS};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("forbidden import: {0}")]
    ForbiddenImport(String),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("no method `{name}` on {on}")]
    UnknownMethod { name: String, on: &'static str },
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("{call}: missing argument `{name}`")]
    MissingArgument { call: String, name: &'static str },
    #[error("{call}: argument `{name}` must be a {expected}, got {got}")]
    WrongType {
        call: String,
        name: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("operator `{op}` needs numeric operands, got {lhs} and {rhs}")]
    InvalidOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("vector elements must all be numbers or all be points")]
    MixedVector,
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("output `{name}` is not a solid ({kind})")]
    NotExportable { name: String, kind: &'static str },
    #[error("no outputs found; bind a solid, use `output`, or define a build block")]
    NoOutputs,
}

/// Runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Vector(Vec<f64>),
    Points(Vec<[f64; 3]>),
    Solid(Solid),
    Assembly(Enclosure),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Vector(_) => "vector",
            Value::Points(_) => "points",
            Value::Solid(_) => "solid",
            Value::Assembly(_) => "assembly",
        }
    }

    fn is_exportable(&self) -> bool {
        matches!(self, Value::Solid(_) | Value::Assembly(_))
    }
}

/// Evaluate a script and resolve its named outputs.
///
/// Precedence: solids bound inside a `build { }` block win over everything;
/// `output` statements are always collected; with neither, every top-level
/// solid or assembly binding is exported in declaration order.
pub fn eval_script(script: &Script) -> Result<Vec<(String, Value)>, ScriptError> {
    let mut env = Env::new();
    let mut outputs: Vec<(String, Value)> = Vec::new();
    let mut build_bindings: Vec<(String, Value)> = Vec::new();

    eval_statements(&script.statements, &mut env, &mut outputs, &mut build_bindings, false)?;

    let mut named = outputs;
    for (name, value) in build_bindings {
        if let Some(slot) = named.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            named.push((name, value));
        }
    }

    if named.is_empty() {
        named = env
            .bindings
            .into_iter()
            .filter(|(_, v)| v.is_exportable())
            .collect();
    }

    if named.is_empty() {
        return Err(ScriptError::NoOutputs);
    }
    for (name, value) in &named {
        if !value.is_exportable() {
            return Err(ScriptError::NotExportable {
                name: name.clone(),
                kind: value.kind(),
            });
        }
    }
    Ok(named)
}

fn eval_statements(
    statements: &[Stmt],
    env: &mut Env,
    outputs: &mut Vec<(String, Value)>,
    build_bindings: &mut Vec<(String, Value)>,
    in_build: bool,
) -> Result<(), ScriptError> {
    for stmt in statements {
        match stmt {
            Stmt::Import(_) => {}
            Stmt::Let { name, value } => {
                let value = eval_expr(value, env)?;
                if in_build && value.is_exportable() {
                    build_bindings.push((name.clone(), value.clone()));
                }
                env.bind(name.clone(), value);
            }
            Stmt::Output { name, value } => {
                let value = eval_expr(value, env)?;
                // A repeated output name keeps the last value; one file per
                // name on export.
                if let Some(slot) = outputs.iter_mut().find(|(n, _)| n == name) {
                    slot.1 = value;
                } else {
                    outputs.push((name.clone(), value));
                }
            }
            Stmt::Build(inner) => {
                eval_statements(inner, env, outputs, build_bindings, true)?;
            }
        }
    }
    Ok(())
}

struct Env {
    bindings: Vec<(String, Value)>,
}

impl Env {
    fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    fn bind(&mut self, name: String, value: Value) {
        if let Some(slot) = self.bindings.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.bindings.push((name, value));
        }
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

fn eval_expr(expr: &Expr, env: &Env) -> Result<Value, ScriptError> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Ident(name) => env
            .lookup(name)
            .cloned()
            .ok_or_else(|| ScriptError::UnknownVariable(name.clone())),
        Expr::Neg(inner) => match eval_expr(inner, env)? {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(ScriptError::InvalidOperands {
                op: "-",
                lhs: "number",
                rhs: other.kind(),
            }),
        },
        Expr::Binary { op, lhs, rhs } => {
            let lhs = eval_expr(lhs, env)?;
            let rhs = eval_expr(rhs, env)?;
            match (lhs, rhs) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                })),
                (lhs, rhs) => Err(ScriptError::InvalidOperands {
                    op: match op {
                        BinOp::Add => "+",
                        BinOp::Sub => "-",
                        BinOp::Mul => "*",
                        BinOp::Div => "/",
                    },
                    lhs: lhs.kind(),
                    rhs: rhs.kind(),
                }),
            }
        }
        Expr::Vector(elems) => {
            let values = elems
                .iter()
                .map(|e| eval_expr(e, env))
                .collect::<Result<Vec<_>, _>>()?;
            vector_value(values)
        }
        Expr::Call { name, args } => {
            let args = eval_args(name, args, env)?;
            call_builtin(name, &args)
        }
        Expr::Method {
            receiver,
            name,
            args,
        } => {
            let receiver = eval_expr(receiver, env)?;
            let args = eval_args(name, args, env)?;
            call_method(receiver, name, &args)
        }
    }
}

/// A homogeneous vector literal: all numbers, or all point-like vectors.
fn vector_value(values: Vec<Value>) -> Result<Value, ScriptError> {
    if values.iter().all(|v| matches!(v, Value::Number(_))) {
        let nums = values
            .iter()
            .map(|v| match v {
                Value::Number(n) => *n,
                _ => unreachable!(),
            })
            .collect();
        return Ok(Value::Vector(nums));
    }
    let mut points = Vec::with_capacity(values.len());
    for v in values {
        match v {
            Value::Vector(coords) if coords.len() == 2 => {
                points.push([coords[0], coords[1], 0.0]);
            }
            Value::Vector(coords) if coords.len() == 3 => {
                points.push([coords[0], coords[1], coords[2]]);
            }
            Value::Points(more) => points.extend(more),
            _ => return Err(ScriptError::MixedVector),
        }
    }
    Ok(Value::Points(points))
}

// ---- arguments ----------------------------------------------------------

struct Args {
    call: String,
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

fn eval_args(call: &str, args: &[Arg], env: &Env) -> Result<Args, ScriptError> {
    let mut positional = Vec::new();
    let mut named = Vec::new();
    for arg in args {
        let value = eval_expr(&arg.value, env)?;
        match &arg.name {
            Some(name) => named.push((name.clone(), value)),
            None => positional.push(value),
        }
    }
    Ok(Args {
        call: call.to_string(),
        positional,
        named,
    })
}

impl Args {
    fn get(&self, name: &str, index: usize) -> Option<&Value> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .or_else(|| self.positional.get(index))
    }

    fn missing(&self, name: &'static str) -> ScriptError {
        ScriptError::MissingArgument {
            call: self.call.clone(),
            name,
        }
    }

    fn wrong(&self, name: &'static str, expected: &'static str, got: &Value) -> ScriptError {
        ScriptError::WrongType {
            call: self.call.clone(),
            name,
            expected,
            got: got.kind(),
        }
    }

    fn number(&self, name: &'static str, index: usize) -> Result<Option<f64>, ScriptError> {
        match self.get(name, index) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(*n)),
            Some(other) => Err(self.wrong(name, "number", other)),
        }
    }

    fn require_number(&self, name: &'static str, index: usize) -> Result<f64, ScriptError> {
        self.number(name, index)?.ok_or_else(|| self.missing(name))
    }

    fn count(&self, name: &'static str, index: usize) -> Result<Option<u32>, ScriptError> {
        Ok(self.number(name, index)?.map(|n| n.max(0.0) as u32))
    }

    fn require_count(&self, name: &'static str, index: usize) -> Result<u32, ScriptError> {
        self.count(name, index)?.ok_or_else(|| self.missing(name))
    }

    fn string(&self, name: &'static str, index: usize) -> Result<Option<&str>, ScriptError> {
        match self.get(name, index) {
            None => Ok(None),
            Some(Value::Str(s)) => Ok(Some(s)),
            Some(other) => Err(self.wrong(name, "string", other)),
        }
    }

    fn boolean(&self, name: &'static str, index: usize) -> Result<Option<bool>, ScriptError> {
        match self.get(name, index) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.wrong(name, "boolean", other)),
        }
    }

    fn vec3(&self, name: &'static str, index: usize) -> Result<Option<[f64; 3]>, ScriptError> {
        match self.get(name, index) {
            None => Ok(None),
            Some(Value::Vector(v)) if v.len() == 3 => Ok(Some([v[0], v[1], v[2]])),
            Some(Value::Vector(v)) if v.len() == 2 => Ok(Some([v[0], v[1], 0.0])),
            Some(other) => Err(self.wrong(name, "vector", other)),
        }
    }

    fn points(&self, name: &'static str, index: usize) -> Result<Vec<[f64; 3]>, ScriptError> {
        match self.get(name, index) {
            None => Err(self.missing(name)),
            Some(Value::Points(pts)) => Ok(pts.clone()),
            Some(other) => Err(self.wrong(name, "points", other)),
        }
    }

    fn require_solid(&self, name: &'static str, index: usize) -> Result<Solid, ScriptError> {
        match self.get(name, index) {
            None => Err(self.missing(name)),
            Some(Value::Solid(s)) => Ok(s.clone()),
            Some(other) => Err(self.wrong(name, "solid", other)),
        }
    }

    fn screw_size(&self, name: &'static str, index: usize) -> Result<ScrewSize, ScriptError> {
        match self.string(name, index)? {
            None => Ok(ScrewSize::M3),
            Some(s) => Ok(s.parse::<ScrewSize>()?),
        }
    }

    fn fit(&self, name: &'static str, index: usize) -> Result<Fit, ScriptError> {
        match self.string(name, index)? {
            None => Ok(Fit::default()),
            Some(s) => Ok(s.parse::<Fit>()?),
        }
    }
}

// ---- builtins -----------------------------------------------------------

fn call_builtin(name: &str, args: &Args) -> Result<Value, ScriptError> {
    match name {
        "box" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let h = args.require_number("height", 2)?;
            let centered = args.boolean("centered", 3)?.unwrap_or(false);
            Ok(Value::Solid(Solid::cuboid(l, w, h, centered)))
        }
        "cylinder" => {
            let radius = match args.number("radius", 0)? {
                Some(r) => r,
                None => {
                    args.number("diameter", usize::MAX)?
                        .map(|d| d / 2.0)
                        .ok_or_else(|| args.missing("radius"))?
                }
            };
            let height = args.require_number("height", 1)?;
            let segments = args
                .count("segments", usize::MAX)?
                .unwrap_or(DEFAULT_SEGMENTS);
            Ok(Value::Solid(Solid::cylinder(radius, 0.0, height, segments)))
        }
        "tube" => {
            let od = args.require_number("outer_diameter", 0)?;
            let wall = args.require_number("wall_thickness", 1)?;
            let height = args.require_number("height", 2)?;
            let end_style = match args.string("end_style", 3)? {
                None => EndStyle::Open,
                Some(s) => s.parse::<EndStyle>()?,
            };
            let cap = args.number("end_cap_thickness", 4)?.unwrap_or(2.0);
            let params = TubeParams::new(od, wall, height, end_style, cap)?;
            Ok(Value::Solid(catalog::tube(&params)))
        }
        "screw_holes" => {
            let target = args.require_solid("target", 0)?;
            screw_holes_impl(&target, args, 1)
        }
        "nema17" => {
            let origin = args.vec3("origin", 0)?.unwrap_or([0.0; 3]);
            Ok(Value::Points(catalog::pattern_nema17(origin)))
        }
        "vesa" => {
            let size = args.require_count("size", 0)?;
            let origin = args.vec3("origin", 1)?.unwrap_or([0.0; 3]);
            Ok(Value::Points(catalog::pattern_vesa(size, origin)?))
        }
        "bolt_circle" => {
            let count = args.require_count("count", 0)?;
            let radius = args.require_number("radius", 1)?;
            let start = args.number("start_angle", 2)?.unwrap_or(0.0);
            let origin = args.vec3("origin", 3)?.unwrap_or([0.0; 3]);
            Ok(Value::Points(catalog::bolt_circle(count, radius, start, origin)))
        }
        "linear_array" => {
            let solid = args.require_solid("solid", 0)?;
            let count = args.require_count("count", 1)?;
            let dx = args.number("dx", 2)?.unwrap_or(0.0);
            let dy = args.number("dy", 3)?.unwrap_or(0.0);
            let dz = args.number("dz", 4)?.unwrap_or(0.0);
            Ok(Value::Solid(catalog::linear_array(&solid, count, dx, dy, dz)))
        }
        "grid_array" => {
            let solid = args.require_solid("solid", 0)?;
            let nx = args.require_count("nx", 1)?;
            let ny = args.require_count("ny", 2)?;
            let dx = args.require_number("dx", 3)?;
            let dy = args.require_number("dy", 4)?;
            let centered = args.boolean("centered", 5)?.unwrap_or(true);
            Ok(Value::Solid(catalog::grid_array(&solid, nx, ny, dx, dy, centered)))
        }
        "circular_array" => {
            let solid = args.require_solid("solid", 0)?;
            let count = args.require_count("count", 1)?;
            let radius = args.require_number("radius", 2)?;
            let start = args.number("start_angle", 3)?.unwrap_or(0.0);
            let span = args.number("arc_span", 4)?.unwrap_or(360.0);
            Ok(Value::Solid(catalog::circular_array(
                &solid, count, radius, start, span,
            )))
        }
        "pcb_pocket" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let t = args.require_number("thickness", 2)?;
            let clearance = args.number("clearance", 3)?.unwrap_or(0.2);
            let depth = args.number("depth", 4)?;
            Ok(Value::Solid(catalog::pcb_pocket(l, w, t, clearance, depth)))
        }
        "pcb_standoffs" => {
            let pts = args.points("points", 0)?;
            let height = args.require_number("height", 1)?;
            let outer_d = args
                .number("outer_d", 2)?
                .unwrap_or(pcb::DEFAULT_STANDOFF_OUTER_D);
            let hole_d = args
                .number("hole_d", 3)?
                .unwrap_or(pcb::DEFAULT_STANDOFF_HOLE_D);
            let xy: Vec<[f64; 2]> = pts.iter().map(|p| [p[0], p[1]]).collect();
            Ok(Value::Solid(catalog::pcb_standoffs(&xy, height, outer_d, hole_d)))
        }
        "usb_c_cutout" => {
            let t = args.require_number("thickness", 0)?;
            let c = args
                .number("clearance", 1)?
                .unwrap_or(connectors::DEFAULT_USB_C_CLEARANCE);
            Ok(Value::Solid(catalog::cutout_usb_c(t, c)))
        }
        "rj45_cutout" => {
            let t = args.require_number("thickness", 0)?;
            let c = args
                .number("clearance", 1)?
                .unwrap_or(connectors::DEFAULT_RJ45_CLEARANCE);
            Ok(Value::Solid(catalog::cutout_rj45(t, c)))
        }
        "dc_barrel_cutout" => {
            let t = args.require_number("thickness", 0)?;
            let c = args
                .number("clearance", 1)?
                .unwrap_or(connectors::DEFAULT_DC_BARREL_CLEARANCE);
            Ok(Value::Solid(catalog::cutout_dc_barrel(t, c)))
        }
        "o_ring_gland" => {
            let d = args.require_number("diameter", 0)?;
            let cs = args.require_number("cross_section", 1)?;
            let squeeze = args.number("squeeze", 2)?.unwrap_or(sealing::DEFAULT_SQUEEZE);
            let depth_factor = args
                .number("depth_factor", 3)?
                .unwrap_or(sealing::DEFAULT_GROOVE_DEPTH_FACTOR);
            Ok(Value::Solid(catalog::o_ring_gland_face(d, cs, squeeze, depth_factor)))
        }
        "gasket_channel" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let cw = args.require_number("channel_width", 2)?;
            let depth = args.require_number("depth", 3)?;
            let r = args.number("corner_radius", 4)?.unwrap_or(0.0);
            Ok(Value::Solid(catalog::gasket_channel_rect(l, w, cw, depth, r)))
        }
        "louvre_panel" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let t = args.require_number("thickness", 2)?;
            let slot_width = args.number("slot_width", 3)?.unwrap_or(3.0);
            let slot_pitch = args.number("slot_pitch", 4)?.unwrap_or(8.0);
            let tilt = args.number("tilt", 5)?.unwrap_or(35.0);
            Ok(Value::Solid(catalog::louvre_panel(l, w, t, slot_width, slot_pitch, tilt)))
        }
        "insert_boss" => {
            let size = args.screw_size("size", 0)?;
            let height = args.require_number("height", 1)?;
            let wall = args.number("wall", 2)?.unwrap_or(1.6);
            let through = args.boolean("through", 3)?.unwrap_or(true);
            Ok(Value::Solid(catalog::insert_boss(size, height, wall, through)?))
        }
        "rect_enclosure" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let h = args.require_number("height", 2)?;
            let wall = args.require_number("wall", 3)?;
            let lid_h = args.require_number("lid_height", 4)?;
            let clearance = args.number("clearance", 5)?.unwrap_or(0.2);
            let mut params = RectEnclosureParams::new(l, w, h, wall, lid_h, clearance)?;
            if let Some(r) = args.number("corner_radius", 6)? {
                params = params.with_corner_radius(r)?;
            }
            Ok(Value::Assembly(catalog::rectangular_enclosure_base_and_lid(
                &params,
            )))
        }
        "oval_enclosure" => {
            let l = args.require_number("length", 0)?;
            let w = args.require_number("width", 1)?;
            let h = args.require_number("height", 2)?;
            let wall = args.require_number("wall", 3)?;
            let lid_h = args.require_number("lid_height", 4)?;
            Ok(Value::Assembly(catalog::elliptical_enclosure(l, w, h, wall, lid_h)))
        }
        "d_enclosure" => {
            let d = args.require_number("diameter", 0)?;
            let flat = args.require_number("flat_width", 1)?;
            let h = args.require_number("height", 2)?;
            let wall = args.require_number("wall", 3)?;
            let lid_h = args.require_number("lid_height", 4)?;
            Ok(Value::Assembly(catalog::d_shaped_enclosure(d, flat, h, wall, lid_h)))
        }
        other => Err(ScriptError::UnknownFunction(other.to_string())),
    }
}

fn screw_holes_impl(target: &Solid, args: &Args, off: usize) -> Result<Value, ScriptError> {
    let points = args.points("points", off)?;
    let size = args.screw_size("size", off + 1)?;
    let fit = args.fit("fit", off + 2)?;
    let through = args.boolean("through", off + 3)?.unwrap_or(true);
    let depth = args.number("depth", off + 4)?;
    let counterbore = args.boolean("counterbore", usize::MAX)?.unwrap_or(false);
    let countersink = args.boolean("countersink", usize::MAX)?.unwrap_or(false);
    let head = match args.string("head", usize::MAX)? {
        None => None,
        Some(s) => Some(s.parse::<HeadType>()?),
    };

    let mut spec = HoleSpec::new(size, fit, through, depth)?;
    if countersink {
        spec = spec.with_countersink();
    } else if counterbore {
        spec = spec.with_counterbore(head.unwrap_or(HeadType::Pan));
    }
    Ok(Value::Solid(catalog::apply_screw_holes(target, &points, &spec)))
}

// ---- methods ------------------------------------------------------------

fn call_method(receiver: Value, name: &str, args: &Args) -> Result<Value, ScriptError> {
    match receiver {
        Value::Solid(solid) => match name {
            "union" => {
                let other = args.require_solid("other", 0)?;
                Ok(Value::Solid(solid.union(&other)))
            }
            "cut" => {
                let other = args.require_solid("other", 0)?;
                Ok(Value::Solid(solid.difference(&other)))
            }
            "intersect" => {
                let other = args.require_solid("other", 0)?;
                Ok(Value::Solid(solid.intersection(&other)))
            }
            "translate" => {
                let [x, y, z] = translation(args)?;
                Ok(Value::Solid(solid.translate(x, y, z)))
            }
            "rotate_x" => {
                let deg = args.require_number("degrees", 0)?;
                Ok(Value::Solid(solid.rotate_x(deg)))
            }
            "rotate_z" => {
                let deg = args.require_number("degrees", 0)?;
                Ok(Value::Solid(solid.rotate_z(deg)))
            }
            "screw_holes" => screw_holes_impl(&solid, args, 0),
            other => Err(ScriptError::UnknownMethod {
                name: other.to_string(),
                on: "solid",
            }),
        },
        Value::Assembly(assembly) => match name {
            "part" => match args.string("name", 0)? {
                Some("base") => Ok(Value::Solid(assembly.base)),
                Some("lid") => Ok(Value::Solid(assembly.lid)),
                _ => Err(args.missing("name")),
            },
            "translate" => {
                let [x, y, z] = translation(args)?;
                Ok(Value::Assembly(Enclosure {
                    base: assembly.base.translate(x, y, z),
                    lid: assembly.lid.translate(x, y, z),
                }))
            }
            "rotate_z" => {
                let deg = args.require_number("degrees", 0)?;
                Ok(Value::Assembly(Enclosure {
                    base: assembly.base.rotate_z(deg),
                    lid: assembly.lid.rotate_z(deg),
                }))
            }
            other => Err(ScriptError::UnknownMethod {
                name: other.to_string(),
                on: "assembly",
            }),
        },
        other => Err(ScriptError::UnknownMethod {
            name: name.to_string(),
            on: other.kind(),
        }),
    }
}

/// Accepts `translate(x, y, z)` or `translate([x, y, z])`.
fn translation(args: &Args) -> Result<[f64; 3], ScriptError> {
    match args.get("offset", 0) {
        Some(Value::Vector(v)) if v.len() == 3 => Ok([v[0], v[1], v[2]]),
        Some(Value::Vector(v)) if v.len() == 2 => Ok([v[0], v[1], 0.0]),
        _ => {
            let x = args.require_number("x", 0)?;
            let y = args.number("y", 1)?.unwrap_or(0.0);
            let z = args.number("z", 2)?.unwrap_or(0.0);
            Ok([x, y, z])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parser::parse_script;

    fn eval(src: &str) -> Result<Vec<(String, Value)>, ScriptError> {
        let script = parse_script(src).unwrap();
        eval_script(&script)
    }

    #[test]
    fn test_top_level_bindings_exported() {
        let outputs = eval("let plate = box(40, 20, 4);").unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, "plate");
        assert!(matches!(outputs[0].1, Value::Solid(_)));
    }

    #[test]
    fn test_output_statement_wins_over_bindings() {
        let src = "let a = box(10, 10, 10);\noutput only = box(5, 5, 5);\n";
        let outputs = eval(src).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, "only");
    }

    #[test]
    fn test_repeated_output_name_keeps_last() {
        let src = "output part = box(10, 10, 10);\noutput part = box(5, 5, 5);\n";
        let outputs = eval(src).unwrap();
        assert_eq!(outputs.len(), 1);
        let Value::Solid(solid) = &outputs[0].1 else {
            panic!("expected solid");
        };
        assert!((solid.volume() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_build_block_bindings_win() {
        let src = "let a = box(10, 10, 10);\nbuild { let bracket = box(30, 30, 3); }\n";
        let outputs = eval(src).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].0, "bracket");
    }

    #[test]
    fn test_method_chain_and_arithmetic() {
        let src = "let d = 3 + 1;\nlet part = box(40, 40, 4).cut(cylinder(radius = d / 2, height = 10).translate(0, 0, -5));\n";
        let outputs = eval(src).unwrap();
        let Value::Solid(solid) = &outputs[0].1 else {
            panic!("expected solid");
        };
        assert!(solid.volume() < 40.0 * 40.0 * 4.0);
    }

    #[test]
    fn test_screw_holes_on_nema17_pattern() {
        let src = "let plate = box(60, 60, 4, true).screw_holes(nema17(), size = \"M3\", fit = \"SNAP\");\n";
        let outputs = eval(src).unwrap();
        let Value::Solid(solid) = &outputs[0].1 else {
            panic!("expected solid");
        };
        assert!(solid.volume() < 60.0 * 60.0 * 4.0);
    }

    #[test]
    fn test_enclosure_parts() {
        let src = "let e = rect_enclosure(100, 60, 40, 2.4, 10);\nlet lid = e.part(\"lid\");\n";
        let outputs = eval(src).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0].1, Value::Assembly(_)));
        assert!(matches!(outputs[1].1, Value::Solid(_)));
    }

    #[test]
    fn test_param_errors_surface() {
        let err = eval("let t = tube(10, 6, 40);").unwrap_err();
        assert!(err.to_string().contains("wall_thickness"));
    }

    #[test]
    fn test_unknown_function_rejected() {
        let err = eval("let x = summon_demon(1);").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownFunction(_)));
    }

    #[test]
    fn test_no_outputs_is_an_error() {
        let err = eval("let n = 4;").unwrap_err();
        assert!(matches!(err, ScriptError::NoOutputs));
    }
}
