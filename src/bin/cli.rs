// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Partforge Developers

//! Partforge CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use partforge::{io, script};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "partforge")]
#[command(about = "Parametric part generator - run design scripts, export STL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a design script and export its outputs as STL
    Run {
        /// Input design script
        script: PathBuf,

        /// Output directory for STL files
        #[arg(short, long, default_value = "out")]
        out: PathBuf,
    },

    /// Measure an STL file and print a JSON report
    Measure {
        /// Input STL file
        file: PathBuf,
    },

    /// Parse a design script and output its AST as JSON
    Parse {
        /// Input design script
        script: PathBuf,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Run { script, out } => run_command(&script, &out, verbose),
        Commands::Measure { file } => measure_command(&file),
        Commands::Parse { script, output } => parse_command(&script, output.as_deref(), verbose),
        Commands::Version => {
            println!("partforge v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run_command(script: &Path, out: &Path, verbose: bool) -> Result<()> {
    if !script.exists() {
        anyhow::bail!("Script not found: {}", script.display());
    }
    if verbose {
        println!("Running: {}", script.display());
    }

    let start = std::time::Instant::now();
    let written = script::run_script(script, out)?;
    let elapsed = start.elapsed();

    for path in &written {
        println!("{} Exported {}", "✓".green(), path.display());
    }
    if verbose {
        println!("{} solids in {:.2?}", written.len(), elapsed);
    }
    Ok(())
}

fn measure_command(file: &Path) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("STL file not found: {}", file.display());
    }
    let report = io::measure_stl(file)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_command(script: &Path, output: Option<&Path>, verbose: bool) -> Result<()> {
    if !script.exists() {
        anyhow::bail!("Script not found: {}", script.display());
    }
    let source = std::fs::read_to_string(script)?;
    let ast = script::parse_script(&source)?;
    let json = serde_json::to_string_pretty(&ast)?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        if verbose {
            println!("AST written to: {}", path.display());
        }
    } else {
        println!("{}", json);
    }
    Ok(())
}
