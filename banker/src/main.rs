//! Banker's algorithm safety evaluator.
//!
//! Reads a scenario file (processes, allocations, maximum demands, available
//! units), validates it, and reports whether the system is in a safe state
//! together with the step-by-step search trace.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use banker::core::need::derive_needs;
use banker::core::types::{AlgorithmResult, Process, Validation};
use banker::evaluate::{Evaluation, evaluate_path, validate_scenario};
use banker::exit_codes;
use banker::io::scenario::{load_scenario, sample_scenario, write_scenario};
use banker::logging;
use banker::report::{render_need_table, render_result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "banker",
    version,
    about = "Banker's algorithm safety evaluator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the textbook sample scenario (5 processes, 3 resource types).
    Init {
        /// Destination file (`.toml` or `.json`).
        #[arg(default_value = "scenario.toml")]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check a scenario for consistent lengths, signs and allocation <= max.
    Validate { path: PathBuf },
    /// Print allocation, max and derived need per process.
    Needs { path: PathBuf },
    /// Run the safety search and print the trace and verdict.
    Run {
        path: PathBuf,
        /// Emit derived processes and the full result as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// JSON payload for `banker run --json`.
#[derive(Serialize)]
struct RunReport<'a> {
    processes: &'a [Process],
    result: &'a AlgorithmResult,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { path, force } => cmd_init(&path, force),
        Command::Validate { path } => cmd_validate(&path),
        Command::Needs { path } => cmd_needs(&path),
        Command::Run { path, json } => cmd_run(&path, json),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_scenario(path, &sample_scenario())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote sample scenario");
    Ok(exit_codes::OK)
}

fn cmd_validate(path: &Path) -> Result<i32> {
    let scenario = load_scenario(path)?;
    match validate_scenario(&scenario) {
        Validation::Valid => {
            println!("valid");
            Ok(exit_codes::OK)
        }
        Validation::Invalid { error } => {
            eprintln!("invalid: {error}");
            Ok(exit_codes::INVALID)
        }
    }
}

fn cmd_needs(path: &Path) -> Result<i32> {
    let scenario = load_scenario(path)?;
    if let Validation::Invalid { error } = validate_scenario(&scenario) {
        eprintln!("invalid: {error}");
        return Ok(exit_codes::INVALID);
    }
    print!("{}", render_need_table(&derive_needs(&scenario.processes)));
    Ok(exit_codes::OK)
}

fn cmd_run(path: &Path, json: bool) -> Result<i32> {
    let (processes, result) = match evaluate_path(path)? {
        Evaluation::Invalid(error) => {
            eprintln!("invalid: {error}");
            return Ok(exit_codes::INVALID);
        }
        Evaluation::Evaluated { processes, result } => (processes, result),
    };

    if json {
        let report = RunReport {
            processes: &processes,
            result: &result,
        };
        let payload = serde_json::to_string_pretty(&report).context("serialize result json")?;
        println!("{payload}");
    } else {
        print!("{}", render_need_table(&processes));
        println!();
        print!("{}", render_result(&processes, &result));
    }

    Ok(if result.safe {
        exit_codes::OK
    } else {
        exit_codes::UNSAFE
    })
}
