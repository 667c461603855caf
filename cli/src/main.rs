//! drift CLI - reads a puzzle input file and prints the answers.
//!
//! ```text
//! drift calibrate [FILE] [--part one|two|both]
//! drift fabric    [FILE] [--part one|two|both]
//! ```
//!
//! Without `FILE` the path comes from `[inputs]` in `~/.drift/config.toml`.
//! Answers go to stdout; logs go to stderr, filtered by `DRIFT_LOG`, then the
//! config's `log.filter`, then `warn`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use drift_config::DriftConfig;
use drift_core::{
    first_repeat, intact_claim, overlap_area, parse_claims, parse_deltas, resulting_frequency,
};

const LOG_ENV_VAR: &str = "DRIFT_LOG";

#[derive(Parser)]
#[command(name = "drift")]
#[command(about = "Frequency calibration and fabric claim solvers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calibrate the device from a list of frequency changes
    Calibrate {
        /// Frequency change list, one signed integer per line
        file: Option<PathBuf>,
        /// Which answer to print
        #[arg(long, value_enum, default_value_t = Part::Both)]
        part: Part,
    },
    /// Measure overlapping fabric claims
    Fabric {
        /// Claim list, one `#id @ left,top: WxH` per line
        file: Option<PathBuf>,
        /// Which answer to print
        #[arg(long, value_enum, default_value_t = Part::Both)]
        part: Part,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    One,
    Two,
    Both,
}

impl Part {
    fn includes_one(self) -> bool {
        matches!(self, Part::One | Part::Both)
    }

    fn includes_two(self) -> bool {
        matches!(self, Part::Two | Part::Both)
    }
}

fn init_tracing(config: Option<&DriftConfig>) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.and_then(DriftConfig::log_filter).unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries only answers.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = DriftConfig::load();
    let config = loaded.as_ref().ok().and_then(Option::as_ref);
    init_tracing(config);
    if let Err(err) = &loaded {
        tracing::warn!("Ignoring config: {err}");
    }

    let answers = match cli.command {
        Commands::Calibrate { file, part } => {
            let path = resolve_input(file, config.and_then(DriftConfig::frequency_path), "frequency")?;
            calibrate(&read_input(&path)?, part)?
        }
        Commands::Fabric { file, part } => {
            let path = resolve_input(file, config.and_then(DriftConfig::claims_path), "claims")?;
            fabric(&read_input(&path)?, part)?
        }
    };

    for answer in answers {
        println!("{answer}");
    }
    Ok(())
}

fn resolve_input(file: Option<PathBuf>, configured: Option<PathBuf>, key: &str) -> Result<PathBuf> {
    file.or(configured).with_context(|| {
        format!("no input file given and inputs.{key} is not set in the config")
    })
}

fn read_input(path: &Path) -> Result<String> {
    tracing::info!(path = %path.display(), "Reading puzzle input");
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn calibrate(input: &str, part: Part) -> Result<Vec<String>> {
    let deltas = parse_deltas(input)?;
    let mut answers = Vec::new();

    if part.includes_one() {
        let frequency = resulting_frequency(&deltas)?;
        answers.push(format!("Part 1: {frequency}"));
    }
    if part.includes_two() {
        let repeat = first_repeat(&deltas).context("no calibration frequency")?;
        tracing::info!(step = repeat.step, "First repeated frequency found");
        answers.push(format!("Part 2: {}", repeat.value));
    }

    Ok(answers)
}

fn fabric(input: &str, part: Part) -> Result<Vec<String>> {
    let claims = parse_claims(input)?;
    let mut answers = Vec::new();

    if part.includes_one() {
        answers.push(format!("Part 1: {}", overlap_area(&claims)));
    }
    if part.includes_two() {
        let Some(id) = intact_claim(&claims) else {
            bail!("every claim overlaps another claim");
        };
        answers.push(format!("Part 2: {id}"));
    }

    Ok(answers)
}
