// Thu Aug 06 2026 - Alex

use anyhow::Result;
use clap::{Parser, Subcommand};
use classdiff::checker::Checker;
use classdiff::config::CheckConfig;
use classdiff::delta::Delta;
use classdiff::output::{CompatReport, JsonReporter, TextDumper};
use classdiff::utils::logging;
use classdiff::version::Version;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "classdiff")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Binary compatibility checker for compiled class libraries", long_about = None)]
struct Args {
    #[command(subcommand)]
    action: Action,

    /// Optional JSON config file with default paths and filters.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Semicolon-separated include patterns, e.g. "com/example/**".
    #[arg(long, global = true)]
    includes: Option<String>,

    /// Semicolon-separated exclude patterns.
    #[arg(long, global = true)]
    excludes: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print every structural difference between two artifacts.
    Diff {
        previous: PathBuf,
        current: PathBuf,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the compatibility verdict for two artifacts.
    Check {
        previous: PathBuf,
        current: PathBuf,
    },
    /// Infer the next version from the previous version and the diff.
    Infer {
        previous_version: String,
        previous: PathBuf,
        current: PathBuf,
    },
    /// Validate that the current version bumps far enough for the diff.
    Validate {
        previous_version: String,
        previous: PathBuf,
        current_version: String,
        current: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    logging::init_logger(logging::level_from_verbosity(args.verbose as usize));

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let config = match &args.config {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };

    let includes = split_filters(args.includes.as_deref(), &config.includes);
    let excludes = split_filters(args.excludes.as_deref(), &config.excludes);

    let delta_for = |previous: &PathBuf, current: &PathBuf| -> Result<Delta> {
        let delta = Checker::new(previous, current)
            .with_includes(includes.clone())
            .with_excludes(excludes.clone())
            .diff()?;
        Ok(delta)
    };

    match &args.action {
        Action::Diff { previous, current, json } => {
            let delta = delta_for(previous, current)?;
            if *json || config.output.json {
                let report = CompatReport::from_delta(
                    &display(previous),
                    &display(current),
                    &delta,
                );
                let text = JsonReporter::new()
                    .with_pretty(config.output.pretty)
                    .serialize(&report)?;
                println!("{}", text);
            } else {
                TextDumper::stdout().dump(&delta)?;
            }
            Ok(0)
        }
        Action::Check { previous, current } => {
            let delta = delta_for(previous, current)?;
            println!("{}", delta.compute_compatibility_type());
            Ok(0)
        }
        Action::Infer { previous_version, previous, current } => {
            let version = Version::parse(previous_version)?;
            let delta = delta_for(previous, current)?;
            println!("{}", delta.infer(&version)?);
            Ok(0)
        }
        Action::Validate { previous_version, previous, current_version, current } => {
            let previous_version = Version::parse(previous_version)?;
            let current_version = Version::parse(current_version)?;
            let delta = delta_for(previous, current)?;
            let valid = delta.validate(&previous_version, &current_version)?;
            if valid {
                println!("{} {} is a valid successor of {}", "[+]".green(), current_version, previous_version);
                Ok(0)
            } else {
                let required = delta.infer(&previous_version)?;
                println!(
                    "{} {} does not satisfy the required bump to {}",
                    "[!]".red(),
                    current_version,
                    required
                );
                Ok(1)
            }
        }
    }
}

fn display(path: &PathBuf) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn split_filters(arg: Option<&str>, fallback: &[String]) -> Vec<String> {
    match arg {
        Some(text) => text
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect(),
        None => fallback.to_vec(),
    }
}
