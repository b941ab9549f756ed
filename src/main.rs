use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use log::info;

use heartexpert::report::AssessmentReport;
use heartexpert::{EstimatorConfig, FEATURE_COUNT, FeatureSchema, FeatureVector, RiskEstimator};

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, fields) = parse_args()?;

    info!(
        "Loading artifacts: model={}, scaler={}",
        config.model_path.display(),
        config.scaler_path.display()
    );

    // Artifact loading is a fatal startup condition: no form is presented
    // without both artifacts in place.
    let estimator = RiskEstimator::from_config(&config)
        .context("cannot start: model or scaler artifact failed to load")?;

    let raw = if fields.is_empty() {
        prompt_fields()?
    } else {
        fields
    };

    let vector = match FeatureVector::parse(&raw) {
        Ok(vector) => vector,
        Err(e) => {
            eprintln!("Input Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let verdict = estimator.estimate(&vector)?;
    let report = AssessmentReport::new(verdict);
    println!("{}", report.colored_summary_line());

    Ok(ExitCode::SUCCESS)
}

/// Split argv into artifact path overrides and raw field values
fn parse_args() -> anyhow::Result<(EstimatorConfig, Vec<String>)> {
    let mut config = EstimatorConfig::default();
    let mut fields = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--model" => {
                config.model_path = PathBuf::from(args.next().context("--model requires a path")?);
            }
            "--scaler" => {
                config.scaler_path =
                    PathBuf::from(args.next().context("--scaler requires a path")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => fields.push(arg),
        }
    }

    if !fields.is_empty() && fields.len() != FEATURE_COUNT {
        anyhow::bail!(
            "expected {FEATURE_COUNT} measurement values, got {} (run with --help for the field order)",
            fields.len()
        );
    }

    Ok((config, fields))
}

/// Interactive mode: one prompt per field, showing its advisory range
fn prompt_fields() -> anyhow::Result<Vec<String>> {
    println!("HeartHealth Predictor");
    println!("AI-Powered Cardiovascular Risk Assessment");
    println!();

    let schema = FeatureSchema::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut fields = Vec::with_capacity(FEATURE_COUNT);

    for def in schema.fields() {
        print!("{} ({}): ", def.label, def.hint);
        io::stdout().flush()?;
        let line = lines.next().context("unexpected end of input")??;
        fields.push(line);
    }

    Ok(fields)
}

fn print_usage() {
    let schema = FeatureSchema::new();
    println!("Usage: heartexpert [--model PATH] [--scaler PATH] [VALUES...]");
    println!();
    println!("With no VALUES, each field is prompted for interactively.");
    println!("With VALUES, supply all {FEATURE_COUNT} measurements in order:");
    for def in schema.fields() {
        println!("  {:<22} {}", def.label, def.hint);
    }
}
