// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use std::env;
use tracing_subscriber::EnvFilter;

use nlu_pipeline_config::config::{load_unit_config, ConfigFormat};
use nlu_pipeline_config::registry;
use nlu_pipeline_config::traits::ProcessingUnitConfig;
use nlu_pipeline_config::units::NluEngineConfig;

const DEFAULT_LOG_FILTER: &str = "warn";

fn print_usage(program: &str) {
    eprintln!("Usage: {} resources <config-file>", program);
    eprintln!("       {} show <config-file>", program);
    eprintln!("       {} default [yaml|json|toml]", program);
    eprintln!("       {} units", program);
    eprintln!("Example: {} resources configs/default-engine.yaml", program);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nlu-pipeline-config");

    match args.get(1).map(String::as_str) {
        Some("resources") => {
            let config = load_from_args(&args, program)?;
            let resources = config
                .get_required_resources()
                .context("Failed to resolve required resources")?;
            println!("{}", serde_json::to_string_pretty(&resources)?);
        }
        Some("show") => {
            let config = load_from_args(&args, program)?;
            println!("{}", serde_json::to_string_pretty(&config.to_dict()?)?);
        }
        Some("default") => {
            let format = match args.get(2).map(String::as_str).unwrap_or("yaml") {
                "yaml" | "yml" => ConfigFormat::Yaml,
                "json" => ConfigFormat::Json,
                "toml" => ConfigFormat::Toml,
                other => bail!("Unknown output format '{}'", other),
            };
            println!("{}", format.render(&NluEngineConfig::default().to_dict()?)?);
        }
        Some("units") => {
            for unit_name in registry::global()?.unit_names() {
                println!("{}", unit_name);
            }
        }
        _ => {
            print_usage(program);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_from_args(args: &[String], program: &str) -> anyhow::Result<Box<dyn ProcessingUnitConfig>> {
    let Some(path) = args.get(2) else {
        print_usage(program);
        std::process::exit(1);
    };

    load_unit_config(path).with_context(|| format!("Failed to load config '{}'", path))
}
