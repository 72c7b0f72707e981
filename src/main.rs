use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pokeclima_core::Config;
use pokeclima_forecast::{ForecastOrchestrator, SessionState};

/// Find the Pokémon that matches a city's weather right now
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, env = "POKECLIMA_CONFIG")]
    config: Option<PathBuf>,

    /// City to look up, e.g. "São Paulo"
    city: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    pokeclima_core::init()?;

    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let orchestrator =
        ForecastOrchestrator::from_config(&config).context("Failed to set up forecast services")?;

    let state = orchestrator.submit(&args.city).await;
    Ok(print_session(&args.city, &state))
}

fn print_session(city: &str, state: &SessionState) -> ExitCode {
    if let Some(error) = &state.error {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    let (Some(report), Some(detail)) = (&state.report, &state.detail) else {
        eprintln!("Nenhum resultado para {}", city);
        return ExitCode::FAILURE;
    };

    println!("{}", city);
    println!(
        "  {}°C (mín {}°C, máx {}°C)",
        report.rounded_temperature(),
        report.main.temp_min,
        report.main.temp_max
    );
    if let Some(condition) = report.primary_condition() {
        println!("  {}", condition.description);
    }
    if let Some(category) = state.category {
        println!("  Tipo: {}", category);
    }

    println!();
    println!("{}", detail.name);
    if let Some(image) = &detail.image_url {
        println!("  {}", image);
    }
    if let Some(types) = &detail.types {
        let names: Vec<&str> = types.iter().map(|t| t.type_name.as_str()).collect();
        println!("  Tipos: {}", names.join(", "));
    }
    for stat in &detail.stats {
        println!("  {:<16} {}", stat.stat_name, stat.base_stat);
    }

    ExitCode::SUCCESS
}
