//! # tractor-forecast
//!
//! Command-line front end: look up or forecast tractor sales for one month.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tractor_forecast::{AppConfig, ForecastContext, ForecastError, Period};

#[derive(Parser, Debug)]
#[command(name = "tractor-forecast")]
#[command(about = "Tractor sales lookup and forecast", long_about = None)]
struct Cli {
    /// Month name or number (e.g. "January", "jan", "1")
    #[arg(short, long)]
    month: String,

    /// Four digit year
    #[arg(short, long)]
    year: i32,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sales CSV, overrides the configuration
    #[arg(long)]
    data: Option<PathBuf>,

    /// Model parameter file, overrides the configuration
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "path")]
    json: bool,

    /// Also print every forecasted month up to the target
    #[arg(long)]
    path: bool,
}

fn load_config(cli: &Cli) -> Result<AppConfig, ForecastError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides();

    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(model) = &cli.model {
        config.model_path = model.clone();
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), ForecastError> {
    let config = load_config(cli)?;
    config.check_year(cli.year)?;
    let target = Period::from_month_name(&cli.month, cli.year)?;

    let context = ForecastContext::global(&config)?;
    let resolution = context.resolve(target)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.source);
        let label = if resolution.is_historical() {
            "Sales for"
        } else {
            "Predicted Sales for"
        };
        println!("{} {}:", label, target.long_name());
        println!("{} Units", resolution.units());
    }

    if cli.path && !resolution.is_historical() {
        for (period, value) in context.forecast_path(target)? {
            println!("  {}  {:>8.1}", period, value);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tractor_forecast=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ForecastError::DataUnavailable { .. }) => {
            eprintln!("Data not available for selected period.");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
