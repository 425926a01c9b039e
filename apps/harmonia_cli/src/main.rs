mod birth;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use harmonia::aspects::AspectCalculator;
use harmonia::ephemeris::AccuracyTier;
use harmonia::{compute_compatibility, compute_report, ChartSettings};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "harmonia", author, version, about)]
struct Cli {
    /// Settings file (default: configs/harmonia.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the accuracy tier from the settings file.
    #[arg(long, global = true)]
    tier: Option<AccuracyTier>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Natal chart, Bazi chart and their harmony for one birth.
    Chart(BirthArgs),
    /// Compatibility between two births.
    Compat(CompatArgs),
}

#[derive(Args, Debug)]
struct BirthArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// Local birth time, HH:MM. Omit when unknown (noon is used).
    #[arg(long)]
    time: Option<String>,

    /// UTC offset in force at the birthplace, e.g. +05:30.
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    utc_offset: String,

    /// Latitude in decimal degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
}

#[derive(Args, Debug)]
struct CompatArgs {
    #[arg(long)]
    a_date: String,
    #[arg(long)]
    a_time: Option<String>,
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    a_utc_offset: String,
    #[arg(long, allow_hyphen_values = true)]
    a_lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    a_lon: Option<f64>,

    #[arg(long)]
    b_date: String,
    #[arg(long)]
    b_time: Option<String>,
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    b_utc_offset: String,
    #[arg(long, allow_hyphen_values = true)]
    b_lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    b_lon: Option<f64>,
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<ChartSettings> {
    match path {
        Some(path) => harmonia_config::load_chart_settings_from(path),
        None => match harmonia_config::load_chart_settings() {
            Ok(settings) => Ok(settings),
            Err(e) => {
                debug!("Using default settings: {e}");
                Ok(ChartSettings::default())
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(tier) = cli.tier {
        settings = settings.with_tier(tier);
    }
    info!("Accuracy tier: {}", settings.tier);

    match cli.command {
        Command::Chart(args) => {
            let birth = birth::birth_data(
                &args.date,
                args.time.as_deref(),
                &args.utc_offset,
                args.lat,
                args.lon,
            )?;
            let report = compute_report(&birth, &settings).context("Failed to compute chart")?;
            print_json(&report, cli.pretty)
        }
        Command::Compat(args) => {
            let a = birth::birth_data(
                &args.a_date,
                args.a_time.as_deref(),
                &args.a_utc_offset,
                args.a_lat,
                args.a_lon,
            )
            .context("Person A")?;
            let b = birth::birth_data(
                &args.b_date,
                args.b_time.as_deref(),
                &args.b_utc_offset,
                args.b_lat,
                args.b_lon,
            )
            .context("Person B")?;

            let report_a = compute_report(&a, &settings).context("Failed to compute chart for person A")?;
            let report_b = compute_report(&b, &settings).context("Failed to compute chart for person B")?;
            let calculator = AspectCalculator::new(settings.aspects.clone());
            print_json(&compute_compatibility(&report_a, &report_b, &calculator), cli.pretty)
        }
    }
}
