// src/main.rs - Print the resolved pin map of the running board
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use ti_gpio::{GpioLine, NumberingMode, Resolution, Resolver, ResolverConfig};

/// Board pin resolution inspector
#[derive(Parser, Debug)]
#[command(name = "ti-gpio-info", about = "Show how header pins map to GPIO and PWM sysfs resources.")]
struct Cli {
    /// Path to a TOML config file (overrides defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Numbering mode to list channels in (board, bcm, soc)
    #[arg(short, long, default_value = "board")]
    mode: NumberingMode,

    /// Dump the whole resolution as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => match ti_gpio::load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config from '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ResolverConfig::default(),
    };

    let resolution = match Resolver::new(config).resolve() {
        Ok(resolution) => resolution,
        Err(e) => {
            tracing::error!("Pin resolution failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&resolution) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize resolution: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_table(&resolution, cli.mode);
    }
    ExitCode::SUCCESS
}

fn print_table(resolution: &Resolution, mode: NumberingMode) {
    println!("Model: {}", resolution.model);
    for (key, value) in resolution.info.iter() {
        println!("  {:<13}{}", key, value);
    }
    println!();
    println!("{:<10} {:>5} {:>6} {:<10} PWM", mode.as_str(), "CHIP", "LINE", "NAME");
    for info in resolution.channels.table(mode) {
        let name = match &info.line {
            GpioLine::Global { name, .. } => name.as_str(),
            GpioLine::ChipRelative { .. } => "-",
        };
        let pwm = match (info.pwm(), info.pwm_id) {
            (Some((dir, id)), _) => format!("{} #{}", dir.display(), id),
            (None, Some(id)) => format!("unavailable (#{})", id),
            (None, None) => "-".to_string(),
        };
        println!(
            "{:<10} {:>5} {:>6} {:<10} {}",
            info.channel.to_string(),
            info.gpio_chip,
            info.line.number(),
            name,
            pwm
        );
    }
}
