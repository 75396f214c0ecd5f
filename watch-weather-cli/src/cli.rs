use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Select;
use tracing::info;
use watch_weather_core::{Config, MeasurementSystem, WeatherDataSource};

use crate::face;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "watch-weather", version, about = "Weather watch face")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the measurement system used by default.
    Configure,

    /// Show the watch face.
    Show {
        /// Override the configured measurement system ("metric" or "us").
        #[arg(long)]
        units: Option<MeasurementSystem>,

        /// Print display values as JSON instead of a text face.
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the config file.
    ConfigPath,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { units, json } => show(units, json)?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let options = MeasurementSystem::all().to_vec();
    let start = options
        .iter()
        .position(|s| *s == config.measurement_system)
        .unwrap_or_default();

    let system = Select::new("Measurement system:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read measurement system")?;

    config.set_measurement_system(system);
    config.save()?;

    info!(%system, "measurement system configured");
    println!("Saved measurement system: {system}");
    Ok(())
}

fn show(units: Option<MeasurementSystem>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let format = config.label_format()?;
    let system = units.unwrap_or(config.measurement_system);

    let source = WeatherDataSource::new(system);

    if json {
        let out = serde_json::to_string_pretty(&source.snapshot(&format))
            .context("Failed to serialize watch face")?;
        println!("{out}");
    } else {
        let text = face::render(&source, &format).context("Failed to render watch face")?;
        print!("{text}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_units() {
        let cli = Cli::try_parse_from(["watch-weather", "show", "--units", "us", "--json"])
            .expect("arguments should parse");

        match cli.command {
            Command::Show { units, json } => {
                assert_eq!(units, Some(MeasurementSystem::UsCustomary));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_units() {
        let err = Cli::try_parse_from(["watch-weather", "show", "--units", "kelvin"]).unwrap_err();
        assert!(err.to_string().contains("Unknown measurement system"));
    }
}
