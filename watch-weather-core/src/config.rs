use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::Error,
    model::{DEFAULT_DAY_PATTERN, DEFAULT_HOUR_PATTERN, LabelFormat},
    units::MeasurementSystem,
};

/// strftime patterns for interval labels, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPatterns {
    pub hour: String,
    pub day: String,
    /// IANA zone name; labels use the system calendar when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl Default for LabelPatterns {
    fn default() -> Self {
        Self {
            hour: DEFAULT_HOUR_PATTERN.to_string(),
            day: DEFAULT_DAY_PATTERN.to_string(),
            time_zone: None,
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// measurement_system = "us-customary"
///
/// [labels]
/// hour = "%H:%M"
/// day = "%a %-d"
/// time_zone = "America/New_York"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub measurement_system: MeasurementSystem,
    pub labels: LabelPatterns,
}

impl Config {
    pub fn set_measurement_system(&mut self, system: MeasurementSystem) {
        self.measurement_system = system;
    }

    /// Validated label format built from the configured patterns.
    pub fn label_format(&self) -> Result<LabelFormat> {
        let format = LabelFormat::new(self.labels.hour.as_str(), self.labels.day.as_str())
            .context("Invalid [labels] section in config")?;

        let Some(name) = self.labels.time_zone.as_deref() else {
            return Ok(format);
        };
        let tz = name
            .parse::<Tz>()
            .map_err(|_| Error::UnknownTimeZone(name.to_string()))
            .context("Invalid [labels] section in config")?;

        Ok(format.with_zone(tz))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), system = %cfg.measurement_system, "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "watch-weather", "watch-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
