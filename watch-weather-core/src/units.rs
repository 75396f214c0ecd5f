use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::Error;

const KM_PER_MILE: f64 = 1.60934;

/// Unit system readings are displayed in.
///
/// Raw readings are always stored in metric units; this only selects how
/// they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementSystem {
    /// Celsius and km/h.
    #[default]
    Metric,
    /// Fahrenheit and mi/h.
    UsCustomary,
}

impl MeasurementSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::UsCustomary => "us-customary",
        }
    }

    pub const fn all() -> &'static [MeasurementSystem] {
        &[MeasurementSystem::Metric, MeasurementSystem::UsCustomary]
    }

    /// Convert a raw Celsius temperature into this system's unit.
    pub fn temperature(&self, celsius: i32) -> i32 {
        match self {
            MeasurementSystem::Metric => identity(celsius),
            MeasurementSystem::UsCustomary => celsius_to_fahrenheit(celsius),
        }
    }

    /// Convert a raw km/h wind speed into this system's unit.
    pub fn speed(&self, kmh: i32) -> i32 {
        match self {
            MeasurementSystem::Metric => identity(kmh),
            MeasurementSystem::UsCustomary => km_to_miles(kmh),
        }
    }

    /// Suffix appended to wind speeds, e.g. `"km/h"`.
    pub fn speed_unit(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "km/h",
            MeasurementSystem::UsCustomary => "MPH",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(MeasurementSystem::Metric),
            "us" | "us-customary" | "imperial" => Ok(MeasurementSystem::UsCustomary),
            _ => Err(Error::UnknownMeasurementSystem(value.to_string())),
        }
    }
}

// All conversions truncate toward zero, so they do not round-trip exactly.

pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0) as i32
}

pub fn fahrenheit_to_celsius(fahrenheit: i32) -> i32 {
    ((f64::from(fahrenheit) - 32.0) * 5.0 / 9.0) as i32
}

pub fn identity(value: i32) -> i32 {
    value
}

pub fn km_to_miles(km: i32) -> i32 {
    (f64::from(km) / KM_PER_MILE) as i32
}

pub fn miles_to_km(miles: i32) -> i32 {
    (f64::from(miles) * KM_PER_MILE) as i32
}
