//! Core library for the `watch-weather` face.
//!
//! This crate defines:
//! - Measurement systems and unit conversion
//! - Immutable weather readings and their display labels
//! - A data source that assembles current, hourly and daily readings
//! - Configuration handling
//!
//! It is used by `watch-weather-cli`, but any presentation layer can read
//! a [`WeatherDataSource`] the same way.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod source;
pub mod units;

pub use config::{Config, LabelPatterns};
pub use error::Error;
pub use model::{LabelFormat, LabelZone, RawReading, ReadingView, WeatherCondition, WeatherInterval, WeatherReading};
pub use provider::{SampleProvider, WeatherProvider};
pub use source::{FaceSnapshot, WeatherDataSource};
pub use units::MeasurementSystem;
