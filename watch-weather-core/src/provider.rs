use std::fmt::Debug;

use crate::model::RawReading;

pub mod sample;

pub use sample::SampleProvider;

/// Source of raw metric readings for a data source.
///
/// Readings are returned in chronological order; the data source stamps
/// them with their intervals.
pub trait WeatherProvider: Send + Sync + Debug {
    /// Conditions right now.
    fn current(&self) -> RawReading;

    /// Readings for the hours following the base time, one per hour.
    fn hourly(&self) -> Vec<RawReading>;

    /// Readings for the days following the base time, one per day.
    fn daily(&self) -> Vec<RawReading>;
}
