use chrono::{DateTime, Days, Duration, Local, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    model::{LabelFormat, ReadingView, WeatherInterval, WeatherReading},
    provider::{SampleProvider, WeatherProvider},
    units::MeasurementSystem,
};

/// One current reading plus hourly and daily forecasts, all sharing a
/// measurement system. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDataSource {
    system: MeasurementSystem,
    current: WeatherReading,
    short_term: Vec<WeatherReading>,
    long_term: Vec<WeatherReading>,
}

impl WeatherDataSource {
    /// Build from the sample provider, with forecasts relative to now in
    /// the local calendar.
    pub fn new(system: MeasurementSystem) -> Self {
        Self::at(system, Local::now())
    }

    /// Build from the sample provider, with forecasts relative to `base`.
    pub fn at<Z: TimeZone>(system: MeasurementSystem, base: DateTime<Z>) -> Self {
        Self::from_provider(system, base, &SampleProvider)
    }

    /// Hourly readings land at `base` + 1h, +2h, ... of elapsed time; daily
    /// readings at the same wall-clock time 1, 2, ... calendar days later in
    /// `base`'s zone.
    pub fn from_provider<Z: TimeZone>(
        system: MeasurementSystem,
        base: DateTime<Z>,
        provider: &dyn WeatherProvider,
    ) -> Self {
        let current = WeatherReading::new(system, WeatherInterval::Instant, provider.current());
        let start = base.with_timezone(&Utc);

        let short_term: Vec<_> = (1..)
            .zip(provider.hourly())
            .map(|(offset, raw)| {
                WeatherReading::new(system, WeatherInterval::Hour(start + Duration::hours(offset)), raw)
            })
            .collect();

        let long_term: Vec<_> = (1..)
            .zip(provider.daily())
            .map(|(offset, raw)| {
                WeatherReading::new(system, WeatherInterval::Day(days_later(&base, offset)), raw)
            })
            .collect();

        debug!(
            ?provider,
            %system,
            base = %start,
            hourly = short_term.len(),
            daily = long_term.len(),
            "built weather data source"
        );

        Self { system, current, short_term, long_term }
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        self.system
    }

    pub fn current_weather(&self) -> &WeatherReading {
        &self.current
    }

    /// Hourly readings in chronological order.
    pub fn short_term_weather(&self) -> &[WeatherReading] {
        &self.short_term
    }

    /// Daily readings in chronological order.
    pub fn long_term_weather(&self) -> &[WeatherReading] {
        &self.long_term
    }

    /// Display values of every reading, for serializing a whole face.
    pub fn snapshot(&self, format: &LabelFormat) -> FaceSnapshot {
        FaceSnapshot {
            measurement_system: self.system,
            current: self.current.view(format),
            short_term: self.short_term.iter().map(|r| r.view(format)).collect(),
            long_term: self.long_term.iter().map(|r| r.view(format)).collect(),
        }
    }
}

// Same local time `days` calendar days on. When that time falls in a DST
// gap, elapsed 24h steps are used instead; both land on the target date.
fn days_later<Z: TimeZone>(base: &DateTime<Z>, days: u32) -> DateTime<Utc> {
    base.naive_local()
        .checked_add_days(Days::new(u64::from(days)))
        .and_then(|local| base.timezone().from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| base.with_timezone(&Utc) + Duration::days(i64::from(days)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceSnapshot {
    pub measurement_system: MeasurementSystem,
    pub current: ReadingView,
    pub short_term: Vec<ReadingView>,
    pub long_term: Vec<ReadingView>,
}
