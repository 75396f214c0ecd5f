use chrono::{
    DateTime, Local, TimeZone, Utc,
    format::{Item, StrftimeItems},
};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt::{self, Display};

use crate::{error::Error, units::MeasurementSystem};

/// Default hour label pattern, renders as `3PM`.
pub const DEFAULT_HOUR_PATTERN: &str = "%-I%p";
/// Default day label pattern, renders as `Mon 4`.
pub const DEFAULT_DAY_PATTERN: &str = "%a %-d";

/// Point or span of time a reading describes.
///
/// Stamps are absolute instants; they are shifted into the label time zone
/// only when a label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherInterval {
    /// Current conditions.
    Instant,
    Hour(DateTime<Utc>),
    Day(DateTime<Utc>),
}

impl WeatherInterval {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            WeatherInterval::Instant => None,
            WeatherInterval::Hour(time) => Some(*time),
            WeatherInterval::Day(date) => Some(*date),
        }
    }
}

/// Sky condition. The name is both the display label and the image key,
/// so every variant needs a matching image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rain,
    Snow,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
        }
    }

    pub const fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::Rain,
            WeatherCondition::Snow,
        ]
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar that interval labels are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelZone {
    /// The system's local calendar, including its DST rules.
    #[default]
    Local,
    Named(Tz),
}

impl LabelZone {
    fn render(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        match self {
            LabelZone::Local => render_in(&Local, instant, pattern),
            LabelZone::Named(tz) => render_in(tz, instant, pattern),
        }
    }
}

fn render_in<Z: TimeZone>(zone: &Z, instant: DateTime<Utc>, pattern: &str) -> String
where
    Z::Offset: Display,
{
    instant.with_timezone(zone).format(pattern).to_string()
}

/// strftime patterns and calendar used for hour and day labels.
///
/// Patterns are checked on construction, so formatting with a `LabelFormat`
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    hour: String,
    day: String,
    zone: LabelZone,
}

impl LabelFormat {
    pub fn new(hour: impl Into<String>, day: impl Into<String>) -> Result<Self, Error> {
        let hour = hour.into();
        let day = day.into();
        validate_pattern(&hour)?;
        validate_pattern(&day)?;
        Ok(Self { hour, day, zone: LabelZone::Local })
    }

    /// Render labels in `tz` instead of the local calendar.
    pub fn with_zone(self, tz: Tz) -> Self {
        Self { zone: LabelZone::Named(tz), ..self }
    }

    pub fn zone(&self) -> LabelZone {
        self.zone
    }

    pub fn hour_pattern(&self) -> &str {
        &self.hour
    }

    pub fn day_pattern(&self) -> &str {
        &self.day
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            hour: DEFAULT_HOUR_PATTERN.to_string(),
            day: DEFAULT_DAY_PATTERN.to_string(),
            zone: LabelZone::Local,
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<(), Error> {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidLabelPattern { pattern: pattern.to_string() });
    }
    Ok(())
}

/// Raw metric values for one reading, as a provider hands them over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReading {
    /// °C
    pub temperature: i32,
    pub feel_temperature: i32,
    pub high_temperature: i32,
    pub low_temperature: i32,
    /// km/h
    pub wind_speed: i32,
    /// Compass abbreviation, e.g. "NE".
    pub wind_direction: String,
    pub condition: WeatherCondition,
}

/// Immutable weather snapshot for one interval.
///
/// Values are stored in metric units; every accessor converts on read
/// according to the measurement system fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    system: MeasurementSystem,
    interval: WeatherInterval,
    raw: RawReading,
}

impl WeatherReading {
    pub fn new(system: MeasurementSystem, interval: WeatherInterval, raw: RawReading) -> Self {
        Self { system, interval, raw }
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        self.system
    }

    pub fn interval(&self) -> WeatherInterval {
        self.interval
    }

    pub fn raw(&self) -> &RawReading {
        &self.raw
    }

    pub fn condition(&self) -> WeatherCondition {
        self.raw.condition
    }

    pub fn wind_direction(&self) -> &str {
        &self.raw.wind_direction
    }

    pub fn temperature(&self) -> i32 {
        self.system.temperature(self.raw.temperature)
    }

    pub fn feel_temperature(&self) -> i32 {
        self.system.temperature(self.raw.feel_temperature)
    }

    pub fn high_temperature(&self) -> i32 {
        self.system.temperature(self.raw.high_temperature)
    }

    pub fn low_temperature(&self) -> i32 {
        self.system.temperature(self.raw.low_temperature)
    }

    pub fn wind_speed(&self) -> i32 {
        self.system.speed(self.raw.wind_speed)
    }

    /// Interval label using the default patterns.
    pub fn interval_label(&self) -> String {
        self.interval_label_with(&LabelFormat::default())
    }

    pub fn interval_label_with(&self, format: &LabelFormat) -> String {
        match self.interval {
            WeatherInterval::Instant => "Now".to_string(),
            WeatherInterval::Hour(time) => format.zone.render(time, format.hour_pattern()),
            WeatherInterval::Day(date) => format.zone.render(date, format.day_pattern()),
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°", self.temperature())
    }

    pub fn feel_temperature_label(&self) -> String {
        format!("Feels like {}°", self.feel_temperature())
    }

    pub fn high_low_label(&self) -> String {
        format!("H:{}° L:{}°", self.high_temperature(), self.low_temperature())
    }

    pub fn condition_label(&self) -> &'static str {
        self.raw.condition.as_str()
    }

    pub fn condition_image_key(&self) -> &'static str {
        self.raw.condition.as_str()
    }

    pub fn wind_label(&self) -> String {
        format!(
            "{}{} {}",
            self.wind_speed(),
            self.system.speed_unit(),
            self.raw.wind_direction
        )
    }

    /// Display-ready snapshot of this reading.
    pub fn view(&self, format: &LabelFormat) -> ReadingView {
        ReadingView {
            interval: self.interval_label_with(format),
            time: self.interval.timestamp(),
            temperature: self.temperature(),
            feel_temperature: self.feel_temperature(),
            high_temperature: self.high_temperature(),
            low_temperature: self.low_temperature(),
            wind_speed: self.wind_speed(),
            temperature_label: self.temperature_label(),
            feel_temperature_label: self.feel_temperature_label(),
            condition_label: self.condition_label(),
            condition_image_key: self.condition_image_key(),
            wind_label: self.wind_label(),
        }
    }
}

/// Converted values and labels of one reading, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingView {
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub temperature: i32,
    pub feel_temperature: i32,
    pub high_temperature: i32,
    pub low_temperature: i32,
    pub wind_speed: i32,
    pub temperature_label: String,
    pub feel_temperature_label: String,
    pub condition_label: &'static str,
    pub condition_image_key: &'static str,
    pub wind_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::{America::New_York, UTC};

    fn raw() -> RawReading {
        RawReading {
            temperature: 16,
            feel_temperature: 14,
            high_temperature: 19,
            low_temperature: 9,
            wind_speed: 8,
            wind_direction: "NE".to_string(),
            condition: WeatherCondition::Cloudy,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).single().expect("valid test timestamp")
    }

    fn utc_labels() -> LabelFormat {
        LabelFormat::default().with_zone(UTC)
    }

    #[test]
    fn metric_reading_passes_values_through() {
        let reading = WeatherReading::new(MeasurementSystem::Metric, WeatherInterval::Instant, raw());

        assert_eq!(reading.temperature(), 16);
        assert_eq!(reading.feel_temperature(), 14);
        assert_eq!(reading.high_temperature(), 19);
        assert_eq!(reading.low_temperature(), 9);
        assert_eq!(reading.wind_speed(), 8);
        assert_eq!(reading.temperature_label(), "16°");
        assert_eq!(reading.feel_temperature_label(), "Feels like 14°");
        assert_eq!(reading.wind_label(), "8km/h NE");
    }

    #[test]
    fn us_customary_reading_converts_on_read() {
        let reading =
            WeatherReading::new(MeasurementSystem::UsCustomary, WeatherInterval::Instant, raw());

        assert_eq!(reading.temperature(), 60);
        assert_eq!(reading.feel_temperature(), 57);
        assert_eq!(reading.high_temperature(), 66);
        assert_eq!(reading.low_temperature(), 48);
        assert_eq!(reading.wind_speed(), 4);
        assert_eq!(reading.temperature_label(), "60°");
        assert_eq!(reading.high_low_label(), "H:66° L:48°");
        assert_eq!(reading.wind_label(), "4MPH NE");
        assert!(reading.wind_label().split(' ').next().is_some_and(|s| s.ends_with("MPH")));
        // raw values stay metric
        assert_eq!(reading.raw().temperature, 16);
    }

    #[test]
    fn condition_label_matches_image_key() {
        for condition in WeatherCondition::all() {
            let reading = WeatherReading::new(
                MeasurementSystem::Metric,
                WeatherInterval::Instant,
                RawReading { condition: *condition, ..raw() },
            );
            assert_eq!(reading.condition_label(), reading.condition_image_key());
            assert_eq!(reading.condition_label(), condition.to_string());
        }
    }

    #[test]
    fn instant_is_labelled_now_in_every_system() {
        for system in MeasurementSystem::all() {
            let reading = WeatherReading::new(*system, WeatherInterval::Instant, raw());
            assert_eq!(reading.interval_label(), "Now");
        }
    }

    #[test]
    fn hour_and_day_labels_use_default_patterns() {
        let hour = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Hour(at(2024, 3, 4, 15)),
            raw(),
        );
        let morning = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Hour(at(2024, 3, 4, 9)),
            raw(),
        );
        let day = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Day(at(2024, 3, 4, 15)),
            raw(),
        );

        assert_eq!(hour.interval_label_with(&utc_labels()), "3PM");
        assert_eq!(morning.interval_label_with(&utc_labels()), "9AM");
        assert_eq!(day.interval_label_with(&utc_labels()), "Mon 4");
    }

    #[test]
    fn labels_follow_the_zone_calendar_across_dst() {
        let format = LabelFormat::default().with_zone(New_York);
        // 06:30 UTC is 1:30 EST; an hour later clocks have jumped to 3:30 EDT.
        let before = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Hour(at(2024, 3, 10, 6) + chrono::Duration::minutes(30)),
            raw(),
        );
        let after = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Hour(at(2024, 3, 10, 7) + chrono::Duration::minutes(30)),
            raw(),
        );
        let late_day = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Day(at(2024, 3, 5, 3)),
            raw(),
        );

        assert_eq!(before.interval_label_with(&format), "1AM");
        assert_eq!(after.interval_label_with(&format), "3AM");
        // 03:00 UTC on the 5th is still the evening of Mon 4 in New York.
        assert_eq!(late_day.interval_label_with(&format), "Mon 4");
        assert_eq!(late_day.interval_label_with(&utc_labels()), "Tue 5");
    }

    #[test]
    fn custom_label_format() {
        let format = LabelFormat::new("%H:%M", "%d/%m").expect("valid patterns").with_zone(UTC);
        let hour = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Hour(at(2024, 3, 4, 15)),
            raw(),
        );
        let day = WeatherReading::new(
            MeasurementSystem::Metric,
            WeatherInterval::Day(at(2024, 3, 4, 15)),
            raw(),
        );

        assert_eq!(hour.interval_label_with(&format), "15:00");
        assert_eq!(day.interval_label_with(&format), "04/03");
    }

    #[test]
    fn invalid_label_pattern_is_rejected() {
        let err = LabelFormat::new("%Q", DEFAULT_DAY_PATTERN).unwrap_err();
        assert!(err.to_string().contains("Invalid label pattern"));
        assert!(LabelFormat::new(DEFAULT_HOUR_PATTERN, "").is_err());
    }

    #[test]
    fn view_serializes_display_values() {
        let reading = WeatherReading::new(
            MeasurementSystem::UsCustomary,
            WeatherInterval::Instant,
            raw(),
        );
        let json = serde_json::to_value(reading.view(&LabelFormat::default()))
            .expect("view should serialize");

        assert_eq!(json["interval"], "Now");
        assert_eq!(json["temperature"], 60);
        assert_eq!(json["wind_label"], "4MPH NE");
        assert_eq!(json["condition_image_key"], "Cloudy");
        assert!(json.get("time").is_none());
    }
}
