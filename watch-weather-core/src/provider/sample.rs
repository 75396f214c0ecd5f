use crate::model::{RawReading, WeatherCondition};

use super::WeatherProvider;

/// Fixed sample readings used until a live feed exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

// (temperature, feels like, high, low, wind km/h, wind direction, condition)
type Row = (i32, i32, i32, i32, i32, &'static str, WeatherCondition);

const CURRENT: Row = (16, 14, 19, 9, 8, "NE", WeatherCondition::Cloudy);

const HOURLY: [Row; 7] = [
    (17, 15, 19, 9, 10, "NE", WeatherCondition::Cloudy),
    (18, 17, 19, 9, 12, "E", WeatherCondition::Sunny),
    (19, 18, 19, 9, 12, "E", WeatherCondition::Sunny),
    (18, 17, 19, 9, 14, "SE", WeatherCondition::Cloudy),
    (16, 13, 19, 9, 18, "S", WeatherCondition::Rain),
    (14, 11, 19, 9, 20, "S", WeatherCondition::Rain),
    (12, 10, 19, 9, 16, "SW", WeatherCondition::Cloudy),
];

const DAILY: [Row; 5] = [
    (15, 13, 18, 8, 14, "W", WeatherCondition::Rain),
    (13, 10, 16, 6, 22, "NW", WeatherCondition::Rain),
    (9, 5, 11, 2, 26, "N", WeatherCondition::Snow),
    (11, 9, 14, 4, 10, "NE", WeatherCondition::Cloudy),
    (17, 16, 21, 10, 6, "E", WeatherCondition::Sunny),
];

fn to_raw(row: &Row) -> RawReading {
    let (temperature, feel_temperature, high_temperature, low_temperature, wind_speed, dir, condition) =
        *row;
    RawReading {
        temperature,
        feel_temperature,
        high_temperature,
        low_temperature,
        wind_speed,
        wind_direction: dir.to_string(),
        condition,
    }
}

impl WeatherProvider for SampleProvider {
    fn current(&self) -> RawReading {
        to_raw(&CURRENT)
    }

    fn hourly(&self) -> Vec<RawReading> {
        HOURLY.iter().map(to_raw).collect()
    }

    fn daily(&self) -> Vec<RawReading> {
        DAILY.iter().map(to_raw).collect()
    }
}
