use std::fmt::{self, Write};

use watch_weather_core::{LabelFormat, WeatherDataSource};

const COLUMN: usize = 7;

/// Render the data source as a plain-text watch face: the current block,
/// a strip of hourly columns, then one row per day.
pub fn render(source: &WeatherDataSource, format: &LabelFormat) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_face(&mut out, source, format)?;
    Ok(out)
}

fn write_face(out: &mut String, source: &WeatherDataSource, format: &LabelFormat) -> fmt::Result {
    let current = source.current_weather();

    writeln!(out, "{}  {}", current.interval_label_with(format), current.temperature_label())?;
    writeln!(out, "{} [{}]", current.condition_label(), current.condition_image_key())?;
    writeln!(out, "{}", current.feel_temperature_label())?;
    writeln!(out, "{}", current.high_low_label())?;
    writeln!(out, "Wind {}", current.wind_label())?;
    writeln!(out)?;

    let hourly = source.short_term_weather();
    for row in [
        hourly.iter().map(|r| r.interval_label_with(format)).collect::<Vec<_>>(),
        hourly.iter().map(|r| r.temperature_label()).collect(),
        hourly.iter().map(|r| r.condition_label().to_string()).collect(),
    ] {
        let line: String = row.iter().map(|cell| format!("{cell:<COLUMN$}")).collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)?;

    for day in source.long_term_weather() {
        writeln!(
            out,
            "{:<8}{:<8}{:<14}{}",
            day.interval_label_with(format),
            day.condition_label(),
            day.high_low_label(),
            day.wind_label()
        )?;
    }

    Ok(())
}
