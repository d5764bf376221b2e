use chrono::{DateTime, FixedOffset};
use std::fmt;

use crate::error::{NwsError, Result};

/// Precipitation chances below this are left out of the summary line.
const RAIN_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

/// A public forecast zone, as listed for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: usize,
    pub name: String,
    pub zone_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: usize,
    pub name: String,
    pub station_identifier: String,
    pub coordinate: Coordinate,
}

impl From<&Station> for Coordinate {
    fn from(station: &Station) -> Self {
        station.coordinate
    }
}

/// One period of the hourly forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastHour {
    pub number: u32,
    pub start_time: String,
    pub end_time: String,
    /// `yyyyMMdd` of `start_time` in its own offset; `None` when it didn't parse.
    pub day: Option<String>,
    pub temperature: i32,
    pub short_forecast: String,
    pub precipitation_chance: i32,
    pub wind_speed: Option<String>,
    pub wind_direction: Option<String>,
}

impl ForecastHour {
    /// Start a period from its start time. The day key is derived here and
    /// silently left empty if the timestamp is unusable.
    pub fn new(start_time: impl Into<String>) -> Self {
        let start_time = start_time.into();
        let day = parse_timestamp(&start_time)
            .ok()
            .map(|t| t.format("%Y%m%d").to_string());

        Self {
            number: 0,
            start_time,
            end_time: String::new(),
            day,
            temperature: 0,
            short_forecast: String::new(),
            precipitation_chance: 0,
            wind_speed: None,
            wind_direction: None,
        }
    }

    pub fn display_temperature(&self) -> String {
        format!("{} F", self.temperature)
    }

    pub fn display_summary(&self) -> String {
        let time = display_time(&self.start_time).unwrap_or_default();
        let rain = if self.precipitation_chance >= RAIN_THRESHOLD {
            format!(" w/ {}% chance of rain", self.precipitation_chance)
        } else {
            String::new()
        };

        format!(
            "{:<5} {:<5} | {}{}",
            time,
            self.display_temperature(),
            self.short_forecast,
            rain
        )
    }
}

/// "2024-01-05T15:00:00-05:00" -> "3pm"
pub fn display_time(timestamp: &str) -> Result<String> {
    Ok(parse_timestamp(timestamp)?.format("%-I%P").to_string())
}

/// "2024-01-05T15:00:00-05:00" -> "Friday, January 5, 2024"
pub fn display_day(timestamp: &str) -> Result<String> {
    Ok(parse_timestamp(timestamp)?
        .format("%A, %B %-d, %Y")
        .to_string())
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<FixedOffset>> {
    let timestamp = timestamp.trim();
    if timestamp.is_empty() {
        return Err(NwsError::parse("missing timestamp"));
    }

    DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| NwsError::parse(format!("invalid timestamp '{timestamp}': {e}")))
}
