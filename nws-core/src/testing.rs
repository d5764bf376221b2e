//! In-memory stand-ins for the network and the console.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::{
    client::JsonSource,
    error::{NwsError, Result},
    prompt::Prompt,
};

pub const BASE_URL: &str = "https://api.test";

#[derive(Debug)]
enum Canned {
    Body(String),
    Status(StatusCode),
}

/// Serves canned bodies by exact URL; unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct FakeSource {
    responses: HashMap<String, Canned>,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Canned::Body(body.into()));
        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.responses.insert(url.into(), Canned::Status(status));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock").clone()
    }
}

#[async_trait]
impl JsonSource for FakeSource {
    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        self.requested.lock().expect("lock").push(url.to_string());

        match self.responses.get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(NwsError::RequestFailed {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(NwsError::RequestFailed {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}

/// Answers prompts from a script and records everything shown.
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn count_printed(&self, needle: &str) -> usize {
        self.output.iter().filter(|line| line.contains(needle)).count()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or_else(NwsError::end_of_input)
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

pub fn zones_body(zones: &[(&str, &str)]) -> String {
    let features: Vec<_> = zones
        .iter()
        .map(|(id, name)| serde_json::json!({ "properties": { "id": id, "name": name } }))
        .collect();

    serde_json::json!({ "type": "FeatureCollection", "features": features }).to_string()
}

pub fn stations_body(stations: &[(&str, &str, f64, f64)]) -> String {
    let features: Vec<_> = stations
        .iter()
        .map(|(code, name, lat, lon)| {
            serde_json::json!({
                "geometry": { "type": "Point", "coordinates": [lon, lat] },
                "properties": { "stationIdentifier": code, "name": name }
            })
        })
        .collect();

    serde_json::json!({ "type": "FeatureCollection", "features": features }).to_string()
}

pub fn points_body(forecast_hourly: Option<&str>) -> String {
    let body = match forecast_hourly {
        Some(url) => serde_json::json!({ "properties": { "forecastHourly": url } }),
        None => serde_json::json!({ "properties": { "gridId": "OKX" } }),
    };
    body.to_string()
}

/// `(start_time, temperature, short_forecast, precipitation)`
pub fn hourly_body(periods: &[(&str, i32, &str, i32)]) -> String {
    let periods: Vec<_> = periods
        .iter()
        .enumerate()
        .map(|(i, (start, temp, forecast, rain))| {
            serde_json::json!({
                "number": i + 1,
                "startTime": start,
                "endTime": start,
                "temperature": temp,
                "shortForecast": forecast,
                "probabilityOfPrecipitation": { "unitCode": "wmoUnit:percent", "value": rain },
                "windSpeed": "5 mph",
                "windDirection": "NW"
            })
        })
        .collect();

    serde_json::json!({ "properties": { "periods": periods } }).to_string()
}
