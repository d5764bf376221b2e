//! Coordinate -> hourly forecast report.

use tracing::{debug, warn};

use crate::{
    api,
    client::JsonSource,
    error::Result,
    model::{Coordinate, ForecastHour, display_day},
};

pub const NO_HOURLY_FORECAST: &str = "Error: Could not get hourly forecast.";
pub const FORECAST_FAILED: &str = "Error: Could not retrieve forecast.";

/// Fetch and render the hourly forecast for `coordinate`.
///
/// Never fails: any problem along the way comes back as a one-line error
/// message in place of the report.
pub async fn forecast_report(source: &dyn JsonSource, coordinate: &Coordinate) -> String {
    match try_forecast_report(source, coordinate).await {
        Ok(report) => report,
        Err(e) => {
            warn!(%coordinate, error = %e, "forecast failed");
            FORECAST_FAILED.to_string()
        }
    }
}

async fn try_forecast_report(source: &dyn JsonSource, coordinate: &Coordinate) -> Result<String> {
    let url = api::points_url(source.base_url(), coordinate);
    let body = source.get_text(&url).await?;
    let points: api::points::Response = serde_json::from_str(&body)?;

    let Some(hourly_url) = points.forecast_hourly() else {
        return Ok(NO_HOURLY_FORECAST.to_string());
    };
    debug!(%hourly_url, "resolved hourly forecast");

    let hours = fetch_hourly(source, &hourly_url).await?;
    render_report(&hours)
}

pub async fn fetch_hourly(source: &dyn JsonSource, url: &str) -> Result<Vec<ForecastHour>> {
    let body = source.get_text(url).await?;
    let res: api::hourly::Response = serde_json::from_str(&body)?;
    Ok(res.into_hours())
}

/// Render periods, starting a new day section whenever the day key changes.
pub fn render_report(hours: &[ForecastHour]) -> Result<String> {
    let mut report = String::new();
    let mut current_day: Option<&Option<String>> = None;

    for hour in hours {
        if current_day != Some(&hour.day) {
            current_day = Some(&hour.day);
            report.push_str(&format!(
                "\n\n---------- {} ----------",
                display_day(&hour.start_time)?
            ));
        }

        report.push_str("\n   ");
        report.push_str(&hour.display_summary());
    }

    Ok(report)
}
