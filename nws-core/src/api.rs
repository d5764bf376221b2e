//! NWS endpoint URLs and the slices of their GeoJSON responses we read.

use reqwest::Url;

use crate::{
    error::{NwsError, Result},
    model::Coordinate,
};

pub fn zones_url(base_url: &str, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &format!("{base_url}/zones"),
        &[("area", state), ("type", "public")],
    )
    .map_err(|e| NwsError::parse(format!("invalid zones url: {e}")))?;

    Ok(url.to_string())
}

pub fn stations_url(base_url: &str, zone_id: &str) -> String {
    format!("{base_url}/zones/forecast/{zone_id}/stations")
}

pub fn points_url(base_url: &str, coordinate: &Coordinate) -> String {
    format!(
        "{base_url}/points/{},{}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

pub mod zones {
    use serde::Deserialize;

    use crate::model::Zone;

    #[derive(Debug, Deserialize)]
    struct Properties {
        id: String,
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Feature {
        properties: Properties,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        features: Vec<Feature>,
    }

    impl Response {
        pub fn into_zones(self) -> Vec<Zone> {
            self.features
                .into_iter()
                .enumerate()
                .map(|(id, f)| Zone {
                    id,
                    name: f.properties.name,
                    zone_id: f.properties.id,
                })
                .collect()
        }
    }
}

pub mod stations {
    use serde::{Deserialize, Deserializer, de::Error};

    use crate::model::{Coordinate, Station};

    #[derive(Debug, Deserialize)]
    struct Point {
        #[serde(deserialize_with = "lng_lat")]
        coordinates: (f64, f64),
    }

    /// GeoJSON positions are `[lng, lat]` with an optional altitude after.
    fn lng_lat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(f64, f64), D::Error> {
        let position = Vec::<f64>::deserialize(deserializer)?;
        match position[..] {
            [lng, lat, ..] => Ok((lng, lat)),
            _ => Err(D::Error::invalid_length(
                position.len(),
                &"a position with at least 2 elements",
            )),
        }
    }

    impl Point {
        fn to_coordinate(&self) -> Coordinate {
            let (lng, lat) = self.coordinates;
            Coordinate::new(lat, lng)
        }
    }

    #[derive(Debug, Deserialize)]
    struct Properties {
        #[serde(rename = "stationIdentifier")]
        id: String,
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Feature {
        geometry: Point,
        properties: Properties,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        features: Vec<Feature>,
    }

    impl Response {
        pub fn into_stations(self) -> Vec<Station> {
            self.features
                .into_iter()
                .enumerate()
                .map(|(id, f)| Station {
                    id,
                    coordinate: f.geometry.to_coordinate(),
                    name: f.properties.name,
                    station_identifier: f.properties.id,
                })
                .collect()
        }
    }
}

pub mod points {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Properties {
        #[serde(rename = "forecastHourly", default)]
        forecast_hourly: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        properties: Properties,
    }

    impl Response {
        pub fn forecast_hourly(self) -> Option<String> {
            self.properties.forecast_hourly
        }
    }
}

pub mod hourly {
    use serde::Deserialize;

    use crate::model::ForecastHour;

    #[derive(Debug, Deserialize)]
    struct Probability {
        value: i32,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Period {
        number: u32,
        start_time: String,
        end_time: String,
        temperature: i32,
        short_forecast: String,
        probability_of_precipitation: Probability,
        #[serde(default)]
        wind_speed: Option<String>,
        #[serde(default)]
        wind_direction: Option<String>,
    }

    impl From<Period> for ForecastHour {
        fn from(p: Period) -> Self {
            ForecastHour {
                number: p.number,
                end_time: p.end_time,
                temperature: p.temperature,
                short_forecast: p.short_forecast,
                precipitation_chance: p.probability_of_precipitation.value,
                wind_speed: p.wind_speed,
                wind_direction: p.wind_direction,
                ..ForecastHour::new(p.start_time)
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct Properties {
        periods: Vec<Period>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        properties: Properties,
    }

    impl Response {
        pub fn into_hours(self) -> Vec<ForecastHour> {
            self.properties.periods.into_iter().map(ForecastHour::from).collect()
        }
    }
}
