//! Drill down state -> zone -> station to pick a coordinate.

use tracing::{info, warn};

use crate::{
    api,
    client::JsonSource,
    error::Result,
    model::{Coordinate, Station, Zone},
    prompt::{Prompt, is_exit},
};

/// States, DC and the inhabited territories NWS zones are published for.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AS", "AR", "AZ", "CA", "CO", "CT", "DE", "DC", //
    "FL", "GA", "GU", "HI", "ID", "IL", "IN", "IA", "KS", "KY", //
    "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", //
    "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", //
    "PA", "PR", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VI", //
    "VA", "WA", "WV", "WI", "WY",
];

/// Trim, uppercase, and check against [`STATE_CODES`].
pub fn normalize_state_code(input: &str) -> Option<String> {
    let code = input.trim().to_uppercase();
    STATE_CODES.contains(&code.as_str()).then_some(code)
}

pub async fn list_zones(source: &dyn JsonSource, state: &str) -> Result<Vec<Zone>> {
    let url = api::zones_url(source.base_url(), state)?;
    let body = source.get_text(&url).await?;
    let res: api::zones::Response = serde_json::from_str(&body)?;
    Ok(res.into_zones())
}

pub async fn list_stations(source: &dyn JsonSource, zone: &Zone) -> Result<Vec<Station>> {
    let url = api::stations_url(source.base_url(), &zone.zone_id);
    let body = source.get_text(&url).await?;
    let res: api::stations::Response = serde_json::from_str(&body)?;
    Ok(res.into_stations())
}

/// Name wins over code when both could match.
pub fn find_zone<'a>(zones: &'a [Zone], input: &str) -> Option<&'a Zone> {
    zones
        .iter()
        .find(|z| z.name.eq_ignore_ascii_case(input))
        .or_else(|| zones.iter().find(|z| z.zone_id.eq_ignore_ascii_case(input)))
}

pub fn find_station<'a>(stations: &'a [Station], input: &str) -> Option<&'a Station> {
    stations
        .iter()
        .find(|s| s.station_identifier.eq_ignore_ascii_case(input))
}

/// Walk the user through picking a station.
///
/// `Ok(None)` means the user backed out or a listing could not be fetched
/// (already reported). `Err` only comes from the prompt itself.
pub async fn browse_stations(
    source: &dyn JsonSource,
    prompt: &mut dyn Prompt,
) -> Result<Option<Coordinate>> {
    let Some(state) = ask_state(prompt)? else {
        return Ok(None);
    };

    prompt.say(&format!("\nGetting all zones for {state}..."));
    let zones = match list_zones(source, &state).await {
        Ok(zones) => zones,
        Err(e) => {
            warn!(%state, error = %e, "zone listing failed");
            prompt.say(&format!("Error: {e}"));
            return Ok(None);
        }
    };
    for zone in &zones {
        prompt.say(&format!("{} - {}", zone.zone_id, zone.name));
    }
    prompt.say(&format!("Found {} public zones in {state}...", zones.len()));

    if zones.is_empty() {
        return Ok(None);
    }

    let zone = loop {
        let input = prompt.ask(&format!("\nType a zone's name OR zone's ID in {state}:"))?;
        match find_zone(&zones, input.trim()) {
            Some(zone) => break zone,
            None => prompt.say("Invalid zone name or ID!"),
        }
    };
    info!(zone = %zone.zone_id, "zone selected");

    prompt.say(&format!(
        "\nGetting all stations associated with {}...",
        zone.name
    ));
    let stations = match list_stations(source, zone).await {
        Ok(stations) => stations,
        Err(e) => {
            warn!(zone = %zone.zone_id, error = %e, "station listing failed");
            prompt.say(&format!("Error: {e}"));
            return Ok(None);
        }
    };
    for station in &stations {
        prompt.say(&format!("{} - {}", station.station_identifier, station.name));
    }
    prompt.say(&format!(
        "Found {} stations associated with {}...",
        stations.len(),
        zone.name
    ));

    if stations.is_empty() {
        prompt.say(&format!("No stations found for {}.", zone.name));
        return Ok(None);
    }

    let station = loop {
        let input = prompt.ask("\nType a station's ID to view the forecast:")?;
        match find_station(&stations, input.trim()) {
            Some(station) => break station,
            None => prompt.say("Invalid station ID!"),
        }
    };
    info!(station = %station.station_identifier, "station selected");

    Ok(Some(Coordinate::from(station)))
}

fn ask_state(prompt: &mut dyn Prompt) -> Result<Option<String>> {
    loop {
        let input = prompt.ask(
            "\nType a U.S. state code/abbreviation (e.g. 'TX') to view the state's zones. Type 'exit' to go back",
        )?;

        if is_exit(&input) {
            return Ok(None);
        }

        match normalize_state_code(&input) {
            Some(code) => return Ok(Some(code)),
            None => prompt.say("Invalid state code/abbreviation!"),
        }
    }
}
