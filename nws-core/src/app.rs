use tracing::info;

use crate::{
    browse::browse_stations,
    client::JsonSource,
    error::Result,
    forecast::forecast_report,
    manual::read_coordinate,
    model::Coordinate,
    prompt::{Prompt, is_exit},
};

const MENU: &str = "\n\nEnter '1' to find a specific weather station\n\
                    Enter '2' to manually enter coordinates\n\
                    Enter 'exit' to leave";

/// Menu, coordinate, forecast, repeat. Returns once the user types `exit`.
pub async fn run(source: &dyn JsonSource, prompt: &mut dyn Prompt) -> Result<()> {
    prompt.say("Welcome to the weather checker!");

    loop {
        let Some(coordinate) = choose_coordinate(source, prompt).await? else {
            info!("exit requested");
            return Ok(());
        };

        prompt.say(&format!("\nGetting forecast info for {coordinate}..."));
        let report = forecast_report(source, &coordinate).await;
        prompt.say(&report);
    }
}

/// `None` only when the user asked to leave.
async fn choose_coordinate(
    source: &dyn JsonSource,
    prompt: &mut dyn Prompt,
) -> Result<Option<Coordinate>> {
    loop {
        let input = prompt.ask(MENU)?;
        let coordinate = match input.trim() {
            "1" => browse_stations(source, prompt).await?,
            "2" => Some(read_coordinate(prompt)?),
            other if is_exit(other) => return Ok(None),
            _ => {
                prompt.say("Invalid option!");
                None
            }
        };

        if coordinate.is_some() {
            return Ok(coordinate);
        }
    }
}
