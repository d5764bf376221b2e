use crate::{error::Result, model::Coordinate, prompt::Prompt};

/// Parse one latitude/longitude component.
///
/// Zero is refused along with blanks and garbage; entry treats it as "not set".
pub fn parse_component(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value != 0.0).then_some(value)
}

/// Ask for latitude then longitude until each one is usable.
pub fn read_coordinate(prompt: &mut dyn Prompt) -> Result<Coordinate> {
    let latitude = read_component(prompt, "latitude")?;
    let longitude = read_component(prompt, "longitude")?;
    Ok(Coordinate::new(latitude, longitude))
}

fn read_component(prompt: &mut dyn Prompt, label: &str) -> Result<f64> {
    loop {
        let input = prompt.ask(&format!("Enter {label}:"))?;
        match parse_component(&input) {
            Some(value) => return Ok(value),
            None => prompt.say(&format!("Invalid {label}! Try again.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompt;

    #[test]
    fn rejects_blank_garbage_zero_and_non_finite() {
        for input in ["", "   ", "abc", "0", "0.0", "-0", "NaN", "inf", "40,73"] {
            assert_eq!(parse_component(input), None, "{input:?}");
        }
    }

    #[test]
    fn accepts_signed_decimals() {
        assert_eq!(parse_component("40.73"), Some(40.73));
        assert_eq!(parse_component(" -73.99 "), Some(-73.99));
    }

    #[test]
    fn reprompts_until_both_are_valid() {
        let mut prompt = ScriptedPrompt::new(["", "abc", "0", "40.73", "", "abc", "0", "-73.99"]);

        let coordinate = read_coordinate(&mut prompt).unwrap();

        assert_eq!(coordinate, Coordinate::new(40.73, -73.99));
        assert_eq!(prompt.count_printed("Invalid latitude! Try again."), 3);
        assert_eq!(prompt.count_printed("Invalid longitude! Try again."), 3);
        assert_eq!(prompt.asked.len(), 8);
    }
}
