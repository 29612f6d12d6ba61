//! Persona, request formatting, and input validation for the
//! itinerary-planner session.

use wayfarer_rs::{Error, PersonaSpec, Result};

/// Assistant greeting seeded into every new transcript. Part of the
/// replayed context; never printed.
pub const GREETING: &str = "Hello, traveler! 🌍 Where are we exploring and for how many days?";

/// Rendered into the system entry with `{num_days}` and `{destination}`
/// filled per request.
const ITINERARY_TEMPLATE: &str = "\
You are an expert travel planner, designing immersive and detailed travel itineraries.
Create a structured, day-wise itinerary for {num_days} days in {destination}.
Ensure the itinerary includes:
- Must-see attractions with brief descriptions.
- Suggested visit timings.
- Local food and restaurant recommendations.
- Transportation tips and practical advice.
- A mix of historical, cultural, and modern experiences.
Make the itinerary engaging and easy to follow.";

/// Build the planner persona for one request.
///
/// `num_days` is validated at the input prompt; a zero value reaching
/// this point is a configuration error rather than an input error.
pub fn itinerary_persona(destination: &str, num_days: u32) -> Result<PersonaSpec> {
    if num_days == 0 {
        return Err(Error::Configuration(
            "trip length must be at least 1 day".into(),
        ));
    }
    Ok(PersonaSpec::new(ITINERARY_TEMPLATE)
        .with_param("num_days", num_days.to_string())
        .with_param("destination", destination))
}

/// The synthetic user turn recorded for one itinerary request.
pub fn itinerary_request(destination: &str, num_days: u32) -> String {
    format!("Plan a {num_days}-day itinerary for {destination}.")
}

/// Parse and validate one trip-length input line.
///
/// Rejections are recovered by re-prompting; nothing is recorded in the
/// transcript for a rejected input.
pub fn parse_trip_length(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let days: u32 = trimmed.parse().map_err(|_| {
        Error::InvalidInput(format!("trip length must be a whole number, got `{trimmed}`"))
    })?;
    if days == 0 {
        return Err(Error::InvalidInput("trip length must be at least 1 day".into()));
    }
    Ok(days)
}
