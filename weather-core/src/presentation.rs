//! Turns a lookup outcome into the three display strings.

use crate::{error::FetchError, model::WeatherReading};

/// How the temperature label should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureStyle {
    /// Large font for a reading.
    #[default]
    Reading,
    /// Smaller font so a two-line error message fits.
    Message,
}

/// Contents of the three read-only display fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Presentation {
    pub temperature: String,
    pub temperature_style: TemperatureStyle,
    pub emoji: String,
    pub description: String,
}

impl Presentation {
    pub fn reading(reading: &WeatherReading) -> Self {
        Self {
            temperature: format_fahrenheit(reading.temperature_fahrenheit()),
            temperature_style: TemperatureStyle::Reading,
            emoji: reading.emoji().to_string(),
            description: reading.description.clone(),
        }
    }

    pub fn error(err: &FetchError) -> Self {
        Self {
            temperature: err.user_message(),
            temperature_style: TemperatureStyle::Message,
            emoji: String::new(),
            description: String::new(),
        }
    }

    pub fn from_outcome(outcome: &Result<WeatherReading, FetchError>) -> Self {
        match outcome {
            Ok(reading) => Self::reading(reading),
            Err(err) => Self::error(err),
        }
    }

    pub fn is_error(&self) -> bool {
        self.temperature_style == TemperatureStyle::Message
    }
}

/// Rounded to the nearest whole degree, halves away from zero.
pub fn format_fahrenheit(fahrenheit: f64) -> String {
    // `as i64` also folds -0.0 into 0.
    format!("{}°F", fahrenheit.round() as i64)
}
