use crate::emoji::condition_emoji;

/// Offset between the Kelvin and Rankine zero points, in Fahrenheit degrees.
const FAHRENHEIT_OFFSET: f64 = 459.67;

/// A single current-weather observation, rebuilt for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_kelvin: f64,
    pub condition_code: i64,
    pub description: String,
}

impl WeatherReading {
    pub fn temperature_fahrenheit(&self) -> f64 {
        kelvin_to_fahrenheit(self.temperature_kelvin)
    }

    pub fn emoji(&self) -> &'static str {
        condition_emoji(self.condition_code)
    }
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET
}
