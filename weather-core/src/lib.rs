//! Core library for the weather app.
//!
//! This crate defines:
//! - Configuration & credential resolution
//! - The OpenWeather current-weather client and its error taxonomy
//! - The condition-code emoji table
//! - Mapping of a lookup outcome to display strings
//!
//! It is used by `weather-gui` and `weather-cli`.

pub mod config;
pub mod emoji;
pub mod error;
pub mod model;
pub mod openweather;
pub mod presentation;

pub use config::Config;
pub use emoji::{Condition, condition_emoji};
pub use error::FetchError;
pub use model::WeatherReading;
pub use openweather::OpenWeatherClient;
pub use presentation::{Presentation, TemperatureStyle};
