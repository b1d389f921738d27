use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    config::{API_KEY_ENV, Config},
    error::FetchError,
    model::WeatherReading,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Body-level `cod` value the provider sends on success. Compared as a JSON
/// number, so `200` and `200.0` both match.
const SUCCESS_COD: f64 = 200.0;

/// Client for the OpenWeather current-weather endpoint.
#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Build a client from config, failing when no API key can be resolved.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with(config, std::env::var(API_KEY_ENV).ok())
    }

    /// Same as [`OpenWeatherClient::from_config`] with the environment value passed in.
    pub fn from_config_with(config: &Config, env_value: Option<String>) -> Result<Self> {
        let client = Self::new(config.resolve_api_key_with(env_value)?);

        Ok(match config.base_url.as_deref() {
            Some(base_url) => client.with_base_url(base_url),
            None => client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Fetch the current weather for `city`, sent to the provider as typed.
    pub async fn current(&self, city: &str) -> Result<WeatherReading, FetchError> {
        debug!(base_url = %self.base_url, city, "requesting current weather");

        let result = self.fetch_current(city).await;

        match &result {
            Ok(reading) => info!(
                city,
                code = reading.condition_code,
                kelvin = reading.temperature_kelvin,
                "received current weather"
            ),
            Err(err) => warn!(city, error = %err, "weather lookup failed"),
        }

        result
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = format!(
            "{}{CURRENT_WEATHER_PATH}",
            self.base_url.trim_end_matches('/')
        );

        let res = self
            .http
            .get(url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?;

        let body = res.text().await.map_err(transport_error)?;

        parse_current(&body)
    }
}

/// The URL carries the API key, so it is stripped before the error text can
/// reach a label or a log line.
fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::from_transport(&err.without_url())
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

/// Parse a current-weather body that arrived with a 2xx status.
pub fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {e}")))?;

    match value.get("cod") {
        Some(cod) if cod.as_f64() == Some(SUCCESS_COD) => {}
        // The provider sends `cod` as a string on some error bodies.
        Some(cod) => {
            let reported = cod.as_str().map(str::to_owned).unwrap_or_else(|| cod.to_string());
            return Err(FetchError::UnexpectedBody(reported));
        }
        None => {
            return Err(FetchError::MalformedResponse("missing `cod` field".into()));
        }
    }

    let parsed: OwCurrentResponse = serde_json::from_value(value)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MalformedResponse("empty `weather` list".into()))?;

    Ok(WeatherReading {
        temperature_kelvin: parsed.main.temp,
        condition_code: weather.id,
        description: weather.description,
    })
}
