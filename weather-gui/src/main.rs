//! Desktop weather app built with iced.
//!
//! The API key is resolved before the window opens; a missing key is a
//! startup error, not something the window reports.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherClient};

mod app;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config).context("Cannot start Weather App")?;

    tracing::info!("starting Weather App");
    app::run(client)?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
