use crate::Config;
use crate::model::{CurrentObservation, ForecastSample};
use crate::provider::openweather::OpenWeatherProvider;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over a weather data provider.
///
/// The service only depends on this two-call contract: a current observation
/// and a list of 3-hour forecast samples, both per city. Implementations
/// convert their own wire formats into the shared domain models.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current observation for a city.
    async fn current(&self, city: &str) -> anyhow::Result<CurrentObservation>;

    /// Fetch the short-term forecast for a city as 3-hour samples.
    async fn forecast(&self, city: &str) -> anyhow::Result<Vec<ForecastSample>>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::new(
        api_key.to_owned(),
        config.api_base_url.clone(),
        config.request_timeout(),
    )?;

    Ok(Box::new(provider))
}
