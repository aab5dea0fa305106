use chrono::Local;
use tracing::{debug, warn};

use crate::advisor;
use crate::classify;
use crate::error::ServiceError;
use crate::forecast::{self, MPS_TO_KMH, round1};
use crate::model::WeatherReport;
use crate::provider::WeatherProvider;

/// Orchestrates the provider calls and derived analysis for one request.
///
/// Holds no per-request state; a single instance serves any number of
/// concurrent requests.
#[derive(Debug)]
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Build the full weather report for a city.
    ///
    /// The current observation is mandatory: any provider failure there maps
    /// to [`ServiceError::CityNotFound`]. The forecast is best-effort: a
    /// failure degrades to an empty forecast list instead of failing the
    /// request.
    pub async fn weather_for_city(&self, city: &str) -> Result<WeatherReport, ServiceError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ServiceError::InvalidCity);
        }

        let current = self
            .provider
            .current(city)
            .await
            .map_err(ServiceError::CityNotFound)?;

        debug!(
            city,
            observed_at = %current.observation_time,
            condition = %current.condition,
            "current observation received"
        );

        let samples = match self.provider.forecast(city).await {
            Ok(samples) => samples,
            Err(err) => {
                warn!("Forecast fetch failed for '{city}', serving without forecast: {err:#}");
                Vec::new()
            }
        };

        let today = Local::now().date_naive();
        let forecast = forecast::aggregate(&samples, today);

        let humidity = f64::from(current.humidity_pct);
        let label = classify::classify(&current.condition, current.temperature_c, humidity);
        let air_quality =
            classify::air_quality(current.temperature_c, humidity, current.wind_speed_mps);

        Ok(WeatherReport {
            city: city.to_string(),
            temperature: round1(current.temperature_c),
            humidity: current.humidity_pct,
            wind_speed: round1(current.wind_speed_mps * MPS_TO_KMH),
            air_quality,
            weather_description: current.description,
            weather_condition: label,
            recommendations: advisor::recommendations_for(label),
            activity_distribution: advisor::distribution_for(label),
            forecast,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
