use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::{CurrentObservation, ForecastSample};

use super::WeatherProvider;

/// Public OpenWeather API base; tests point this at a local mock server.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { api_key, base_url, http })
    }

    /// GET `{base}/{endpoint}?q={city}&appid={key}&units=metric` and return the
    /// body of a successful response. Metric units keep temperatures in °C and
    /// wind speeds in m/s.
    async fn fetch(&self, endpoint: &str, city: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentObservation> {
        let body = self.fetch("weather", city).await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let weather = parsed
            .weather
            .first()
            .ok_or_else(|| anyhow!("OpenWeather current response contained no weather entry"))?;

        Ok(CurrentObservation {
            city: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition: weather.main.to_lowercase(),
            description: weather.description.clone(),
            observation_time: unix_to_utc(parsed.dt).unwrap_or_else(Utc::now),
        })
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>> {
        let body = self.fetch("forecast", city).await?;

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        // Entries with no weather block or an out-of-range timestamp are skipped
        // rather than failing the whole forecast.
        let samples = parsed
            .list
            .into_iter()
            .filter_map(|entry| {
                let weather = entry.weather.into_iter().next()?;
                Some(ForecastSample {
                    timestamp: unix_to_utc(entry.dt)?,
                    temperature_c: entry.main.temp,
                    humidity_pct: entry.main.humidity,
                    wind_speed_mps: entry.wind.speed,
                    condition: weather.main.to_lowercase(),
                    description: weather.description,
                })
            })
            .collect();

        Ok(samples)
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::new(
            "TEST_KEY".to_string(),
            server.uri(),
            Duration::from_secs(2),
        )
        .expect("provider")
    }

    fn current_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Kyiv",
            "dt": 1_754_400_000,
            "main": { "temp": 21.4, "feels_like": 20.9, "humidity": 55 },
            "weather": [ { "id": 500, "main": "Rain", "description": "light rain" } ],
            "wind": { "speed": 3.2, "deg": 180 }
        })
    }

    #[tokio::test]
    async fn current_parses_and_lowercases_condition() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Kyiv"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
            .mount(&server)
            .await;

        let observation = provider_for(&server).current("Kyiv").await.expect("current");

        assert_eq!(observation.city, "Kyiv");
        assert_eq!(observation.temperature_c, 21.4);
        assert_eq!(observation.humidity_pct, 55);
        assert_eq!(observation.wind_speed_mps, 3.2);
        assert_eq!(observation.condition, "rain");
        assert_eq!(observation.description, "light rain");
        assert_eq!(observation.observation_time.timestamp(), 1_754_400_000);
    }

    #[tokio::test]
    async fn current_errors_on_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).current("Nowhereland").await.unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("status 404"), "unexpected error: {msg}");
        assert!(msg.contains("city not found"));
    }

    #[tokio::test]
    async fn forecast_maps_every_entry() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("q", "Kyiv"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [
                    {
                        "dt": 1_754_400_000,
                        "main": { "temp": 18.0, "humidity": 60 },
                        "weather": [ { "main": "Clouds", "description": "scattered clouds" } ],
                        "wind": { "speed": 4.0 }
                    },
                    {
                        "dt": 1_754_410_800,
                        "main": { "temp": 19.5, "humidity": 58 },
                        "weather": [ { "main": "Clear", "description": "clear sky" } ],
                        "wind": { "speed": 3.5 }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let samples = provider_for(&server).forecast("Kyiv").await.expect("forecast");

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].condition, "clouds");
        assert_eq!(samples[1].condition, "clear");
        assert_eq!(samples[1].timestamp.timestamp() - samples[0].timestamp.timestamp(), 10_800);
    }

    #[tokio::test]
    async fn forecast_skips_entries_without_weather_block() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [
                    {
                        "dt": 1_754_400_000,
                        "main": { "temp": 18.0, "humidity": 60 },
                        "weather": [],
                        "wind": { "speed": 4.0 }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let samples = provider_for(&server).forecast("Kyiv").await.expect("forecast");
        assert!(samples.is_empty());
    }
}
