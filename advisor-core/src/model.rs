use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::advisor::{ActivityDistribution, Recommendation};
use crate::classify::{AirQualityLabel, ConditionLabel};

/// One current-weather observation for a city, as returned by the provider.
#[derive(Debug, Clone)]
pub struct CurrentObservation {
    pub city: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Lowercased provider category, e.g. "rain" or "clouds".
    pub condition: String,
    /// Free-text description, e.g. "light rain".
    pub description: String,
    pub observation_time: DateTime<Utc>,
}

/// A single 3-hour-resolution forecast reading. Many samples share a calendar day.
#[derive(Debug, Clone)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub description: String,
}

/// Per-day summary derived from all forecast samples of one calendar date.
///
/// Serializes to the wire shape of one `forecast` array entry: temperature and
/// wind speed are already rounded, wind speed is in km/h.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub day_name: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub air_quality: AirQualityLabel,
    pub weather_description: String,
    pub weather_condition: ConditionLabel,
    pub recommendations: Vec<Recommendation>,
    pub activity_distribution: ActivityDistribution,
}

/// Payload returned for a successful weather request.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub air_quality: AirQualityLabel,
    pub weather_description: String,
    pub weather_condition: ConditionLabel,
    pub recommendations: Vec<Recommendation>,
    pub activity_distribution: ActivityDistribution,
    pub forecast: Vec<DailyAggregate>,
    /// Server-side generation time, `YYYY-MM-DD HH:MM:SS` local.
    pub timestamp: String,
}
