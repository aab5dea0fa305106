//! Core library for the weather activity advisor.
//!
//! This crate defines:
//! - Configuration handling
//! - Abstraction over the weather data provider
//! - Weather classification, forecast aggregation and activity advice
//! - The orchestration service that assembles a full weather report
//!
//! It is used by `advisor-server`, but can also be reused by other binaries or services.

pub mod advisor;
pub mod classify;
pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod service;

pub use advisor::{ActivityDistribution, ActivityType, Recommendation};
pub use classify::{AirQualityLabel, ConditionLabel};
pub use config::Config;
pub use error::ServiceError;
pub use model::{CurrentObservation, DailyAggregate, ForecastSample, WeatherReport};
pub use provider::WeatherProvider;
pub use service::WeatherService;
