use std::sync::Arc;

use advisor_core::{ServiceError, WeatherReport, WeatherService};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{error, warn};

/// Request body for `POST /get_weather`.
///
/// A missing `city` key defaults to empty and is rejected as invalid input;
/// an unparseable body is treated as an internal fault.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: String,
}

/// Build the application router.
pub fn router(service: Arc<WeatherService>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_weather", post(get_weather))
        .with_state(service)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn get_weather(
    State(service): State<Arc<WeatherService>>,
    payload: Result<Json<WeatherQuery>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Json(query) = payload.map_err(|err| ServiceError::Internal(anyhow::anyhow!(err)))?;

    let report = service.weather_for_city(&query.city).await?;

    Ok(Json(report))
}

/// Maps [`ServiceError`] onto an HTTP status plus the `{"error": ...}` body.
///
/// Error sources are logged here and never leak into the response.
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::InvalidCity => StatusCode::BAD_REQUEST,
            ServiceError::CityNotFound(source) => {
                warn!("current weather fetch failed: {source:#}");
                StatusCode::NOT_FOUND
            }
            ServiceError::Internal(source) => {
                error!("request failed: {source:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::{CurrentObservation, ForecastSample, WeatherProvider};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use chrono::Utc;
    use tower::util::ServiceExt;

    #[derive(Debug, Default)]
    struct StubProvider {
        current: Option<CurrentObservation>,
        forecast_fails: bool,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, city: &str) -> anyhow::Result<CurrentObservation> {
            self.current
                .clone()
                .ok_or_else(|| anyhow!("no current weather for '{city}'"))
        }

        async fn forecast(&self, _city: &str) -> anyhow::Result<Vec<ForecastSample>> {
            if self.forecast_fails {
                Err(anyhow!("forecast backend unavailable"))
            } else {
                Ok(Vec::new())
            }
        }
    }

    fn app(provider: StubProvider) -> Router {
        router(Arc::new(WeatherService::new(Box::new(provider))))
    }

    fn weather_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/get_weather")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn observation() -> CurrentObservation {
        CurrentObservation {
            city: "Lisbon".to_string(),
            temperature_c: 21.0,
            humidity_pct: 50,
            wind_speed_mps: 10.0,
            condition: "clear".to_string(),
            description: "clear sky".to_string(),
            observation_time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn empty_city_returns_400_with_exact_message() {
        let response = app(StubProvider::default())
            .oneshot(weather_request(r#"{"city": "  "}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Please enter a city name");
    }

    #[tokio::test]
    async fn missing_city_key_returns_400() {
        let response = app(StubProvider::default())
            .oneshot(weather_request("{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_city_returns_404_with_exact_message() {
        let response = app(StubProvider::default())
            .oneshot(weather_request(r#"{"city": "Nowhereland"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["error"], "City not found or API error");
    }

    #[tokio::test]
    async fn malformed_body_returns_500_with_opaque_message() {
        let response = app(StubProvider::default())
            .oneshot(weather_request("not json"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn forecast_failure_still_returns_full_report() {
        let response = app(StubProvider {
            current: Some(observation()),
            forecast_fails: true,
        })
        .oneshot(weather_request(r#"{"city": "Lisbon"}"#))
        .await
        .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;

        assert_eq!(body["city"], "Lisbon");
        assert_eq!(body["temperature"], 21.0);
        assert_eq!(body["humidity"], 50);
        assert_eq!(body["wind_speed"], 36.0);
        assert_eq!(body["weather_condition"], "sunny");
        assert_eq!(body["air_quality"], "good");
        assert_eq!(body["recommendations"].as_array().expect("array").len(), 4);
        assert_eq!(body["recommendations"][0]["type"], "outdoor");
        assert_eq!(body["activity_distribution"]["outdoor"], 75);
        assert_eq!(body["activity_distribution"]["indoor"], 25);
        assert_eq!(body["forecast"].as_array().expect("array").len(), 0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn index_serves_landing_page() {
        let response = app(StubProvider::default())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let page = String::from_utf8(bytes.to_vec()).expect("utf-8");
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("get_weather"));
    }
}
