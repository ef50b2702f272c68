// HTTP request handlers
use crate::application::weather_service::WeatherServiceError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Reshaped current weather and next-24h forecast for a district
pub async fn district_weather(
    Path(district): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.weather_service.overview(&district).await {
        Ok(report) => Json(report).into_response(),
        Err(e @ WeatherServiceError::LocationNotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            tracing::error!("weather overview failed for {district}: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Weather alert feed for a district. Always 200; failures are carried in
/// the payload so pollers stay simple.
pub async fn district_alerts(
    Path(district): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.advisory_service.alerts_for_district(&district).await)
}
