// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::advisory_service::AdvisoryService;
use crate::application::weather_gateway::WeatherGateway;
use crate::application::weather_service::WeatherService;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::openweather::OpenWeatherGateway;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{district_alerts, district_weather, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create gateway (infrastructure layer)
    let gateway: Arc<dyn WeatherGateway> = Arc::new(OpenWeatherGateway::new(
        config.openweather.base_url,
        config.openweather.api_key,
        config.openweather.region_hint,
    ));

    // Create services (application layer)
    let advisory_service = AdvisoryService::new(gateway.clone());
    let weather_service = WeatherService::new(gateway.clone());

    // Create application state
    let state = Arc::new(AppState {
        advisory_service,
        weather_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/weather/:district", get(district_weather))
        .route("/alerts/:district", get(district_alerts))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    println!("Starting agri-advisory service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
