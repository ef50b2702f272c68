// Weather service - Use case for the reshaped weather overview
use crate::application::weather_gateway::{resolve_coordinates, WeatherGateway};
use crate::domain::weather::{CurrentConditions, ForecastEntry, WeatherReport};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherServiceError {
    #[error("location '{0}' not found")]
    LocationNotFound(String),
    #[error("weather service unavailable")]
    Unavailable(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct WeatherService {
    gateway: Arc<dyn WeatherGateway>,
}

impl WeatherService {
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    pub async fn overview(&self, district: &str) -> Result<WeatherReport, WeatherServiceError> {
        let name = district.trim();

        let coords = resolve_coordinates(self.gateway.as_ref(), name)
            .await
            .ok_or_else(|| WeatherServiceError::LocationNotFound(name.to_string()))?;

        let snapshot = self
            .gateway
            .current(coords)
            .await
            .map_err(WeatherServiceError::Unavailable)?;
        let forecast = self
            .gateway
            .forecast_24h(coords)
            .await
            .map_err(WeatherServiceError::Unavailable)?;

        let forecast_24h = forecast
            .into_iter()
            .map(|slot| ForecastEntry {
                time: slot.timestamp,
                temperature_c: slot.temperature_c,
                humidity_pct: slot.humidity_pct,
                condition: title_case(&slot.condition),
                rain_3h_mm: slot.precipitation_mm.unwrap_or(0.0),
            })
            .collect();

        Ok(WeatherReport {
            district: name.to_string(),
            latitude: coords.latitude,
            longitude: coords.longitude,
            current_weather: CurrentConditions {
                temperature_c: snapshot.temperature_c,
                humidity_pct: snapshot.humidity_pct,
                condition: title_case(&snapshot.condition),
                wind_speed_mps: snapshot.wind_speed_mps,
            },
            forecast_24h,
        })
    }
}

/// Provider descriptions come lowercased ("scattered clouds"); title-case
/// them for display.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
