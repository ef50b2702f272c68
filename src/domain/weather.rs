// Weather observation domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A point-in-time weather observation, metric units.
///
/// The condition text is free-form provider output and is only ever used
/// for substring matching (fog/mist) and display.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub condition: String,
}

/// One 3-hourly forecast entry from the next-24h window.
///
/// Precipitation and wind are optional: providers omit the fields entirely
/// for dry/calm slots, and aggregation treats absence as zero.
#[derive(Debug, Clone)]
pub struct ForecastSlot {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub precipitation_mm: Option<f64>,
    pub wind_speed_mps: Option<f64>,
    pub condition: String,
}

/// Reshaped weather payload served by the overview endpoint.
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: CurrentConditions,
    pub forecast_24h: Vec<ForecastEntry>,
}

#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub condition: String,
    pub wind_speed_mps: f64,
}

#[derive(Debug, Serialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub condition: String,
    pub rain_3h_mm: f64,
}
