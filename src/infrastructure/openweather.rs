// OpenWeather gateway implementation
use crate::application::weather_gateway::WeatherGateway;
use crate::domain::location::Coordinates;
use crate::domain::weather::{ForecastSlot, WeatherSnapshot};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct OpenWeatherGateway {
    http: Client,
    base_url: String,
    api_key: String,
    region_hint: Option<String>,
}

impl OpenWeatherGateway {
    pub fn new(base_url: String, api_key: String, region_hint: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            region_hint,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("requesting OpenWeather {path}");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({path})"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "OpenWeather request to {} failed with status {}: {}",
                path,
                status,
                truncate_body(&body)
            );
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse OpenWeather response ({path})"))
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherGateway {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>> {
        let query = match &self.region_hint {
            Some(hint) => format!("{place},{hint}"),
            None => place.to_string(),
        };

        let entries: Vec<GeoEntry> = self
            .get_json(
                "/geo/1.0/direct",
                &[("q", query), ("limit", "1".to_string())],
            )
            .await?;

        Ok(entries.first().map(|entry| Coordinates {
            latitude: entry.lat,
            longitude: entry.lon,
        }))
    }

    async fn current(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        let parsed: OwCurrentResponse = self.get_json("/data/2.5/weather", &coord_params(coords)).await?;

        Ok(WeatherSnapshot {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition: first_description(&parsed.weather),
        })
    }

    async fn forecast_24h(&self, coords: Coordinates) -> Result<Vec<ForecastSlot>> {
        let parsed: OwForecastResponse = self.get_json("/data/2.5/forecast", &coord_params(coords)).await?;

        let now = Utc::now();
        Ok(parsed
            .list
            .into_iter()
            .filter_map(slot_from_entry)
            .filter(|slot| within_next_24h(now, slot.timestamp))
            .collect())
    }
}

fn coord_params(coords: Coordinates) -> Vec<(&'static str, String)> {
    vec![
        ("lat", coords.latitude.to_string()),
        ("lon", coords.longitude.to_string()),
        ("units", "metric".to_string()),
    ]
}

fn slot_from_entry(entry: OwForecastEntry) -> Option<ForecastSlot> {
    let timestamp = DateTime::from_timestamp(entry.dt, 0)?;
    Some(ForecastSlot {
        timestamp,
        temperature_c: entry.main.temp,
        humidity_pct: entry.main.humidity,
        precipitation_mm: entry.rain.and_then(|rain| rain.three_hour),
        wind_speed_mps: entry.wind.map(|wind| wind.speed),
        condition: first_description(&entry.weather),
    })
}

fn within_next_24h(now: DateTime<Utc>, ts: DateTime<Utc>) -> bool {
    ts >= now && ts - now <= Duration::hours(24)
}

fn first_description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_default()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

// Wire shapes, matching the provider JSON. Numeric fields default to zero
// when absent so a sparse payload still deserializes.

#[derive(Debug, Deserialize)]
struct GeoEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    #[serde(default)]
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    #[serde(default)]
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    rain: Option<OwRain>,
    #[serde(default)]
    wind: Option<OwWind>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_payload_deserializes() {
        let body = r#"{
            "name": "Mysuru",
            "dt": 1754380800,
            "main": { "temp": 26.4, "feels_like": 27.0, "humidity": 64 },
            "weather": [{ "id": 801, "main": "Clouds", "description": "few clouds" }],
            "wind": { "speed": 3.6, "deg": 240 }
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.main.temp, 26.4);
        assert_eq!(parsed.main.humidity, 64.0);
        assert_eq!(parsed.wind.speed, 3.6);
        assert_eq!(first_description(&parsed.weather), "few clouds");
    }

    #[test]
    fn sparse_current_payload_defaults_to_zero() {
        let parsed: OwCurrentResponse = serde_json::from_str(r#"{ "main": {} }"#).unwrap();
        assert_eq!(parsed.main.temp, 0.0);
        assert_eq!(parsed.wind.speed, 0.0);
        assert_eq!(first_description(&parsed.weather), "");
    }

    #[test]
    fn forecast_entry_without_rain_or_wind_maps_to_none() {
        let body = r#"{
            "list": [
                {
                    "dt": 1754391600,
                    "main": { "temp": 24.1, "humidity": 78 },
                    "weather": [{ "description": "overcast clouds" }]
                },
                {
                    "dt": 1754402400,
                    "main": { "temp": 23.0, "humidity": 85 },
                    "weather": [{ "description": "light rain" }],
                    "rain": { "3h": 1.8 },
                    "wind": { "speed": 5.2 }
                }
            ]
        }"#;

        let parsed: OwForecastResponse = serde_json::from_str(body).unwrap();
        let slots: Vec<_> = parsed.list.into_iter().filter_map(slot_from_entry).collect();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].precipitation_mm, None);
        assert_eq!(slots[0].wind_speed_mps, None);
        assert_eq!(slots[1].precipitation_mm, Some(1.8));
        assert_eq!(slots[1].wind_speed_mps, Some(5.2));
        assert_eq!(slots[1].condition, "light rain");
    }

    #[test]
    fn window_filter_keeps_only_next_24h() {
        let now = DateTime::from_timestamp(1_754_380_800, 0).unwrap();

        assert!(within_next_24h(now, now));
        assert!(within_next_24h(now, now + Duration::hours(24)));
        assert!(!within_next_24h(now, now + Duration::hours(24) + Duration::seconds(1)));
        assert!(!within_next_24h(now, now - Duration::seconds(1)));
    }
}
