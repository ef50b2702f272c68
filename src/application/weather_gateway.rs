// Gateway contract for the external weather provider
use crate::domain::location::{district_centroid, Coordinates};
use crate::domain::weather::{ForecastSlot, WeatherSnapshot};
use async_trait::async_trait;

#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Resolve a place name to coordinates, if the provider knows it
    async fn geocode(&self, place: &str) -> anyhow::Result<Option<Coordinates>>;

    /// Current conditions for a coordinate pair, metric units
    async fn current(&self, coords: Coordinates) -> anyhow::Result<WeatherSnapshot>;

    /// 3-hourly forecast trimmed to the next 24 hours
    async fn forecast_24h(&self, coords: Coordinates) -> anyhow::Result<Vec<ForecastSlot>>;
}

/// Resolve a district name: provider geocoding first, centroid table as the
/// guaranteed fallback. Geocoding transport errors degrade to the table.
pub async fn resolve_coordinates(gateway: &dyn WeatherGateway, place: &str) -> Option<Coordinates> {
    match gateway.geocode(place).await {
        Ok(Some(coords)) => Some(coords),
        Ok(None) => district_centroid(place),
        Err(e) => {
            tracing::warn!("geocoding failed for {place}: {e:#}");
            district_centroid(place)
        }
    }
}
