// Advisory service - Use case for district weather alert feeds
use crate::application::weather_gateway::{resolve_coordinates, WeatherGateway};
use crate::domain::advisory::{build_advisories, AlertFeed, ConditionSummary};
use crate::domain::evaluator;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AdvisoryService {
    gateway: Arc<dyn WeatherGateway>,
}

impl AdvisoryService {
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    /// Build the alert feed for a district. Failures are embedded in the
    /// payload so clients can poll this without branching on status codes.
    pub async fn alerts_for_district(&self, district: &str) -> AlertFeed {
        let name = district.trim();
        let generated_at = Utc::now();

        if name.is_empty() {
            return empty_feed(name, generated_at, None);
        }

        let Some(coords) = resolve_coordinates(self.gateway.as_ref(), name).await else {
            return empty_feed(
                name,
                generated_at,
                Some(format!("Could not resolve coordinates for {name}")),
            );
        };

        let snapshot = match self.gateway.current(coords).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("current weather fetch failed for {name}: {e:#}");
                return empty_feed(name, generated_at, Some("Could not fetch weather data".to_string()));
            }
        };

        // A failed forecast degrades to current-conditions-only evaluation.
        let forecast = match self.gateway.forecast_24h(coords).await {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!("forecast fetch failed for {name}: {e:#}");
                Vec::new()
            }
        };

        let messages = evaluator::evaluate(Some(&snapshot), &forecast);
        let line = messages.join(evaluator::ADVISORY_SEPARATOR);

        AlertFeed {
            district: name.to_string(),
            generated_at,
            current_condition: Some(ConditionSummary {
                description: capitalize(&snapshot.condition),
                temp_c: snapshot.temperature_c,
            }),
            alerts: build_advisories(name, &line, generated_at),
            error: None,
        }
    }
}

fn empty_feed(district: &str, generated_at: DateTime<Utc>, error: Option<String>) -> AlertFeed {
    AlertFeed {
        district: district.to_string(),
        generated_at,
        current_condition: None,
        alerts: Vec::new(),
        error,
    }
}

/// Uppercase the first character, lowercase the rest ("light rain" -> "Light rain").
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advisory::Severity;
    use crate::domain::location::Coordinates;
    use crate::domain::weather::{ForecastSlot, WeatherSnapshot};
    use async_trait::async_trait;

    #[derive(Default)]
    struct StubGateway {
        geocoded: Option<Coordinates>,
        fail_current: bool,
        fail_forecast: bool,
    }

    #[async_trait]
    impl WeatherGateway for StubGateway {
        async fn geocode(&self, _place: &str) -> anyhow::Result<Option<Coordinates>> {
            Ok(self.geocoded)
        }

        async fn current(&self, _coords: Coordinates) -> anyhow::Result<WeatherSnapshot> {
            if self.fail_current {
                anyhow::bail!("connection refused");
            }
            Ok(WeatherSnapshot {
                temperature_c: 24.0,
                humidity_pct: 55.0,
                wind_speed_mps: 3.0,
                condition: "clear sky".to_string(),
            })
        }

        async fn forecast_24h(&self, _coords: Coordinates) -> anyhow::Result<Vec<ForecastSlot>> {
            if self.fail_forecast {
                anyhow::bail!("connection refused");
            }
            Ok(Vec::new())
        }
    }

    fn service(stub: StubGateway) -> AdvisoryService {
        AdvisoryService::new(Arc::new(stub))
    }

    #[tokio::test]
    async fn unresolvable_district_yields_error_feed() {
        let feed = service(StubGateway::default()).alerts_for_district("atlantis").await;

        assert!(feed.alerts.is_empty());
        assert!(feed.error.unwrap().contains("atlantis"));
        assert!(feed.current_condition.is_none());
    }

    #[tokio::test]
    async fn centroid_fallback_produces_a_feed() {
        // Geocoder knows nothing, but the district table does.
        let feed = service(StubGateway::default()).alerts_for_district("mysuru").await;

        assert!(feed.error.is_none());
        assert_eq!(feed.alerts.len(), 1);
        assert_eq!(feed.alerts[0].severity, Severity::Low);
        assert!(feed.alerts[0].message.contains("Conditions favorable"));
        assert_eq!(feed.current_condition.unwrap().description, "Clear sky");
    }

    #[tokio::test]
    async fn current_fetch_failure_is_reported_in_feed() {
        let stub = StubGateway {
            geocoded: Some(Coordinates { latitude: 12.0, longitude: 77.0 }),
            fail_current: true,
            ..Default::default()
        };
        let feed = service(stub).alerts_for_district("mysuru").await;

        assert!(feed.alerts.is_empty());
        assert_eq!(feed.error.unwrap(), "Could not fetch weather data");
    }

    #[tokio::test]
    async fn forecast_failure_degrades_to_current_only() {
        let stub = StubGateway {
            geocoded: Some(Coordinates { latitude: 12.0, longitude: 77.0 }),
            fail_forecast: true,
            ..Default::default()
        };
        let feed = service(stub).alerts_for_district("mysuru").await;

        assert!(feed.error.is_none());
        assert_eq!(feed.alerts.len(), 1);
    }

    #[tokio::test]
    async fn blank_district_yields_empty_feed_without_error() {
        let feed = service(StubGateway::default()).alerts_for_district("   ").await;

        assert!(feed.alerts.is_empty());
        assert!(feed.error.is_none());
    }

    #[test]
    fn capitalize_handles_mixed_case_and_empty() {
        assert_eq!(capitalize("light RAIN"), "Light rain");
        assert_eq!(capitalize(""), "");
    }
}
