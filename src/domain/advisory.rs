// Advisory records, severity inference and stable identifiers
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha1::{Digest, Sha1};

pub const CATEGORY_WEATHER: &str = "weather";

/// Length of the truncated hex digest used as an advisory id.
const STABLE_ID_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

const HIGH_KEYWORDS: [&str; 6] = [
    "heatwave",
    "heavy rain",
    "heavy bursts",
    "strong winds",
    "frost",
    "cold night",
];

const MEDIUM_KEYWORDS: [&str; 6] = [
    "moderate rain",
    "hot day",
    "large temp swing",
    "high disease risk",
    "moderate winds",
    "fog",
];

impl Severity {
    /// Classify an already-generated advisory message by keyword scan.
    pub fn infer(message: &str) -> Self {
        let text = message.to_lowercase();
        if HIGH_KEYWORDS.iter().any(|k| text.contains(k)) {
            Severity::High
        } else if MEDIUM_KEYWORDS.iter().any(|k| text.contains(k)) {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// One generated warning/recommendation with severity and stable identity.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub category: String,
    pub time: DateTime<Utc>,
}

/// Alert feed payload for a district, safe to poll from clients.
#[derive(Debug, Serialize)]
pub struct AlertFeed {
    pub district: String,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_condition: Option<ConditionSummary>,
    pub alerts: Vec<Advisory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionSummary {
    pub description: String,
    pub temp_c: f64,
}

/// Content-derived identifier: identical (location, message) inputs always
/// produce the same token, so repeated polls can be deduplicated by id.
pub fn stable_id(location: &str, message: &str) -> String {
    let raw = format!("{}::{}", location.trim().to_lowercase(), message.trim());
    let digest = Sha1::digest(raw.as_bytes());
    hex::encode(digest)[..STABLE_ID_LEN].to_string()
}

/// Split a joined advisory line back into structured records.
pub fn build_advisories(location: &str, line: &str, generated_at: DateTime<Utc>) -> Vec<Advisory> {
    line.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| Advisory {
            id: stable_id(location, part),
            title: format!("Weather alert • {location}"),
            message: part.to_string(),
            severity: Severity::infer(part),
            category: CATEGORY_WEATHER.to_string(),
            time: generated_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavy_rain_classifies_high() {
        let severity = Severity::infer("Heavy rain ~24.0mm next 24h. Ensure drainage.");
        assert_eq!(severity, Severity::High);
    }

    #[test]
    fn moderate_winds_classifies_medium() {
        let severity = Severity::infer("Moderate winds. Check wind direction before spraying.");
        assert_eq!(severity, Severity::Medium);
    }

    #[test]
    fn no_keywords_classifies_low() {
        let severity = Severity::infer("Conditions favorable. Good window for sowing.");
        assert_eq!(severity, Severity::Low);
    }

    #[test]
    fn stable_id_is_deterministic() {
        let a = stable_id("Mysuru", "Hot day 35°C. Irrigate early.");
        let b = stable_id("Mysuru", "Hot day 35°C. Irrigate early.");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn stable_id_normalizes_location() {
        let a = stable_id("  Mysuru ", "Hot day 35°C.");
        let b = stable_id("mysuru", "Hot day 35°C.");
        assert_eq!(a, b);
    }

    #[test]
    fn stable_id_differs_per_message() {
        let a = stable_id("Mysuru", "Hot day 35°C.");
        let b = stable_id("Mysuru", "Hot day 36°C.");
        assert_ne!(a, b);
    }

    #[test]
    fn build_advisories_splits_joined_line() {
        let now = Utc::now();
        let line = "Heatwave risk 39°C. Shade tender crops. | Conditions favorable.";
        let advisories = build_advisories("Kolar", line, now);

        assert_eq!(advisories.len(), 2);
        assert_eq!(advisories[0].severity, Severity::High);
        assert_eq!(advisories[0].category, "weather");
        assert_ne!(advisories[0].id, advisories[1].id);
        assert!(advisories[0].title.contains("Kolar"));
    }

    #[test]
    fn build_advisories_drops_empty_parts() {
        let advisories = build_advisories("Kolar", " | ", Utc::now());
        assert!(advisories.is_empty());
    }
}
