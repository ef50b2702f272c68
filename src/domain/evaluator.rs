// Weather advisory rule evaluation
//
// A single deterministic pass over the current observation plus the next-24h
// forecast. Rules run in a fixed priority order, each appending at most one
// message, and the result is capped after the fact. No I/O, no failure mode:
// a missing snapshot short-circuits to an empty list.
use chrono::{DateTime, Utc};

use crate::domain::weather::{ForecastSlot, WeatherSnapshot};

pub const MAX_ADVISORIES: usize = 3;
pub const ADVISORY_SEPARATOR: &str = " | ";

const HEATWAVE_C: f64 = 38.0;
const HOT_DAY_C: f64 = 34.0;
const COLD_NIGHT_C: f64 = 12.0;
const TEMP_SWING_C: f64 = 12.0;
const HEAVY_RAIN_TOTAL_MM: f64 = 20.0;
const MODERATE_RAIN_TOTAL_MM: f64 = 5.0;
const HEAVY_SLOT_MM: f64 = 10.0;
const STRONG_WIND_MPS: f64 = 12.0;
const MODERATE_WIND_MPS: f64 = 8.0;
const FORECAST_WIND_MPS: f64 = 9.0;
const HIGH_HUMIDITY_PCT: f64 = 80.0;
const HIGH_HUMIDITY_MIN_COUNT: usize = 3;

/// Aggregates over the current reading and all forecast slots.
struct OutlookStats {
    max_temp: f64,
    min_temp: f64,
    max_humidity: f64,
    high_humidity_count: usize,
    total_rain: f64,
    rain_slots: Vec<(f64, DateTime<Utc>)>,
    heavy_rain_slots: Vec<(f64, DateTime<Utc>)>,
    windy_slots: Vec<(f64, DateTime<Utc>)>,
}

fn collect_stats(snapshot: &WeatherSnapshot, forecast: &[ForecastSlot]) -> OutlookStats {
    let mut stats = OutlookStats {
        max_temp: snapshot.temperature_c,
        min_temp: snapshot.temperature_c,
        max_humidity: snapshot.humidity_pct,
        high_humidity_count: usize::from(snapshot.humidity_pct >= HIGH_HUMIDITY_PCT),
        total_rain: 0.0,
        rain_slots: Vec::new(),
        heavy_rain_slots: Vec::new(),
        windy_slots: Vec::new(),
    };

    for slot in forecast {
        stats.max_temp = stats.max_temp.max(slot.temperature_c);
        stats.min_temp = stats.min_temp.min(slot.temperature_c);
        stats.max_humidity = stats.max_humidity.max(slot.humidity_pct);
        if slot.humidity_pct >= HIGH_HUMIDITY_PCT {
            stats.high_humidity_count += 1;
        }

        // Absent precipitation/wind fields count as zero, never as missing.
        let rain = slot.precipitation_mm.unwrap_or(0.0);
        if rain > 0.0 {
            stats.total_rain += rain;
            stats.rain_slots.push((rain, slot.timestamp));
            if rain >= HEAVY_SLOT_MM {
                stats.heavy_rain_slots.push((rain, slot.timestamp));
            }
        }

        let wind = slot.wind_speed_mps.unwrap_or(0.0);
        if wind >= FORECAST_WIND_MPS {
            stats.windy_slots.push((wind, slot.timestamp));
        }
    }

    stats
}

/// Run every rule in priority order and return at most [`MAX_ADVISORIES`]
/// display-ready messages.
pub fn evaluate(snapshot: Option<&WeatherSnapshot>, forecast: &[ForecastSlot]) -> Vec<String> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let stats = collect_stats(snapshot, forecast);
    let mut advisories = Vec::new();

    // Temperature: the two upper bands are exclusive, the other two fire
    // independently.
    if stats.max_temp >= HEATWAVE_C {
        advisories.push(format!(
            "Heatwave risk {:.0}°C. Avoid field work 11-4, increase irrigation, shade tender crops.",
            stats.max_temp
        ));
    } else if stats.max_temp >= HOT_DAY_C {
        advisories.push(format!(
            "Hot day {:.0}°C. Irrigate early morning or evening to reduce stress.",
            stats.max_temp
        ));
    }
    if stats.min_temp <= COLD_NIGHT_C {
        advisories.push(format!(
            "Cold night {:.0}°C. Protect seedlings; avoid late-evening irrigation.",
            stats.min_temp
        ));
    }
    if stats.max_temp - stats.min_temp >= TEMP_SWING_C {
        advisories.push(format!(
            "Large temp swing ({:.0}-{:.0}°C). Maintain soil moisture to buffer stress.",
            stats.min_temp, stats.max_temp
        ));
    }

    // Rain volume: exactly one of the three bands, tested descending.
    if stats.total_rain >= HEAVY_RAIN_TOTAL_MM {
        advisories.push(format!(
            "Heavy rain ~{:.1}mm next 24h. Ensure drainage; postpone spraying and fertilizer.",
            stats.total_rain
        ));
    } else if stats.total_rain >= MODERATE_RAIN_TOTAL_MM {
        advisories.push(format!(
            "Moderate rain ~{:.1}mm. Good soil moisture; plan field work before showers.",
            stats.total_rain
        ));
    } else if stats.total_rain > 0.0 {
        advisories.push(format!(
            "Light rain ~{:.1}mm. Minor benefit; plan spray 4-6h before rain.",
            stats.total_rain
        ));
    }

    // Rain timing, else prolonged humidity.
    if !stats.heavy_rain_slots.is_empty() {
        let times = slot_times(&stats.heavy_rain_slots);
        advisories.push(format!(
            "Heavy bursts expected around {times}. Secure inputs, cover harvested produce."
        ));
    } else if !stats.rain_slots.is_empty() {
        let times = slot_times(&stats.rain_slots);
        advisories.push(format!(
            "Rain likely around {times}. Schedule spraying and harvest before then."
        ));
    } else if stats.max_humidity >= HIGH_HUMIDITY_PCT
        && stats.high_humidity_count >= HIGH_HUMIDITY_MIN_COUNT
    {
        advisories.push(format!(
            "Prolonged humidity ({}h above 80%). Improve airflow; monitor for fungal spots.",
            stats.high_humidity_count
        ));
    }

    // Wind tiers.
    let current_wind = snapshot.wind_speed_mps;
    if current_wind >= STRONG_WIND_MPS
        || stats.windy_slots.iter().any(|(w, _)| *w >= STRONG_WIND_MPS)
    {
        advisories.push(
            "Strong winds. Avoid spraying; secure lightweight structures and support tall plants."
                .to_string(),
        );
    } else if current_wind >= MODERATE_WIND_MPS || !stats.windy_slots.is_empty() {
        advisories.push(
            "Moderate winds. Check wind direction before spraying; stake tall crops if needed."
                .to_string(),
        );
    }

    // Visibility.
    let condition = snapshot.condition.to_lowercase();
    if condition.contains("fog") || condition.contains("mist") {
        advisories
            .push("Low visibility due to fog. Take care during transport and field work.".to_string());
    }

    if advisories.is_empty() {
        advisories
            .push("Conditions favorable. Good window for sowing and field operations.".to_string());
    }

    advisories.truncate(MAX_ADVISORIES);
    advisories
}

/// Joined single-line form, `None` when there is no current observation.
pub fn advisory_line(snapshot: Option<&WeatherSnapshot>, forecast: &[ForecastSlot]) -> Option<String> {
    let advisories = evaluate(snapshot, forecast);
    if advisories.is_empty() {
        None
    } else {
        Some(advisories.join(ADVISORY_SEPARATOR))
    }
}

/// First two slot times, formatted like `5 Aug, 6 AM`.
fn slot_times(slots: &[(f64, DateTime<Utc>)]) -> String {
    slots
        .iter()
        .take(2)
        .map(|(_, ts)| ts.format("%-d %b, %-I %p").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
