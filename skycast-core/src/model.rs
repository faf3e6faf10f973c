use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A resolved place, produced by geocoding. Transient: scoped to one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    /// Country code; may be empty when the provider has none.
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Raw provider forecast payload, as returned by the weather endpoint.
///
/// Hourly and daily blocks hold parallel arrays aligned by index to their
/// `time` array. Optional fields default to empty so a partial response
/// still deserializes; the mapper substitutes defaults per value instead.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherPayload {
    pub current_weather: RawCurrent,
    pub hourly: RawHourly,
    #[serde(default)]
    pub daily: Option<RawDaily>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Offset of the payload's local clock from UTC, in seconds.
    #[serde(default)]
    pub utc_offset_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
    #[serde(default)]
    pub is_day: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHourly {
    /// Local ISO-8601 timestamps, e.g. "2026-08-24T13:00".
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub relativehumidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub surface_pressure: Vec<Option<f64>>,
    /// Metres; the mapper converts to kilometres.
    #[serde(default)]
    pub visibility: Vec<Option<f64>>,
    #[serde(default)]
    pub apparent_temperature: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDaily {
    /// Calendar dates, "YYYY-MM-DD". Index 0 is today.
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub weathercode: Vec<i32>,
}

/// Normalized current conditions, consumed directly by presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    pub temp: f64,
    pub condition: String,
    pub icon: String,
    pub description: String,
    pub humidity: f64,
    pub wind: f64,
    pub pressure: f64,
    /// Kilometres.
    pub visibility: f64,
    pub feels_like: f64,
    /// Wall-clock time the mapping ran, not a provider timestamp.
    pub dt: DateTime<Utc>,
    pub weather_code: i32,
    pub is_day: bool,
}

/// One day of the multi-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub day_label: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub weather_code: i32,
    pub condition: String,
    pub icon: String,
    pub dt: DateTime<Utc>,
}

/// One point of the short-term hourly trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour-of-day label, e.g. "1 PM".
    pub time: String,
    pub temp: f64,
}

/// The composite result one fetch cycle produces: everything the dashboard
/// needs for a single city. Recomputed on every fresh fetch, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub hourly: Vec<HourlyPoint>,
}
