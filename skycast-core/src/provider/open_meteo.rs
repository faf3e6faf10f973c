use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::Endpoints,
    error::WeatherError,
    model::{Location, RawWeatherPayload},
};

use super::WeatherProvider;

/// Fetching a superset of what the mapper strictly needs keeps it resilient
/// to individual fields going missing.
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,weathercode,windspeed_10m_max,uv_index_max,precipitation_sum";
const HOURLY_FIELDS: &str =
    "temperature_2m,relativehumidity_2m,surface_pressure,visibility,apparent_temperature";

/// Keyless Open-Meteo client (geocoding + forecast), with reverse geocoding
/// served by BigDataCloud's free endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoints: Endpoints,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            http: Client::new(),
        }
    }

    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<(StatusCode, String), WeatherError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::transport(format!("Failed to send request to {what}"), e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| {
                WeatherError::transport(format!("Failed to read {what} response body"), e)
            })?;

        Ok((status, body))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn resolve_location(&self, city: &str) -> Result<Location, WeatherError> {
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let (status, body) = self
            .get(&self.endpoints.geocoding_base, &query, "geocoding")
            .await?;

        if !status.is_success() {
            return Err(WeatherError::transport(
                "Geocoding request failed",
                anyhow!("status {}: {}", status, truncate_body(&body)),
            ));
        }

        parse_geocode_body(city, &body)
    }

    async fn resolve_reverse_location(&self, lat: f64, lon: f64) -> Result<String, WeatherError> {
        let query = [
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("localityLanguage", "en".to_string()),
        ];

        let (status, body) = self
            .get(
                &self.endpoints.reverse_geocoding_base,
                &query,
                "reverse geocoding",
            )
            .await?;

        if !status.is_success() {
            return Err(WeatherError::transport(
                "Reverse geocoding request failed",
                anyhow!("status {}: {}", status, truncate_body(&body)),
            ));
        }

        parse_reverse_body(&body)
    }

    async fn fetch_weather_payload(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<RawWeatherPayload, WeatherError> {
        let query = [
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];

        let (status, body) = self
            .get(&self.endpoints.weather_base, &query, "weather API")
            .await?;

        // The provider reports its own failures inside the body, sometimes
        // alongside a non-2xx status. Check the embedded flag first so those
        // surface as provider errors rather than transport ones.
        parse_weather_body(status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    locality: String,
    #[serde(default, rename = "principalSubdivision")]
    principal_subdivision: String,
}

#[derive(Debug, Deserialize)]
struct ProviderFault {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
}

fn parse_geocode_body(city: &str, body: &str) -> Result<Location, WeatherError> {
    let parsed: GeocodeResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::transport("Failed to parse geocoding JSON", e))?;

    let first = parsed
        .results
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

    Ok(Location {
        name: first.name,
        country: first.country_code.unwrap_or_default(),
        lat: first.latitude,
        lon: first.longitude,
    })
}

fn parse_reverse_body(body: &str) -> Result<String, WeatherError> {
    let parsed: ReverseGeocodeResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::transport("Failed to parse reverse geocoding JSON", e))?;

    // Best effort: most-specific non-empty label, or empty when the
    // coordinate has no named place at all.
    let name = [parsed.city, parsed.locality, parsed.principal_subdivision]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    Ok(name)
}

fn parse_weather_body(status: StatusCode, body: &str) -> Result<RawWeatherPayload, WeatherError> {
    if let Ok(fault) = serde_json::from_str::<ProviderFault>(body) {
        if fault.error {
            return Err(WeatherError::Provider {
                reason: fault
                    .reason
                    .unwrap_or_else(|| "Weather data fetch failed".to_string()),
            });
        }
    }

    if !status.is_success() {
        return Err(WeatherError::transport(
            "Weather API request failed",
            anyhow!("status {}: {}", status, truncate_body(body)),
        ));
    }

    serde_json::from_str(body)
        .map_err(|e| WeatherError::transport("Failed to parse weather API JSON", e))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
