use crate::{
    error::WeatherError,
    model::{Location, RawWeatherPayload},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Network boundary of the pipeline.
///
/// All three operations are independent, idempotent and retry-free: a single
/// failed attempt surfaces immediately to the caller. The orchestrator takes
/// this as a trait object so tests can substitute a scripted provider.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a city name to coordinates. First match wins when the
    /// provider returns several.
    async fn resolve_location(&self, city: &str) -> Result<Location, WeatherError>;

    /// Resolve coordinates to a best-effort place name; may be empty or
    /// generic when the provider has no named place there.
    async fn resolve_reverse_location(&self, lat: f64, lon: f64) -> Result<String, WeatherError>;

    /// Fetch the raw forecast payload for a coordinate pair.
    async fn fetch_weather_payload(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<RawWeatherPayload, WeatherError>;
}
