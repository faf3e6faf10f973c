//! The entry point the view layer calls: one cache slot in front of the
//! resolve → fetch → map cycle.

use chrono::Utc;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::{
    config::{Config, FieldDefaults},
    error::WeatherError,
    mapper,
    model::{CurrentWeather, ForecastDay, Location, WeatherBundle},
    provider::{WeatherProvider, open_meteo::OpenMeteoProvider},
};

/// How long a fetched composite result stays servable without a new
/// round-trip.
pub const CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CacheSlot {
    city: String,
    bundle: WeatherBundle,
    stored_at: Instant,
}

/// Orchestrates fetches and owns the single cache slot.
///
/// The slot holds at most one city's data; a request for a different city
/// always invalidates it. The mutex guards only the read-check and the
/// write, never an await point, so overlapping in-flight fetches resolve
/// independently and the last writer wins.
#[derive(Debug)]
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    defaults: FieldDefaults,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self::with_ttl(provider, CACHE_TTL)
    }

    pub fn with_ttl(provider: Box<dyn WeatherProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            defaults: FieldDefaults::default(),
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Service backed by the live Open-Meteo endpoints from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            provider: Box::new(OpenMeteoProvider::new(config.endpoints.clone())),
            defaults: config.defaults,
            ttl: config.cache_ttl(),
            slot: Mutex::new(None),
        }
    }

    /// Composite result for a city, served from the cache when the slot
    /// holds fresh data for that same city.
    pub async fn get_by_city(&self, city: &str) -> Result<WeatherBundle, WeatherError> {
        if let Some(bundle) = self.cached(city) {
            debug!(city = %city, "serving composite result from cache");
            return Ok(bundle);
        }

        debug!(city = %city, "cache miss, fetching fresh data");
        let location = self.provider.resolve_location(city).await?;
        let payload = self
            .provider
            .fetch_weather_payload(location.lat, location.lon)
            .await?;

        let bundle = mapper::map_current_and_hourly(&location, &payload, Utc::now(), &self.defaults);

        // Only a successful cycle touches the slot; failures above left it
        // unchanged.
        self.store(city, &bundle);
        Ok(bundle)
    }

    /// Composite result for a coordinate pair. Never reads the cache, but
    /// seeds it under the resolved city name for subsequent city lookups.
    pub async fn get_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherBundle, WeatherError> {
        let name = self.provider.resolve_reverse_location(lat, lon).await?;
        debug!(lat, lon, city = %name, "coordinate lookup, fetching fresh");

        let location = Location {
            name: name.clone(),
            country: String::new(),
            lat,
            lon,
        };
        let payload = self.provider.fetch_weather_payload(lat, lon).await?;

        let bundle = mapper::map_current_and_hourly(&location, &payload, Utc::now(), &self.defaults);

        self.store(&name, &bundle);
        Ok(bundle)
    }

    /// Current conditions only. Shares the cache with `get_forecast`, so
    /// calling both in succession costs one round-trip.
    pub async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        Ok(self.get_by_city(city).await?.current)
    }

    /// Multi-day forecast only.
    pub async fn get_forecast(&self, city: &str) -> Result<Vec<ForecastDay>, WeatherError> {
        Ok(self.get_by_city(city).await?.forecast)
    }

    fn cached(&self, city: &str) -> Option<WeatherBundle> {
        let guard = self.slot.lock().ok()?;
        let slot = guard.as_ref()?;

        if slot.city == city && slot.stored_at.elapsed() < self.ttl {
            Some(slot.bundle.clone())
        } else {
            None
        }
    }

    fn store(&self, city: &str, bundle: &WeatherBundle) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(CacheSlot {
                city: city.to_string(),
                bundle: bundle.clone(),
                stored_at: Instant::now(),
            });
        }
    }
}
