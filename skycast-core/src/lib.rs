//! Core library for the `skycast` weather dashboard.
//!
//! This crate holds the whole data pipeline behind the dashboard:
//! - Geocoding and weather retrieval (Open-Meteo)
//! - Normalization of raw payloads into display-ready records
//! - A short-lived cache suppressing redundant network calls
//!
//! It is used by `skycast-cli`, but any front end can consume it through
//! [`WeatherService`].

pub mod codes;
pub mod config;
pub mod error;
pub mod forecast;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod service;
pub mod visual;

pub use config::{Config, Endpoints, FieldDefaults};
pub use error::WeatherError;
pub use model::{
    CurrentWeather, ForecastDay, HourlyPoint, Location, RawWeatherPayload, WeatherBundle,
};
pub use provider::{WeatherProvider, open_meteo::OpenMeteoProvider};
pub use service::WeatherService;
pub use visual::VisualCategory;
