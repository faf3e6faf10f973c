use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

/// Base URLs for the provider endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Endpoints {
    pub geocoding_base: String,
    pub reverse_geocoding_base: String,
    pub weather_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_base: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            reverse_geocoding_base: "https://api.bigdatacloud.net/data/reverse-geocode-client"
                .to_string(),
            weather_base: "https://api.open-meteo.com/v1/forecast".to_string(),
        }
    }
}

/// Substitute values for hourly fields the provider may omit.
///
/// Applied uniformly by the mapper so a partial response never blocks the
/// current-weather display. Feels-like has no fixed default here: it falls
/// back to the current temperature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldDefaults {
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// Kilometres.
    pub visibility_km: f64,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            humidity: 0.0,
            pressure: 1013.0,
            visibility_km: 10.0,
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City loaded when the user asks for none explicitly.
    pub default_city: Option<String>,

    /// How long a fetched composite result stays servable from the cache.
    pub cache_ttl_secs: u64,

    pub endpoints: Endpoints,

    /// Example TOML:
    /// [defaults]
    /// humidity = 0.0
    /// pressure = 1013.0
    /// visibility_km = 10.0
    pub defaults: FieldDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: None,
            cache_ttl_secs: 60,
            endpoints: Endpoints::default(),
            defaults: FieldDefaults::default(),
        }
    }
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
