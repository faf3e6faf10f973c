use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use skycast_core::{Config, CurrentWeather, ForecastDay, HourlyPoint, WeatherService, visual};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions for a city.
    Current {
        /// City name; falls back to the configured default.
        city: Option<String>,
    },

    /// Show the 5-day forecast for a city.
    Forecast {
        /// City name; falls back to the configured default.
        city: Option<String>,
    },

    /// Show the full dashboard for a coordinate pair.
    Coords {
        /// Latitude in decimal degrees.
        lat: f64,
        /// Longitude in decimal degrees.
        lon: f64,
    },

    /// Set the default city used when a command names none.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Current { city } => {
                let city = resolve_city(city, &config)?;
                let service = WeatherService::from_config(&config);
                let current = service.get_current(&city).await?;
                print_current(&current);
            }
            Command::Forecast { city } => {
                let city = resolve_city(city, &config)?;
                let service = WeatherService::from_config(&config);
                let days = service.get_forecast(&city).await?;
                print_forecast(&days);
            }
            Command::Coords { lat, lon } => {
                let service = WeatherService::from_config(&config);
                let bundle = service.get_by_coords(lat, lon).await?;
                print_current(&bundle.current);
                println!();
                print_trend(&bundle.hourly);
                println!();
                print_forecast(&bundle.forecast);
            }
            Command::Configure => configure(config)?,
        }

        Ok(())
    }
}

fn resolve_city(arg: Option<String>, config: &Config) -> Result<String> {
    arg.or_else(|| config.default_city.clone()).ok_or_else(|| {
        anyhow!(
            "No city given and no default configured.\n\
             Hint: run `skycast configure` to set a default city."
        )
    })
}

fn configure(mut config: Config) -> Result<()> {
    let city = inquire::Text::new("Default city:")
        .with_help_message("Used when a command is run without a city argument")
        .prompt()?;

    config.default_city = Some(city);
    config.save()?;

    println!("Saved config to {}", Config::config_file_path()?.display());
    Ok(())
}

fn print_current(current: &CurrentWeather) {
    let sky = visual::classify(current.weather_code, current.is_day);
    let place = if current.country.is_empty() {
        current.city.clone()
    } else {
        format!("{}, {}", current.city, current.country)
    };

    println!("{place} — {} ({sky})", current.condition);
    println!(
        "  Temperature: {} (feels like {})",
        format_temp(current.temp),
        format_temp(current.feels_like)
    );
    println!("  Humidity:    {:.0} %", current.humidity);
    println!("  Wind:        {:.1} km/h", current.wind);
    println!("  Pressure:    {:.0} hPa", current.pressure);
    println!("  Visibility:  {:.1} km", current.visibility);
    println!("  As of {}", current.dt.format("%a %e %b %H:%M UTC"));
}

fn print_forecast(days: &[ForecastDay]) {
    if days.is_empty() {
        println!("No forecast available.");
        return;
    }

    println!("5-day forecast:");
    for day in days {
        println!(
            "  {} {}  {} to {}  {}",
            day.day_label,
            day.date,
            format_temp(day.min_temp),
            format_temp(day.max_temp),
            day.condition
        );
    }
}

fn print_trend(points: &[HourlyPoint]) {
    if points.is_empty() {
        return;
    }

    println!("Next hours:");
    for point in points {
        println!("  {:>5}  {}", point.time, format_temp(point.temp));
    }
}

fn format_temp(temp: f64) -> String {
    format!("{:.0}°C", temp.round())
}
