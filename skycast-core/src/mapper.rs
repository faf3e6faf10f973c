//! Maps the raw provider payload into the normalized composite result.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::{
    codes,
    config::FieldDefaults,
    forecast,
    model::{CurrentWeather, HourlyPoint, Location, RawWeatherPayload, WeatherBundle},
};

/// Build the composite dashboard result from one raw payload.
///
/// `now` is the wall-clock instant of this mapping; it selects the hourly
/// window and becomes `CurrentWeather.dt`. Absent hourly values substitute
/// the configured defaults so a partial payload never blocks display.
pub fn map_current_and_hourly(
    location: &Location,
    payload: &RawWeatherPayload,
    now: DateTime<Utc>,
    defaults: &FieldDefaults,
) -> WeatherBundle {
    let hourly = &payload.hourly;

    // The hourly time axis is in the payload's local clock.
    let local_now = (now + Duration::seconds(payload.utc_offset_seconds)).naive_utc();
    let idx = current_hour_index(&hourly.time, local_now);

    let at = |values: &[Option<f64>]| values.get(idx).copied().flatten();

    let humidity = at(&hourly.relativehumidity_2m).unwrap_or(defaults.humidity);
    let pressure = at(&hourly.surface_pressure).unwrap_or(defaults.pressure);
    let visibility = at(&hourly.visibility)
        .map(|metres| metres / 1000.0)
        .unwrap_or(defaults.visibility_km);
    let feels_like =
        at(&hourly.apparent_temperature).unwrap_or(payload.current_weather.temperature);

    let info = codes::lookup(payload.current_weather.weathercode);

    let current = CurrentWeather {
        city: location.name.clone(),
        country: location.country.clone(),
        temp: payload.current_weather.temperature,
        condition: info.description.to_string(),
        icon: info.icon.to_string(),
        description: info.description.to_string(),
        humidity,
        wind: payload.current_weather.windspeed,
        pressure,
        visibility,
        feels_like,
        dt: now,
        weather_code: payload.current_weather.weathercode,
        is_day: payload.current_weather.is_day == 1,
    };

    let trend = hourly
        .time
        .iter()
        .zip(hourly.temperature_2m.iter())
        .skip(idx)
        .take(24)
        .map(|(time, &temp)| HourlyPoint {
            time: hour_label(time),
            temp,
        })
        .collect();

    WeatherBundle {
        current,
        forecast: forecast::normalize_daily(payload.daily.as_ref()),
        hourly: trend,
    }
}

/// First index on the hourly time axis at or after `local_now`.
///
/// Falls back to index 0 when the axis is empty or entirely in the past.
/// That can pick a stale hour when clocks and data misalign, but keeps a
/// degraded payload displayable instead of failing.
fn current_hour_index(times: &[String], local_now: NaiveDateTime) -> usize {
    times
        .iter()
        .position(|t| parse_hourly_time(t).is_some_and(|ts| ts >= local_now))
        .unwrap_or(0)
}

fn parse_hourly_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok()
}

fn hour_label(raw: &str) -> String {
    match parse_hourly_time(raw) {
        Some(ts) => ts.format("%-I %p").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawCurrent, RawDaily, RawHourly};
    use chrono::TimeZone;

    fn london() -> Location {
        Location {
            name: "London".to_string(),
            country: "GB".to_string(),
            lat: 51.5,
            lon: -0.12,
        }
    }

    /// Hourly axis of `hours` consecutive entries starting 2026-08-24T00:00,
    /// with temperatures equal to their index.
    fn hourly_axis(hours: usize) -> RawHourly {
        let time = (0..hours)
            .map(|h| format!("2026-08-{:02}T{:02}:00", 24 + h / 24, h % 24))
            .collect();
        RawHourly {
            time,
            temperature_2m: (0..hours).map(|h| h as f64).collect(),
            relativehumidity_2m: vec![Some(80.0); hours],
            surface_pressure: vec![Some(1009.0); hours],
            visibility: vec![Some(24140.0); hours],
            apparent_temperature: vec![Some(13.5); hours],
        }
    }

    fn payload(hours: usize) -> RawWeatherPayload {
        RawWeatherPayload {
            current_weather: RawCurrent {
                temperature: 15.0,
                windspeed: 9.3,
                weathercode: 3,
                is_day: 1,
            },
            hourly: hourly_axis(hours),
            daily: Some(RawDaily {
                time: (0..6).map(|d| format!("2026-08-{:02}", 24 + d)).collect(),
                temperature_2m_max: vec![20.0; 6],
                temperature_2m_min: vec![10.0; 6],
                weathercode: vec![61; 6],
            }),
            timezone: Some("Europe/London".to_string()),
            utc_offset_seconds: 0,
        }
    }

    /// 09:30 UTC on the first day of the axis; first hour at or after it is
    /// index 10.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 9, 30, 0).single().expect("valid")
    }

    #[test]
    fn end_to_end_current_mapping() {
        let bundle = map_current_and_hourly(&london(), &payload(48), now(), &FieldDefaults::default());

        let current = &bundle.current;
        assert_eq!(current.city, "London");
        assert_eq!(current.country, "GB");
        assert_eq!(current.temp, 15.0);
        assert_eq!(current.condition, "Overcast");
        assert_eq!(current.weather_code, 3);
        assert!(current.is_day);
        assert_eq!(current.wind, 9.3);
        assert_eq!(current.dt, now());
        assert_eq!(bundle.forecast.len(), 5);
    }

    #[test]
    fn hourly_window_starts_at_current_hour() {
        let pl = payload(48);
        let bundle = map_current_and_hourly(&london(), &pl, now(), &FieldDefaults::default());

        assert_eq!(bundle.hourly.len(), 24);
        assert_eq!(bundle.hourly[0].temp, pl.hourly.temperature_2m[10]);
        assert_eq!(bundle.hourly[0].time, "10 AM");
        assert_eq!(bundle.hourly[23].temp, 33.0);
    }

    #[test]
    fn short_axis_yields_short_trend_without_padding() {
        let bundle = map_current_and_hourly(&london(), &payload(15), now(), &FieldDefaults::default());

        // Window starts at index 10 of a 15-entry axis.
        assert_eq!(bundle.hourly.len(), 5);
    }

    #[test]
    fn all_past_axis_falls_back_to_index_zero() {
        let late = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).single().expect("valid");
        let pl = payload(12);
        let bundle = map_current_and_hourly(&london(), &pl, late, &FieldDefaults::default());

        assert_eq!(bundle.hourly.len(), 12);
        assert_eq!(bundle.hourly[0].temp, 0.0);
    }

    #[test]
    fn empty_axis_yields_empty_trend() {
        let mut pl = payload(0);
        pl.hourly = RawHourly::default();

        let bundle = map_current_and_hourly(&london(), &pl, now(), &FieldDefaults::default());
        assert!(bundle.hourly.is_empty());
    }

    #[test]
    fn utc_offset_shifts_the_window() {
        let mut pl = payload(24);
        // Local clock three hours ahead of UTC: 09:30 UTC is 12:30 local,
        // so the window starts at 13:00, index 13.
        pl.utc_offset_seconds = 3 * 3600;

        let bundle = map_current_and_hourly(&london(), &pl, now(), &FieldDefaults::default());
        assert_eq!(bundle.hourly[0].temp, 13.0);
    }

    #[test]
    fn absent_values_substitute_defaults() {
        let mut pl = payload(24);
        pl.hourly.relativehumidity_2m = vec![None; 24];
        pl.hourly.surface_pressure = Vec::new();
        pl.hourly.visibility = vec![None; 24];
        pl.hourly.apparent_temperature = Vec::new();

        let bundle = map_current_and_hourly(&london(), &pl, now(), &FieldDefaults::default());
        let current = &bundle.current;

        assert_eq!(current.humidity, 0.0);
        assert_eq!(current.pressure, 1013.0);
        assert_eq!(current.visibility, 10.0);
        // Feels-like falls back to the current temperature.
        assert_eq!(current.feels_like, 15.0);
    }

    #[test]
    fn present_values_are_read_at_the_window_index() {
        let mut pl = payload(24);
        pl.hourly.relativehumidity_2m[10] = Some(55.0);
        pl.hourly.visibility[10] = Some(8000.0);

        let bundle = map_current_and_hourly(&london(), &pl, now(), &FieldDefaults::default());

        assert_eq!(bundle.current.humidity, 55.0);
        // Metres to kilometres.
        assert_eq!(bundle.current.visibility, 8.0);
        assert_eq!(bundle.current.feels_like, 13.5);
    }
}
