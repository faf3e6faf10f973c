//! Turns the raw daily block into the 5-day forecast.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::{
    codes,
    model::{ForecastDay, RawDaily},
};

/// Normalize a raw daily block into an ordered forecast sequence.
///
/// Index 0 of the block is today; the dashboard shows the five days after
/// it. Days whose entries are missing are dropped, never padded. A missing
/// or empty time axis yields an empty forecast, not an error.
pub fn normalize_daily(daily: Option<&RawDaily>) -> Vec<ForecastDay> {
    let Some(daily) = daily else {
        warn!("daily block missing from payload, returning empty forecast");
        return Vec::new();
    };

    if daily.time.is_empty() {
        warn!("daily block has no time axis, returning empty forecast");
        return Vec::new();
    }

    let mut days = Vec::with_capacity(5);

    for idx in 1..=5 {
        let Some(date_str) = daily.time.get(idx) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
            warn!(date = %date_str, "unparseable daily date, dropping day");
            continue;
        };
        let (Some(&max_temp), Some(&min_temp), Some(&weather_code)) = (
            daily.temperature_2m_max.get(idx),
            daily.temperature_2m_min.get(idx),
            daily.weathercode.get(idx),
        ) else {
            continue;
        };

        let info = codes::lookup(weather_code);

        days.push(ForecastDay {
            date,
            day_label: date.format("%a").to_string(),
            min_temp,
            max_temp,
            avg_temp: (min_temp + max_temp) / 2.0,
            weather_code,
            condition: info.description.to_string(),
            icon: info.icon.to_string(),
            dt: date.and_time(NaiveTime::MIN).and_utc(),
        });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_block(days: usize) -> RawDaily {
        RawDaily {
            time: (0..days).map(|d| format!("2026-08-{:02}", 24 + d)).collect(),
            temperature_2m_max: (0..days).map(|d| 20.0 + d as f64).collect(),
            temperature_2m_min: (0..days).map(|d| 10.0 + d as f64).collect(),
            weathercode: vec![3; days],
        }
    }

    #[test]
    fn six_entry_block_yields_five_days_skipping_today() {
        let block = daily_block(6);
        let days = normalize_daily(Some(&block));

        assert_eq!(days.len(), 5);
        // Ascending source order, starting at tomorrow (index 1).
        assert_eq!(days[0].date.to_string(), "2026-08-25");
        assert_eq!(days[4].date.to_string(), "2026-08-29");
        for (i, day) in days.iter().enumerate() {
            let idx = i + 1;
            assert_eq!(day.min_temp, 10.0 + idx as f64);
            assert_eq!(day.max_temp, 20.0 + idx as f64);
            assert_eq!(day.avg_temp, (day.min_temp + day.max_temp) / 2.0);
            assert_eq!(day.condition, "Overcast");
        }
    }

    #[test]
    fn day_label_is_short_weekday() {
        let block = daily_block(2);
        let days = normalize_daily(Some(&block));

        // 2026-08-25 is a Tuesday.
        assert_eq!(days[0].day_label, "Tue");
    }

    #[test]
    fn missing_block_is_empty_not_error() {
        assert!(normalize_daily(None).is_empty());
    }

    #[test]
    fn empty_time_axis_is_empty_not_error() {
        let block = RawDaily {
            time: Vec::new(),
            temperature_2m_max: vec![20.0],
            temperature_2m_min: vec![10.0],
            weathercode: vec![0],
        };
        assert!(normalize_daily(Some(&block)).is_empty());
    }

    #[test]
    fn short_block_drops_missing_days_without_padding() {
        let block = daily_block(3);
        let days = normalize_daily(Some(&block));

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date.to_string(), "2026-08-25");
        assert_eq!(days[1].date.to_string(), "2026-08-26");
    }

    #[test]
    fn unknown_code_gets_fallback_condition() {
        let mut block = daily_block(3);
        block.weathercode = vec![42; 3];

        let days = normalize_daily(Some(&block));
        assert_eq!(days[0].condition, "Unknown");
        assert_eq!(days[0].icon, "03d");
    }

    #[test]
    fn midnight_timestamp_matches_date() {
        let block = daily_block(2);
        let days = normalize_daily(Some(&block));

        assert_eq!(days[0].dt.to_rfc3339(), "2026-08-25T00:00:00+00:00");
    }
}
