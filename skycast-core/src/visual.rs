//! Maps WMO codes to visual animation categories.

/// The fixed set of sky animations the dashboard can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualCategory {
    ClearDay,
    ClearNight,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Rain,
    Snow,
    Thunder,
    Fog,
    Drizzle,
}

impl VisualCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualCategory::ClearDay => "clear-day",
            VisualCategory::ClearNight => "clear-night",
            VisualCategory::Cloudy => "cloudy",
            VisualCategory::PartlyCloudyDay => "partly-cloudy-day",
            VisualCategory::PartlyCloudyNight => "partly-cloudy-night",
            VisualCategory::Rain => "rain",
            VisualCategory::Snow => "snow",
            VisualCategory::Thunder => "thunder",
            VisualCategory::Fog => "fog",
            VisualCategory::Drizzle => "drizzle",
        }
    }
}

impl std::fmt::Display for VisualCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a weather code plus day/night flag into a visual category.
///
/// Codes outside every group fall back to partly-cloudy for the given time
/// of day.
pub fn classify(code: i32, is_day: bool) -> VisualCategory {
    match code {
        0 | 1 => {
            if is_day {
                VisualCategory::ClearDay
            } else {
                VisualCategory::ClearNight
            }
        }
        2 => {
            if is_day {
                VisualCategory::PartlyCloudyDay
            } else {
                VisualCategory::PartlyCloudyNight
            }
        }
        3 => VisualCategory::Cloudy,
        45 | 48 => VisualCategory::Fog,
        51 | 53 | 55 => VisualCategory::Drizzle,
        61 | 63 | 65 | 80 | 81 | 82 => VisualCategory::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => VisualCategory::Snow,
        95 | 96 | 99 => VisualCategory::Thunder,
        _ => {
            if is_day {
                VisualCategory::PartlyCloudyDay
            } else {
                VisualCategory::PartlyCloudyNight
            }
        }
    }
}
