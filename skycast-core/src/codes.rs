//! Static WMO weather-code table.

/// Human-readable condition plus icon identifier for one WMO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Look up a WMO weather code.
///
/// Total over all inputs: codes outside the table resolve to the "Unknown"
/// fallback rather than failing.
pub fn lookup(code: i32) -> CodeInfo {
    let (description, icon) = match code {
        0 => ("Clear Sky", "01d"),
        1 => ("Mainly Clear", "02d"),
        2 => ("Partly Cloudy", "03d"),
        3 => ("Overcast", "04d"),
        45 => ("Fog", "50d"),
        48 => ("Depositing Rime Fog", "50d"),
        51 => ("Light Drizzle", "09d"),
        53 => ("Moderate Drizzle", "09d"),
        55 => ("Dense Drizzle", "09d"),
        61 => ("Slight Rain", "10d"),
        63 => ("Moderate Rain", "10d"),
        65 => ("Heavy Rain", "10d"),
        71 => ("Slight Snow", "13d"),
        73 => ("Moderate Snow", "13d"),
        75 => ("Heavy Snow", "13d"),
        80 => ("Slight Rain Showers", "09d"),
        81 => ("Moderate Rain Showers", "09d"),
        82 => ("Violent Rain Showers", "09d"),
        95 => ("Thunderstorm", "11d"),
        96 => ("Thunderstorm with Hail", "11d"),
        99 => ("Thunderstorm with Heavy Hail", "11d"),
        _ => ("Unknown", "03d"),
    };

    CodeInfo { description, icon }
}
