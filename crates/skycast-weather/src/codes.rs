//! Static WMO weather-code table.
//!
//! Open-Meteo reports conditions as WMO codes. This maps a code to the
//! description shown to the user and to the tray icon bucket.
//! See: https://open-meteo.com/en/docs#weathervariables

/// Description used for codes missing from the table. Unknown codes must
/// never fail a fetch.
pub const UNKNOWN_CONDITION: &str = "Unknown weather condition";

/// Human-readable description for a WMO weather code.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 | 57 => "Freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 | 67 => "Freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => UNKNOWN_CONDITION,
    }
}

/// Icon asset bucket for the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl IconKey {
    /// Bucket for a WMO code; `None` when the code has no bucket (the
    /// caller falls back to a generated placeholder icon).
    pub fn from_code(code: i32) -> Option<Self> {
        let key = match code {
            0 => Self::Clear,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => return None,
        };
        Some(key)
    }

    /// Asset lookup key (file stem of the bundled bitmap).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Overcast => "overcast",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }
}
