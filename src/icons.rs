//! Weather code to outlook icon mapping.

use std::fmt;

/// Outlook icons ordered by severity band, clear lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherIcon {
    Clear,
    Overcast,
    Fog,
    Rain,
    LightSnow,
    Snowstorm,
    Thunderstorm,
}

impl WeatherIcon {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::LightSnow => "Light snow",
            Self::Snowstorm => "Snowstorm",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a WMO weather code to the icon of the highest band it reaches.
/// Negative codes fall back to clear.
pub fn code_to_icon(code: i32) -> WeatherIcon {
    match code {
        95.. => WeatherIcon::Thunderstorm,
        85..=94 => WeatherIcon::Snowstorm,
        56..=84 => WeatherIcon::LightSnow,
        51..=55 => WeatherIcon::Rain,
        45..=50 => WeatherIcon::Fog,
        1..=44 => WeatherIcon::Overcast,
        _ => WeatherIcon::Clear,
    }
}
