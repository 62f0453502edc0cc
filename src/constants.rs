/// User agent string for HTTP requests
pub const USER_AGENT: &str = "forecast-compare/0.1.0";

/// Open-Meteo geocoding search endpoint
pub const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo daily forecast endpoint
pub const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Number of geocoding candidates requested per lookup
pub const GEOCODING_CANDIDATE_COUNT: u32 = 10;

/// Number of forecast days shown per location
pub const FORECAST_DAYS: usize = 5;

/// Daily fields requested from the forecast endpoint
pub const DAILY_FIELDS: [&str; 4] = [
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_probability_max",
];
