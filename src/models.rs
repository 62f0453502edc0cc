use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::FORECAST_DAYS;

// ============================================================================
// Domain Models
// ============================================================================

/// A city and its state/region as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub city: String,
    pub state: String,
}

impl LocationQuery {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Label shown above the location's table, e.g. "Austin, Texas".
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C", alias = "c")]
    Celsius,
    #[serde(rename = "F", alias = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a Celsius reading into this unit.
    pub fn convert_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Both locations and the unit chosen for one comparison.
#[derive(Debug, Clone)]
pub struct Submission {
    pub first: LocationQuery,
    pub second: LocationQuery,
    pub unit: TemperatureUnit,
}

// ============================================================================
// Open-Meteo Geocoding Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent when the search has no hits.
    #[serde(default)]
    pub results: Vec<GeocodingCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingCandidate {
    pub name: String,
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodingCandidate {
    pub fn matches(&self, query: &LocationQuery) -> bool {
        let region = self.admin1.as_deref().unwrap_or_default();
        self.name.to_lowercase() == query.city.to_lowercase()
            && region.to_lowercase() == query.state.to_lowercase()
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

// ============================================================================
// Open-Meteo Forecast Models
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    pub daily: DailyForecast,
}

/// Daily values may be `null` where the model has no data for a day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<i64>,
    pub weather_code: Vec<Option<i32>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<i32>>,
}

/// One day of a [`DailyForecast`], read across the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEntry {
    pub time: i64,
    pub weather_code: Option<i32>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_probability: Option<i32>,
}

impl DailyForecast {
    pub fn is_aligned(&self) -> bool {
        let len = self.time.len();
        self.weather_code.len() == len
            && self.temperature_2m_max.len() == len
            && self.temperature_2m_min.len() == len
            && self.precipitation_probability_max.len() == len
    }

    fn len(&self) -> usize {
        [
            self.time.len(),
            self.weather_code.len(),
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.precipitation_probability_max.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    /// The first [`FORECAST_DAYS`] days.
    pub fn days(&self) -> impl Iterator<Item = DailyEntry> + '_ {
        (0..self.len().min(FORECAST_DAYS)).map(move |i| DailyEntry {
            time: self.time[i],
            weather_code: self.weather_code[i],
            temperature_max: self.temperature_2m_max[i],
            temperature_min: self.temperature_2m_min[i],
            precipitation_probability: self.precipitation_probability_max[i],
        })
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompareForecastsRequest {
    pub city1: String,
    #[serde(default)]
    pub state1: String,
    pub city2: String,
    #[serde(default)]
    pub state2: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl From<CompareForecastsRequest> for Submission {
    fn from(request: CompareForecastsRequest) -> Self {
        Self {
            first: LocationQuery::new(request.city1, request.state1),
            second: LocationQuery::new(request.city2, request.state2),
            unit: request.unit,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
}
