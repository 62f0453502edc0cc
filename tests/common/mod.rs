#![allow(dead_code)]

use serde_json::{json, Value};

// 2024-01-01 00:00 in America/Chicago, a Monday.
pub const CHICAGO_MONDAY: i64 = 1_704_088_800;

pub fn candidate(name: &str, admin1: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "id": 1,
        "name": name,
        "admin1": admin1,
        "latitude": latitude,
        "longitude": longitude,
        "country_code": "US"
    })
}

pub fn geocoding_body(candidates: Vec<Value>) -> Value {
    json!({ "results": candidates, "generationtime_ms": 0.7 })
}

pub fn forecast_body(latitude: f64, longitude: f64) -> Value {
    let time: Vec<i64> = (0..7).map(|d| CHICAGO_MONDAY + d * 86_400).collect();
    json!({
        "latitude": latitude,
        "longitude": longitude,
        "timezone": "America/Chicago",
        "utc_offset_seconds": -21600,
        "daily_units": {
            "time": "unixtime",
            "weather_code": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_probability_max": "%"
        },
        "daily": {
            "time": time,
            "weather_code": [0, 2, 45, 53, 95, 3, 3],
            "temperature_2m_max": [18.4, 20.0, 22.1, 19.5, 25.0, 21.0, 20.0],
            "temperature_2m_min": [8.0, 9.5, 11.2, 10.0, 15.3, 12.0, 11.0],
            "precipitation_probability_max": [0, 10, 35, 60, 90, 5, 5]
        }
    })
}
