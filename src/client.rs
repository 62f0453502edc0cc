use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::constants::{DAILY_FIELDS, GEOCODING_CANDIDATE_COUNT};
use crate::error::ForecastError;
use crate::models::{Coordinates, Forecast, GeocodingResponse, LocationQuery};

/// HTTP client for the Open-Meteo geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: ApiConfig,
}

impl OpenMeteoClient {
    pub fn new(config: ApiConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ForecastError::network("client", e))?;

        Ok(Self { client, config })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T, Q>(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &Q,
    ) -> Result<T, ForecastError>
    where
        T: for<'de> Deserialize<'de>,
        Q: serde::Serialize + ?Sized,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ForecastError::network(endpoint, e))?;

        if !response.status().is_success() {
            return Err(ForecastError::network(
                endpoint,
                format!("status {}", response.status()),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ForecastError::network(endpoint, e))
    }

    /// Resolves a city and state to the first geocoding candidate matching both.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<Coordinates, ForecastError> {
        tracing::debug!("Geocoding {}, {}", query.city, query.state);

        let count = GEOCODING_CANDIDATE_COUNT.to_string();
        let params = [
            ("name", query.city.as_str()),
            ("count", count.as_str()),
            ("language", "en"),
            ("format", "json"),
        ];

        let response = self
            .make_request::<GeocodingResponse, _>("geocoding", &self.config.geocoding_url, &params)
            .await?;

        let candidates = response.results.len();
        match response.results.iter().find(|c| c.matches(query)) {
            Some(candidate) => {
                let coordinates = candidate.coordinates();
                tracing::debug!(
                    "Matched {}, {} at ({:.4}, {:.4}) among {} candidates",
                    query.city,
                    query.state,
                    coordinates.latitude,
                    coordinates.longitude,
                    candidates
                );
                Ok(coordinates)
            }
            None => {
                tracing::warn!(
                    "No geocoding match for {}, {} among {} candidates",
                    query.city,
                    query.state,
                    candidates
                );
                Err(ForecastError::NotFound {
                    city: query.city.clone(),
                    state: query.state.clone(),
                })
            }
        }
    }

    /// Fetches the daily forecast for already resolved coordinates.
    pub async fn fetch_forecast_at(
        &self,
        coordinates: Coordinates,
    ) -> Result<Forecast, ForecastError> {
        let params = [
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("daily", DAILY_FIELDS.join(",")),
            ("timeformat", "unixtime".to_string()),
            ("timezone", "auto".to_string()),
        ];

        let forecast = self
            .make_request::<Forecast, _>("forecast", &self.config.forecast_url, &params)
            .await?;

        if !forecast.daily.is_aligned() {
            return Err(ForecastError::network(
                "forecast",
                "daily arrays differ in length",
            ));
        }

        tracing::debug!(
            "Fetched {} forecast days for ({:.4}, {:.4}) in {}",
            forecast.daily.time.len(),
            coordinates.latitude,
            coordinates.longitude,
            forecast.timezone
        );
        Ok(forecast)
    }

    /// Resolves `query` and fetches its forecast; `None` when either step fails.
    pub async fn fetch_forecast(&self, query: &LocationQuery) -> Option<Forecast> {
        let coordinates = match self.resolve(query).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::warn!("Unable to retrieve coordinates: {}", e);
                return None;
            }
        };

        match self.fetch_forecast_at(coordinates).await {
            Ok(forecast) => Some(forecast),
            Err(e) => {
                tracing::warn!("Error fetching weather data: {}", e);
                None
            }
        }
    }
}
