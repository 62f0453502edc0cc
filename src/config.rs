use crate::constants::{FORECAST_API_URL, GEOCODING_API_URL, USER_AGENT};

/// Endpoints and client identity used by [`crate::client::OpenMeteoClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub user_agent: String,
}

impl ApiConfig {
    /// Points both endpoints at `base`, keeping the public API paths.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            geocoding_url: format!("{base}/v1/search"),
            forecast_url: format!("{base}/v1/forecast"),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_API_URL.to_string(),
            forecast_url: FORECAST_API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
