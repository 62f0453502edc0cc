//! Error taxonomy shared by the resolver, fetcher and form controller.

use thiserror::Error;

/// Shown when a forecast cannot be produced for either location.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to locate one or both of the cities.";

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Please enter the names of both cities.")]
    Validation,

    #[error("Unable to find {city}, {state}")]
    NotFound { city: String, state: String },

    #[error("{endpoint} request failed: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },
}

impl ForecastError {
    pub(crate) fn network(endpoint: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Network {
            endpoint,
            message: err.to_string(),
        }
    }

    /// Message for the error notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation | Self::NotFound { .. } => self.to_string(),
            Self::Network { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
