//! Side-by-side 5-day forecasts for two cities from the Open-Meteo APIs.

pub mod client;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod icons;
pub mod models;
pub mod render;
pub mod service;
pub mod surface;

pub use client::OpenMeteoClient;
pub use config::ApiConfig;
pub use controller::{FormController, FormState, Notifier};
pub use error::ForecastError;
pub use models::{Coordinates, Forecast, LocationQuery, Submission, TemperatureUnit};
pub use service::ForecastService;
pub use surface::{ForecastSurface, RenderSlot, SlotBinding, TableView};
