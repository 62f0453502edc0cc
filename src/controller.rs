//! Orchestrates one two-location comparison from submission to rendered tables.

use std::sync::Arc;

use crate::client::OpenMeteoClient;
use crate::error::ForecastError;
use crate::models::Submission;
use crate::render::{render, render_label};
use crate::surface::{ForecastSurface, RenderSlot, SlotBinding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Resolving,
    Rendering,
    ErrorShown,
}

/// Blocking error notification shown to the user.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[derive(Debug)]
pub struct FormController<N> {
    client: Arc<OpenMeteoClient>,
    notifier: N,
    state: FormState,
}

impl<N: Notifier> FormController<N> {
    pub fn new(client: Arc<OpenMeteoClient>, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Handles one submission. Errors are alerted through the notifier and
    /// returned; the surface is only written once both forecasts are in hand.
    pub async fn submit<S: ForecastSurface + ?Sized>(
        &mut self,
        submission: &Submission,
        surface: &mut S,
    ) -> Result<(), ForecastError> {
        self.state = FormState::Resolving;
        let result = self.run(submission, surface).await;

        if let Err(e) = &result {
            tracing::warn!("Submission failed: {}", e);
            self.state = FormState::ErrorShown;
            self.notifier.alert(&e.user_message());
        }

        self.state = FormState::Idle;
        result
    }

    async fn run<S: ForecastSurface + ?Sized>(
        &mut self,
        submission: &Submission,
        surface: &mut S,
    ) -> Result<(), ForecastError> {
        let Submission { first, second, unit } = submission;

        if first.city.is_empty() || second.city.is_empty() {
            return Err(ForecastError::Validation);
        }

        tracing::info!(
            "Comparing {} with {} in {:?}",
            first.label(),
            second.label(),
            unit
        );

        let first_coordinates = self.client.resolve(first).await?;
        let second_coordinates = self.client.resolve(second).await?;

        let first_forecast = self.client.fetch_forecast_at(first_coordinates).await?;
        let second_forecast = self.client.fetch_forecast_at(second_coordinates).await?;

        self.state = FormState::Rendering;
        for (slot, location, forecast) in [
            (RenderSlot::First, first, &first_forecast),
            (RenderSlot::Second, second, &second_forecast),
        ] {
            let binding = SlotBinding::bind(slot, &*surface);
            render_label(surface, &binding, location);
            render(surface, &binding, forecast, *unit);
        }
        surface.reveal_results();

        Ok(())
    }
}
