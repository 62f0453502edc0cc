use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::OpenMeteoClient;
use crate::config::ApiConfig;
use crate::controller::FormController;
use crate::error::{ForecastError, GENERIC_FAILURE_MESSAGE};
use crate::models::{CompareForecastsRequest, GetForecastRequest, LocationQuery, Submission};
use crate::render::{render, render_label};
use crate::surface::{ForecastSurface, RenderSlot, SlotBinding, TableView};

const MISSING_CITY_MESSAGE: &str = "Please enter the name of a city.";

/// MCP service exposing the forecast comparison tools
#[derive(Clone)]
pub struct ForecastService {
    client: Arc<OpenMeteoClient>,
    tool_router: ToolRouter<Self>,
}

impl ForecastService {
    pub fn new(config: ApiConfig) -> Result<Self, ForecastError> {
        Ok(Self {
            client: Arc::new(OpenMeteoClient::new(config)?),
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for ForecastService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "forecast-compare".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Side-by-side 5-day forecasts for two cities, powered by Open-Meteo. \
                Provide each city with its state or region as the geocoder names it."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl ForecastService {
    /// Compares the 5-day forecasts of two locations
    #[tool(description = "Compare 5-day forecasts for two locations. Provide city1/state1 and city2/state2 (e.g., city1: 'Austin', state1: 'Texas', city2: 'Paris', state2: 'Île-de-France') and unit 'C' or 'F'.")]
    async fn compare_forecasts(
        &self,
        Parameters(request): Parameters<CompareForecastsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let submission = Submission::from(request);
        let mut view = TableView::new(&RenderSlot::ALL);
        let mut controller = FormController::new(Arc::clone(&self.client), Vec::new());
        let outcome = controller.submit(&submission, &mut view).await;
        let alerts = controller.into_notifier();

        match outcome {
            Ok(()) => Ok(CallToolResult::success(vec![Content::text(view.to_markdown())])),
            Err(_) => Ok(CallToolResult::error(
                alerts.into_iter().map(Content::text).collect(),
            )),
        }
    }

    /// Gets the 5-day forecast of a single location
    #[tool(description = "Get the 5-day forecast for one location. Provide city and state (e.g., city: 'Austin', state: 'Texas') and unit 'C' or 'F'.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let location = LocationQuery::new(request.city, request.state);
        tracing::info!("Getting forecast for {}", location.label());

        if location.city.is_empty() {
            return Ok(CallToolResult::error(vec![Content::text(MISSING_CITY_MESSAGE)]));
        }

        let Some(forecast) = self.client.fetch_forecast(&location).await else {
            return Ok(CallToolResult::error(vec![Content::text(GENERIC_FAILURE_MESSAGE)]));
        };

        let mut view = TableView::new(&[RenderSlot::First]);
        let binding = SlotBinding::bind(RenderSlot::First, &view);
        render_label(&mut view, &binding, &location);
        render(&mut view, &binding, &forecast, request.unit);
        view.reveal_results();

        Ok(CallToolResult::success(vec![Content::text(view.to_markdown())]))
    }
}
