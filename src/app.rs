//! Generation pipeline: validate, enrich, call the gateway, extract.

use crate::ai::{self, GatewayClient, ImageGateway};
use crate::enrich::enrich;
use crate::models::{Config, GenerationRequest, GenerationResult};
use crate::{Error, Result};
use tracing::{error, info, warn};

/// Stateless apart from the gateway handle; safe to share across requests.
pub struct App {
    gateway: Box<dyn ImageGateway>,
}

impl App {
    /// Build an app around any gateway implementation.
    ///
    /// Integration tests and local harnesses use this to inject
    /// [`ai::MockGateway`].
    pub fn with_gateway(gateway: Box<dyn ImageGateway>) -> Self {
        Self { gateway }
    }

    pub fn from_config(config: &Config) -> Self {
        info!(
            "AI gateway: {} (model: {})",
            config.gateway_url, config.model
        );
        Self::with_gateway(Box::new(GatewayClient::new(
            config.gateway_url.clone(),
            config.model.clone(),
        )))
    }

    /// Run one generation end to end. Every path ends in exactly one result;
    /// nothing is retried.
    #[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let prompt = match request.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => prompt,
            _ => {
                warn!("Invalid prompt received");
                return Err(Error::InvalidPrompt);
            }
        };

        let enriched = enrich(
            prompt,
            request.style.as_deref(),
            request.aspect_ratio.as_deref(),
        );
        info!("Generating image with prompt: {}", enriched);

        let response = self.gateway.generate(&enriched).await?;
        info!("AI gateway response received successfully");

        ai::extract(&response, &enriched).map_err(|e| {
            error!("No image in response: {}", response.raw);
            e
        })
    }
}
