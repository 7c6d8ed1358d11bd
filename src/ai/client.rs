use super::ImageGateway;
use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, API_KEY_VAR, DEFAULT_GATEWAY_URL,
    DEFAULT_MODEL,
};
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// HTTP client for the OpenAI-compatible AI gateway.
///
/// No timeout is set on the underlying client; each generation is a single
/// attempt bounded only by transport defaults.
pub struct GatewayClient {
    client: Client,
    base_url: String,
    model: String,
    api_key_var: String,
}

impl GatewayClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self::new_with_client(base_url, model, Client::new())
    }

    pub fn new_with_client(base_url: String, model: String, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key_var: API_KEY_VAR.to_string(),
        }
    }

    /// Read the credential from a different environment variable.
    pub fn with_api_key_var(mut self, var: impl Into<String>) -> Self {
        self.api_key_var = var.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Read on every call. Empty counts as missing.
    fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_var) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => {
                tracing::error!("{} is not configured", self.api_key_var);
                Err(Error::MissingApiKey)
            }
        }
    }

    fn build_request(&self, enriched_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompts::render(prompts::IMAGE_REQUEST, &[("prompt", enriched_prompt)]),
            }],
            modalities: vec!["image".to_string(), "text".to_string()],
        }
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_URL.to_string(), DEFAULT_MODEL.to_string())
    }
}

/// Map a non-success gateway status onto the error the caller sees.
fn classify_failure(status: StatusCode, body: String) -> Error {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
        StatusCode::PAYMENT_REQUIRED => Error::UsageLimit,
        _ => Error::Upstream {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl ImageGateway for GatewayClient {
    async fn generate(&self, enriched_prompt: &str) -> Result<ChatCompletionResponse> {
        let api_key = self.api_key()?;
        let request = self.build_request(enriched_prompt);
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);

        tracing::debug!("Sending image request to AI gateway (model: {})", self.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to AI gateway: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error (status {}): {}", status, error_text);
            return Err(classify_failure(status, error_text));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse AI gateway response: {}\nBody: {}", e, body);
            Error::MalformedUpstream(e.to_string())
        })?;

        Ok(ChatCompletionResponse::from_value(value))
    }
}
