//! AI gateway integration for image generation
//!
//! The gateway is the single network boundary: one chat-completion call per
//! generation, no retries. Extraction of the image reference from the reply
//! lives in [`extract`].

pub mod client;
pub mod extract;
pub mod mock;

pub use client::GatewayClient;
pub use extract::extract;
pub use mock::MockGateway;

use crate::models::ChatCompletionResponse;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Ask the upstream model for an image of `enriched_prompt`.
    ///
    /// Non-2xx replies are already classified into [`crate::Error`] variants.
    async fn generate(&self, enriched_prompt: &str) -> Result<ChatCompletionResponse>;
}

#[async_trait]
impl<T: ImageGateway + ?Sized> ImageGateway for std::sync::Arc<T> {
    async fn generate(&self, enriched_prompt: &str) -> Result<ChatCompletionResponse> {
        (**self).generate(enriched_prompt).await
    }
}
