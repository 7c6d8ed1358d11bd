use super::ImageGateway;
use crate::models::ChatCompletionResponse;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Canned reply for [`MockGateway`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Raw JSON body, decoded as the gateway client would.
    Body(serde_json::Value),
    RateLimited,
    UsageLimit,
    Status(u16),
    MissingApiKey,
}

/// In-memory gateway that records prompts and replays canned replies.
pub struct MockGateway {
    replies: Arc<Mutex<Vec<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// Convenience for a well-formed reply carrying one image.
    pub fn with_image(self, url: &str, text: Option<&str>) -> Self {
        self.with_reply(MockReply::Body(serde_json::json!({
            "choices": [{
                "message": {
                    "content": text,
                    "images": [{ "type": "image_url", "image_url": { "url": url } }]
                }
            }]
        })))
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Enriched prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGateway for MockGateway {
    async fn generate(&self, enriched_prompt: &str) -> Result<ChatCompletionResponse> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(enriched_prompt.to_string());
            prompts.len()
        };

        let reply = {
            let replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                None
            } else {
                Some(replies[(call - 1) % replies.len()].clone())
            }
        };

        match reply {
            // Default mock response
            None => Ok(ChatCompletionResponse::from_value(serde_json::json!({
                "choices": [{ "message": {
                    "images": [{ "image_url": { "url": "https://mock.test/image.png" } }]
                }}]
            }))),
            Some(MockReply::Body(body)) => Ok(ChatCompletionResponse::from_value(body)),
            Some(MockReply::RateLimited) => Err(Error::RateLimited),
            Some(MockReply::UsageLimit) => Err(Error::UsageLimit),
            Some(MockReply::Status(status)) => Err(Error::Upstream {
                status,
                body: "mock failure".to_string(),
            }),
            Some(MockReply::MissingApiKey) => Err(Error::MissingApiKey),
        }
    }
}
