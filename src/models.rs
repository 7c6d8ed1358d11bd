//! Data models and structures
//!
//! Defines the client-facing request/response bodies, the AI gateway's
//! chat-completion payloads, and service configuration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Body posted by the UI collaborator.
///
/// A field of the wrong JSON type decodes as `None`: a non-string prompt is
/// then rejected as missing, a non-string style or aspect ratio is skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub aspect_ratio: Option<String>,
}

/// Decodes `T` if the value has the right shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`] for arrays, applied per element so one odd entry does not
/// hide its neighbours.
fn lenient_seq<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub image_url: String,
    pub description: String,
    /// The enriched prompt actually sent upstream.
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

// AI gateway request/response models (OpenAI-compatible chat completions)
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub modalities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Every field decodes leniently so any JSON 2xx body is judged by the
/// extractor instead of failing as a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub choices: Option<Vec<Option<ChatChoice>>>,
    /// The body exactly as received, for diagnostics.
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl ChatCompletionResponse {
    /// Decode a gateway reply. Never fails: a body of the wrong shape simply
    /// carries no choices.
    pub fn from_value(value: serde_json::Value) -> Self {
        let mut response: Self = serde_json::from_value(value.clone()).unwrap_or_default();
        response.raw = value;
        response
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<MessageContent>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub images: Option<Vec<Option<GeneratedImage>>>,
}

/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<MessagePart>),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
pub struct MessagePart {
    #[serde(rename = "type", default)]
    pub part_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedImage {
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<ImageUrl>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUrl {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

// Configuration
pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-image-preview";

/// Startup configuration. The API key is not part of it: the gateway client
/// reads it from the environment on each call.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub gateway_url: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            gateway_url: std::env::var("AI_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            model: std::env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_uses_camel_case() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"prompt": "a red fox", "style": "anime", "aspectRatio": "16:9"}"#,
        )
        .unwrap();

        assert_eq!(request.prompt.as_deref(), Some("a red fox"));
        assert_eq!(request.style.as_deref(), Some("anime"));
        assert_eq!(request.aspect_ratio.as_deref(), Some("16:9"));
    }

    #[test]
    fn test_wrong_typed_style_and_ratio_decode_as_none() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"prompt": "a cat", "style": 3, "aspectRatio": 5}"#).unwrap();
        assert_eq!(request.prompt.as_deref(), Some("a cat"));
        assert!(request.style.is_none());
        assert!(request.aspect_ratio.is_none());

        let request: GenerationRequest =
            serde_json::from_str(r#"{"prompt": "a cat", "style": {"id": "anime"}, "aspectRatio": [16, 9]}"#)
                .unwrap();
        assert!(request.style.is_none());
        assert!(request.aspect_ratio.is_none());
    }

    #[test]
    fn test_non_string_prompt_decodes_as_none() {
        let request: GenerationRequest = serde_json::from_str(r#"{"prompt": 42}"#).unwrap();
        assert!(request.prompt.is_none());

        let request: GenerationRequest = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert!(request.prompt.is_none());

        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_none());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = GenerationResult {
            image_url: "data:image/png;base64,AAAA".to_string(),
            description: "A fox".to_string(),
            prompt: "a red fox".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "imageUrl": "data:image/png;base64,AAAA",
                "description": "A fox",
                "prompt": "a red fox"
            })
        );
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatCompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Generate a high-quality image: a cat".to_string(),
            }],
            modalities: vec!["image".to_string(), "text".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["modalities"], serde_json::json!(["image", "text"]));
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_tolerates_nulls_and_missing_fields() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null, "images": null}}]}"#)
                .unwrap();
        let message = response.choices.unwrap().remove(0).unwrap().message.unwrap();
        assert!(message.content.is_none());
        assert!(message.images.is_none());

        let response: ChatCompletionResponse = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(response.choices.is_none());
    }

    #[test]
    fn test_response_tolerates_wrong_typed_elements() {
        let response = ChatCompletionResponse::from_value(serde_json::json!({
            "choices": [null, { "message": { "images": [null, { "image_url": "https://x" }] } }]
        }));

        let choices = response.choices.unwrap();
        assert!(choices[0].is_none());
        let message = choices[1].as_ref().unwrap().message.as_ref().unwrap();
        let images = message.images.as_ref().unwrap();
        assert!(images[0].is_none());
        assert!(images[1].as_ref().unwrap().image_url.is_none());

        let response = ChatCompletionResponse::from_value(serde_json::json!({ "choices": "nope" }));
        assert!(response.choices.is_none());
    }

    #[test]
    fn test_from_value_keeps_raw_body() {
        let body = serde_json::json!({ "choices": [], "error": { "message": "refused" } });
        let response = ChatCompletionResponse::from_value(body.clone());
        assert_eq!(response.raw, body);

        let response = ChatCompletionResponse::from_value(serde_json::json!([1, 2]));
        assert!(response.choices.is_none());
        assert_eq!(response.raw, serde_json::json!([1, 2]));
    }
}
