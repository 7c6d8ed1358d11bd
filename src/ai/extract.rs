use crate::models::{ChatCompletionResponse, GenerationResult, MessageContent};
use crate::{Error, Result};

pub const DEFAULT_DESCRIPTION: &str = "Image generated successfully";

/// Pull the first image reference and any accompanying text out of a gateway
/// reply.
///
/// A reply without an image is [`Error::NoImage`]: the HTTP call succeeded but
/// the model declined or failed, so the user should rephrase rather than wait.
pub fn extract(response: &ChatCompletionResponse, enriched_prompt: &str) -> Result<GenerationResult> {
    let message = response
        .choices
        .as_ref()
        .and_then(|choices| choices.first())
        .and_then(Option::as_ref)
        .and_then(|choice| choice.message.as_ref());

    let Some(message) = message else {
        return Err(Error::NoImage);
    };

    let image_url = message
        .images
        .as_ref()
        .and_then(|images| images.first())
        .and_then(Option::as_ref)
        .and_then(|image| image.image_url.as_ref())
        .and_then(|image_url| image_url.url.as_deref())
        .filter(|url| !url.is_empty())
        .ok_or(Error::NoImage)?;

    let description = message
        .content
        .as_ref()
        .and_then(description_text)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    Ok(GenerationResult {
        image_url: image_url.to_string(),
        description,
        prompt: enriched_prompt.to_string(),
    })
}

fn description_text(content: &MessageContent) -> Option<String> {
    let text = match content {
        MessageContent::Text(text) => text.clone(),
        MessageContent::Parts(parts) => parts
            .iter()
            .filter(|part| part.part_type.as_deref().unwrap_or("text") == "text")
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n"),
        MessageContent::Other(_) => return None,
    };

    (!text.is_empty()).then_some(text)
}
