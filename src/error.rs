//! Error handling and custom error types
//!
//! Provides unified error handling across the service using thiserror. Every
//! variant knows the HTTP status and the message a caller should see.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please provide a valid prompt")]
    InvalidPrompt,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    #[error("Usage limit reached. Please check your account.")]
    UsageLimit,

    /// Any other non-2xx from the gateway. The body is kept for logs only.
    #[error("AI gateway error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("No image was generated. Try a different prompt.")]
    NoImage,

    #[error("Failed to parse AI gateway response: {0}")]
    MalformedUpstream(String),

    #[error("Invalid request body: {0}")]
    MalformedRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidPrompt => StatusCode::BAD_REQUEST,
            Error::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Error::UsageLimit => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the caller.
    ///
    /// Upstream failures other than 429/402 collapse into one generic message;
    /// unexpected errors surface their own display text.
    pub fn client_message(&self) -> String {
        match self {
            Error::Upstream { .. } => "Failed to generate image. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
