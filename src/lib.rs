//! Image generation proxy
//!
//! Accepts a prompt with an optional art style and aspect ratio, enriches the
//! prompt, asks an upstream AI gateway for an image, and returns the image
//! reference along with the exact prompt that was sent.

pub mod ai;
pub mod app;
pub mod enrich;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
