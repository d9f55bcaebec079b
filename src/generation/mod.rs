pub mod content;
pub mod fallback;
pub mod json_utils;
pub mod ollama;

use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use crate::error::GenerationError;

pub use ollama::OllamaGenerator;

/// Sampling options passed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            temperature: 0.7,
            max_output_tokens: 1024,
        }
    }
}

/// External text generator. Returns raw text; callers validate its shape.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Model or provider name for logs.
    fn name(&self) -> &str;

    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}
