//! # AI Provider Factory
//!
//! Centralizes the construction of `AiProvider` instances from configuration so
//! the server and the tests build providers the same way.

use crate::{
    errors::PromptError,
    providers::ai::{
        gemini::GeminiProvider,
        openai::{OpenAiProvider, DEFAULT_OPENAI_API_URL, DEFAULT_OPENAI_MODEL},
        AiProvider,
    },
};
use serde::Deserialize;
use tracing::info;

/// Configuration for the completion provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("openai" or "gemini").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Derived from the model name for Gemini when unset.
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model_name() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
        }
    }
}

/// Creates an AI provider instance from its configuration.
pub fn create_ai_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "openai" => {
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());
            info!(%api_url, model = %config.model_name, "Configuring OpenAI-compatible provider");
            Box::new(OpenAiProvider::new(
                api_url,
                config.api_key.clone(),
                config.model_name.clone(),
            )?)
        }
        "gemini" => {
            let api_key = config
                .api_key
                .clone()
                .ok_or(PromptError::MissingApiKey)?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| GeminiProvider::url_for_model(&config.model_name));
            info!(%api_url, "Configuring Gemini provider");
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        other => return Err(PromptError::UnsupportedProvider(other.to_string())),
    };
    Ok(provider)
}
