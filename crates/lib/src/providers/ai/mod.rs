pub mod gemini;
pub mod openai;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for single-turn chat completions
/// against different Large Language Model APIs (e.g., OpenAI, Gemini).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a completion from a system and a user prompt.
    ///
    /// Implementations return the text of the first choice, trimmed.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
