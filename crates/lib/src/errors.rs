use thiserror::Error;

/// Custom error types for the document generation pipeline.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider returned no completion choices")]
    EmptyCompletion,
    #[error("AI provider is not configured")]
    MissingAiProvider,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Unsupported AI provider type '{0}'")]
    UnsupportedProvider(String),
    #[error("Geocoder is not configured")]
    MissingGeocoder,
}
