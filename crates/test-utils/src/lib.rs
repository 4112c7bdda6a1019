use async_trait::async_trait;
use promptdoc::errors::PromptError;
use promptdoc::providers::{ai::AiProvider, geo::Geocoder};
use promptdoc::types::{Language, LocationName};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A recorded call to `MockAiProvider::generate`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
}

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    fallback: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            fallback: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a response for a specific prompt.
    /// The key should be a unique substring of the system prompt.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Sets the response returned when no programmed key matches.
    pub fn with_default_response(self, response: &str) -> Self {
        *self.fallback.lock().unwrap() = Some(response.to_string());
        self
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            temperature,
        });

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if system_prompt.contains(key) {
                return Ok(response.clone());
            }
        }

        self.fallback.lock().unwrap().clone().ok_or_else(|| {
            PromptError::AiApi(format!(
                "MockAiProvider: No response programmed for system prompt. Got: '{system_prompt}'"
            ))
        })
    }
}

// --- Mock Geocoder ---

/// A `Geocoder` returning a fixed name, or the placeholder when built with `unknown`.
#[derive(Clone, Debug, Default)]
pub struct MockGeocoder {
    name: Option<String>,
    lookups: Arc<Mutex<Vec<(f64, f64, Language)>>>,
}

impl MockGeocoder {
    pub fn resolving(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            lookups: Arc::default(),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> Vec<(f64, f64, Language)> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64, language: Language) -> LocationName {
        self.lookups
            .lock()
            .unwrap()
            .push((latitude, longitude, language));
        match &self.name {
            Some(name) => LocationName::Resolved(name.clone()),
            None => LocationName::Unknown(language),
        }
    }
}
