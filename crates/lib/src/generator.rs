//! # Document Generator
//!
//! Runs the per-request pipeline: optional reverse geocoding, prompt assembly,
//! a single completion call and fence stripping. The generator holds no
//! per-request state and is shared across concurrent requests.

use crate::{
    errors::PromptError,
    prompts::{build_prompt, system_prompt},
    providers::{ai::AiProvider, geo::Geocoder},
    sanitize::strip_code_fences,
    types::{DocumentRequest, GeneratedDocument, LocationName},
};
use std::fmt;
use tracing::{debug, info};

pub struct DocumentGenerator {
    pub ai_provider: Box<dyn AiProvider>,
    pub geocoder: Box<dyn Geocoder>,
}

impl fmt::Debug for DocumentGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentGenerator")
            .field("ai_provider", &self.ai_provider)
            .field("geocoder", &self.geocoder)
            .finish()
    }
}

impl DocumentGenerator {
    /// Resolves the location for coordinate-based requests. Returns `None` for
    /// text requests so no geocoding call is made.
    pub async fn resolve_location(&self, request: &DocumentRequest) -> Option<LocationName> {
        let coordinates = request.coordinates()?;
        let language = request.kind().language();
        Some(
            self.geocoder
                .reverse(coordinates.latitude, coordinates.longitude, language)
                .await,
        )
    }

    /// Generates one document. AI provider failures are returned unchanged;
    /// geocoding failures have already been folded into a placeholder.
    pub async fn generate(
        &self,
        request: &DocumentRequest,
    ) -> Result<GeneratedDocument, PromptError> {
        let kind = request.kind();
        let location = self.resolve_location(request).await;
        if let Some(location) = &location {
            info!(%location, resolved = location.is_resolved(), "Location for {kind:?}");
        }

        let user_prompt = build_prompt(request, location.as_ref());
        let system = system_prompt(kind);
        debug!(system_prompt = %system, user_prompt = %user_prompt, "--> Sending prompts to AI Provider");

        let raw_response = self
            .ai_provider
            .generate(system, &user_prompt, kind.temperature())
            .await?;
        debug!("<-- Completion from AI: {} bytes", raw_response.len());

        Ok(GeneratedDocument {
            kind,
            html: strip_code_fences(&raw_response),
        })
    }
}

/// A builder for creating `DocumentGenerator` instances.
#[derive(Default)]
pub struct DocumentGeneratorBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    geocoder: Option<Box<dyn Geocoder>>,
}

impl DocumentGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    pub fn geocoder(mut self, geocoder: Box<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Builds the `DocumentGenerator`, failing if either collaborator is missing.
    pub fn build(self) -> Result<DocumentGenerator, PromptError> {
        Ok(DocumentGenerator {
            ai_provider: self.ai_provider.ok_or(PromptError::MissingAiProvider)?,
            geocoder: self.geocoder.ok_or(PromptError::MissingGeocoder)?,
        })
    }
}
