//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The AI provider and geocoder clients are built
//! once and shared by every request; neither carries per-request state.

use crate::config::AppConfig;
use promptdoc::{
    providers::{factory::create_ai_provider, geo::nominatim::NominatimGeocoder},
    DocumentGenerator, DocumentGeneratorBuilder,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The document pipeline shared by all generation handlers.
    pub generator: Arc<DocumentGenerator>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider = create_ai_provider(&config.ai)?;
    let geocoder = NominatimGeocoder::new(
        config.geocoding.api_url.clone(),
        &config.geocoding.user_agent,
        config.geocoding.zoom,
    )?;
    info!(
        geocoding_url = %config.geocoding.api_url,
        language = ?config.tourist_guide_language,
        "Initialized geocoder."
    );

    let generator = DocumentGeneratorBuilder::new()
        .ai_provider(ai_provider)
        .geocoder(Box::new(geocoder))
        .build()?;

    Ok(AppState {
        config: Arc::new(config),
        generator: Arc::new(generator),
    })
}
