use crate::{
    errors::PromptError,
    providers::geo::Geocoder,
    types::{Language, LocationName},
};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_USER_AGENT: &str = "promptdoc/0.1";
pub const DEFAULT_ZOOM: u8 = 10;

#[derive(Deserialize, Debug)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// A `Geocoder` backed by a Nominatim-compatible `/reverse` endpoint.
#[derive(Clone, Debug)]
pub struct NominatimGeocoder {
    client: ReqwestClient,
    api_url: String,
    zoom: u8,
}

impl NominatimGeocoder {
    /// Creates a new `NominatimGeocoder`. Nominatim rejects anonymous clients,
    /// so `user_agent` is sent with every request.
    pub fn new(api_url: String, user_agent: &str, zoom: u8) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .user_agent(user_agent)
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            zoom,
        })
    }

    async fn lookup(
        &self,
        latitude: f64,
        longitude: f64,
        language: Language,
    ) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("zoom", self.zoom.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .header(header::ACCEPT_LANGUAGE, language.code())
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "Reverse geocoding returned a non-200 status");
            return Ok(None);
        }

        let body: ReverseResponse = response.json().await?;
        Ok(body.display_name.filter(|name| !name.trim().is_empty()))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64, language: Language) -> LocationName {
        match self.lookup(latitude, longitude, language).await {
            Ok(Some(name)) => {
                debug!(%name, latitude, longitude, "Resolved location");
                LocationName::Resolved(name)
            }
            Ok(None) => LocationName::Unknown(language),
            Err(e) => {
                warn!("Reverse geocoding failed: {e}");
                LocationName::Unknown(language)
            }
        }
    }
}
