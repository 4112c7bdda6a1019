//! # Request and Document Types
//!
//! The transient, per-request values that flow through the generation pipeline.
//! Nothing here is persisted or shared between requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The language the generated prose is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Bengali,
}

impl Language {
    /// The name of the language as written into prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bengali => "Bengali (বাংলা)",
        }
    }

    /// The value sent as `Accept-Language` to the geocoding service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bengali => "bn",
        }
    }

    /// The place name used when a location cannot be resolved.
    pub fn unknown_location(&self) -> &'static str {
        match self {
            Language::English => "Unknown location",
            Language::Bengali => "অজানা স্থান",
        }
    }
}

/// The body of the free-text endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientTextRequest {
    pub client_text: String,
}

/// The body of the coordinate endpoints. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CoordinatesRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// A place name produced by a `Geocoder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationName {
    Resolved(String),
    Unknown(Language),
}

impl LocationName {
    pub fn as_str(&self) -> &str {
        match self {
            LocationName::Resolved(name) => name,
            LocationName::Unknown(language) => language.unknown_location(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationName::Resolved(_))
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of document to generate. Each kind owns its outline, prose language,
/// system message and sampling temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Proposal,
    PopulationReport,
    /// Population report for a geocoded location. Superseded by `TouristGuide`
    /// and only served when legacy routes are enabled.
    CoordinatePopulationReport,
    TouristGuide(Language),
}

impl DocumentKind {
    pub fn language(&self) -> Language {
        match self {
            DocumentKind::TouristGuide(language) => *language,
            _ => Language::English,
        }
    }

    /// Structured documents are sampled cold, narrative travel content warm.
    pub fn temperature(&self) -> f32 {
        match self {
            DocumentKind::TouristGuide(_) => 0.7,
            _ => 0.2,
        }
    }
}

/// The caller-supplied payload for a single document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentRequest {
    Proposal { client_text: String },
    PopulationReport { client_text: String },
    CoordinatePopulationReport(CoordinatesRequest),
    TouristGuide {
        coordinates: CoordinatesRequest,
        language: Language,
    },
}

impl DocumentRequest {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRequest::Proposal { .. } => DocumentKind::Proposal,
            DocumentRequest::PopulationReport { .. } => DocumentKind::PopulationReport,
            DocumentRequest::CoordinatePopulationReport(_) => {
                DocumentKind::CoordinatePopulationReport
            }
            DocumentRequest::TouristGuide { language, .. } => DocumentKind::TouristGuide(*language),
        }
    }

    pub fn coordinates(&self) -> Option<CoordinatesRequest> {
        match self {
            DocumentRequest::CoordinatePopulationReport(coordinates)
            | DocumentRequest::TouristGuide { coordinates, .. } => Some(*coordinates),
            _ => None,
        }
    }
}

/// Sanitized model output, ready to be served as `text/html`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub html: String,
}
