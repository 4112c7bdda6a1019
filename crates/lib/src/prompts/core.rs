//! # Prompt Assembly
//!
//! Pure functions that turn a `DocumentRequest` into the system and user prompts
//! sent to the AI provider. The caller's payload is interpolated verbatim; it is
//! neither escaped nor trimmed.

use super::tasks::*;
use crate::types::{CoordinatesRequest, DocumentKind, DocumentRequest, Language, LocationName};

/// Returns the fixed system message for a document kind.
pub fn system_prompt(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Proposal => PROPOSAL_SYSTEM_PROMPT,
        DocumentKind::PopulationReport | DocumentKind::CoordinatePopulationReport => {
            POPULATION_REPORT_SYSTEM_PROMPT
        }
        DocumentKind::TouristGuide(_) => TOURIST_GUIDE_SYSTEM_PROMPT,
    }
}

/// Renders the shared formatting rules for the given prose language.
pub fn formatting_rules(language: Language) -> String {
    HTML_FORMATTING_RULES.replace("{language}", language.name())
}

/// Builds the user prompt for a request.
///
/// Coordinate-based requests embed `location`; when it is `None` the
/// language-appropriate placeholder is used so the prompt is always complete.
pub fn build_prompt(request: &DocumentRequest, location: Option<&LocationName>) -> String {
    let kind = request.kind();
    let language = kind.language();
    let unknown = LocationName::Unknown(language);
    let location = location.unwrap_or(&unknown);

    let (persona, task, payload) = match request {
        DocumentRequest::Proposal { client_text } => (
            PROPOSAL_PERSONA,
            PROPOSAL_TASK,
            text_payload(PROPOSAL_PAYLOAD, client_text),
        ),
        DocumentRequest::PopulationReport { client_text } => (
            POPULATION_REPORT_PERSONA,
            POPULATION_REPORT_TASK,
            text_payload(POPULATION_REPORT_PAYLOAD, client_text),
        ),
        DocumentRequest::CoordinatePopulationReport(coordinates) => (
            POPULATION_REPORT_PERSONA,
            COORDINATE_POPULATION_REPORT_TASK,
            coordinate_payload(coordinates, location),
        ),
        DocumentRequest::TouristGuide { coordinates, .. } => (
            TOURIST_GUIDE_PERSONA,
            TOURIST_GUIDE_TASK,
            coordinate_payload(coordinates, location),
        ),
    };

    format!(
        "{persona}\n\n{task}\n{rules}\n\n{payload}\n",
        rules = formatting_rules(language)
    )
}

fn text_payload(template: &str, client_text: &str) -> String {
    template.replace("{client_text}", client_text)
}

// The location is substituted last so a place name containing a placeholder is
// never expanded.
fn coordinate_payload(coordinates: &CoordinatesRequest, location: &LocationName) -> String {
    COORDINATE_PAYLOAD
        .replace("{latitude}", &coordinates.latitude.to_string())
        .replace("{longitude}", &coordinates.longitude.to_string())
        .replace("{location}", location.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_prompt_keeps_outline_order() {
        let prompt = build_prompt(
            &DocumentRequest::Proposal {
                client_text: "A CRM".to_string(),
            },
            None,
        );
        let overview = prompt.find("0. Project Overview").unwrap();
        let conclusion = prompt.find("14. Conclusion").unwrap();
        assert!(overview < conclusion);
        assert!(prompt.starts_with(PROPOSAL_PERSONA));
        assert!(prompt.trim_end().ends_with("\"\"\"A CRM\"\"\""));
    }

    #[test]
    fn test_coordinate_prompt_falls_back_to_placeholder() {
        let request = DocumentRequest::TouristGuide {
            coordinates: CoordinatesRequest {
                latitude: 1.5,
                longitude: -2.25,
            },
            language: Language::Bengali,
        };
        let prompt = build_prompt(&request, None);
        assert!(prompt.contains("\"\"\"অজানা স্থান\"\"\""));
        assert!(prompt.contains("latitude 1.5, longitude -2.25"));
        assert!(prompt.contains("Write all prose in Bengali"));
    }

    #[test]
    fn test_location_placeholders_are_not_expanded() {
        let request = DocumentRequest::CoordinatePopulationReport(CoordinatesRequest {
            latitude: 0.0,
            longitude: 0.0,
        });
        let location = LocationName::Resolved("{latitude} Street".to_string());
        let prompt = build_prompt(&request, Some(&location));
        assert!(prompt.contains("\"\"\"{latitude} Street\"\"\""));
    }
}
