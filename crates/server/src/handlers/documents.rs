//! # Document Generation Handlers
//!
//! Every handler maps its body onto a `DocumentRequest`, runs it through the
//! shared `DocumentGenerator` and serves the sanitized result as `text/html`.
//! Bodies are validated for shape only; coordinates are not range-checked.

use super::{AppError, AppJson, AppState};
use axum::{extract::State, response::Html};
use promptdoc::{ClientTextRequest, CoordinatesRequest, DocumentRequest};
use tracing::info;

async fn render(app_state: &AppState, request: DocumentRequest) -> Result<Html<String>, AppError> {
    let document = app_state.generator.generate(&request).await?;
    info!(
        kind = ?document.kind,
        bytes = document.html.len(),
        "Generated document"
    );
    Ok(Html(document.html))
}

/// Handler for `POST /generate-html-direct/`: a sectioned project proposal.
pub async fn generate_proposal_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ClientTextRequest>,
) -> Result<Html<String>, AppError> {
    info!("Received proposal request ({} chars)", payload.client_text.len());
    let request = DocumentRequest::Proposal {
        client_text: payload.client_text,
    };
    render(&app_state, request).await
}

/// Handler for `POST /generate-population-report/`: a population report from free text.
pub async fn generate_population_report_handler(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ClientTextRequest>,
) -> Result<Html<String>, AppError> {
    info!(
        "Received population report request ({} chars)",
        payload.client_text.len()
    );
    let request = DocumentRequest::PopulationReport {
        client_text: payload.client_text,
    };
    render(&app_state, request).await
}

/// Handler for `POST /generate-tourist-info-coordinates/`: a travel guide in the
/// configured language.
pub async fn generate_tourist_info_handler(
    State(app_state): State<AppState>,
    AppJson(coordinates): AppJson<CoordinatesRequest>,
) -> Result<Html<String>, AppError> {
    info!(
        latitude = coordinates.latitude,
        longitude = coordinates.longitude,
        "Received tourist guide request"
    );
    let request = DocumentRequest::TouristGuide {
        coordinates,
        language: app_state.config.tourist_guide_language,
    };
    render(&app_state, request).await
}

/// Handler for `POST /generate-population-report-coordinates/`. Only routed when
/// `legacy_routes` is enabled.
pub async fn generate_coordinate_population_report_handler(
    State(app_state): State<AppState>,
    AppJson(coordinates): AppJson<CoordinatesRequest>,
) -> Result<Html<String>, AppError> {
    info!(
        latitude = coordinates.latitude,
        longitude = coordinates.longitude,
        "Received coordinate population report request"
    );
    render(
        &app_state,
        DocumentRequest::CoordinatePopulationReport(coordinates),
    )
    .await
}
