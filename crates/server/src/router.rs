use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/generate-html-direct/",
            post(handlers::generate_proposal_handler),
        )
        .route(
            "/generate-population-report/",
            post(handlers::generate_population_report_handler),
        )
        .route(
            "/generate-tourist-info-coordinates/",
            post(handlers::generate_tourist_info_handler),
        );

    if app_state.config.legacy_routes {
        router = router.route(
            "/generate-population-report-coordinates/",
            post(handlers::generate_coordinate_population_report_handler),
        );
    }

    router
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
