pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::dataset::handlers as dataset_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job dataset search
        .route(
            "/api/v1/jobs/roles",
            get(dataset_handlers::handle_search_roles),
        )
        .route(
            "/api/v1/jobs/titles",
            get(dataset_handlers::handle_search_titles),
        )
        // Gap analysis
        .route(
            "/api/v1/analysis",
            post(analysis_handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/analysis/text",
            post(analysis_handlers::handle_analyze_text),
        )
        .with_state(state)
}
