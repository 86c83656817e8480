use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::evaluate;
use super::health;
use super::state::AppState;

/// Create the application router.
///
/// CORS is wide open; restricting origins is a deployment concern, not part
/// of the evaluation contract.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        .route("/evaluate", post(evaluate::evaluate_essay))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
