pub mod error;
pub mod evaluations;
pub mod health;
pub mod negotiate;
pub mod pieces;
pub mod studios;

use axum::{
    Json, Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pieces
        .route(
            "/pieces",
            post(pieces::create_piece).get(pieces::list_pieces),
        )
        .route(
            "/pieces/:id",
            get(pieces::get_piece)
                .put(pieces::update_piece)
                .delete(pieces::delete_piece),
        )
        .route(
            "/pieces/:id/evaluations",
            get(evaluations::evaluations_for_piece),
        )
        // Studios
        .route(
            "/studios",
            post(studios::create_studio).get(studios::list_studios),
        )
        .route(
            "/studios/:id",
            get(studios::get_studio)
                .put(studios::update_studio)
                .delete(studios::delete_studio),
        )
        .route("/studios/:id/pieces", get(pieces::count_pieces_by_studio))
        // Evaluations
        .route(
            "/evaluations",
            post(evaluations::create_evaluation).get(evaluations::search_evaluations),
        )
        .route(
            "/evaluations/:id",
            get(evaluations::get_evaluation)
                .put(evaluations::update_evaluation)
                .delete(evaluations::delete_evaluation),
        )
        .with_state(state)
}

/// OpenAPI document for every route above
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
