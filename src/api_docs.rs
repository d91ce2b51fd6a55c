use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::pieces::create_piece,
        api::pieces::list_pieces,
        api::pieces::get_piece,
        api::pieces::update_piece,
        api::pieces::delete_piece,
        api::pieces::count_pieces_by_studio,
        api::studios::create_studio,
        api::studios::list_studios,
        api::studios::get_studio,
        api::studios::update_studio,
        api::studios::delete_studio,
        api::evaluations::create_evaluation,
        api::evaluations::search_evaluations,
        api::evaluations::evaluations_for_piece,
        api::evaluations::get_evaluation,
        api::evaluations::update_evaluation,
        api::evaluations::delete_evaluation,
    ),
    tags(
        (name = "piece-catalog", description = "Piece catalog API, XML or JSON by Content-Type")
    )
)]
pub struct ApiDoc;
