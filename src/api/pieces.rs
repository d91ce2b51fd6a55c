use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::json;

use super::negotiate::{accepted, accepted_many, accepted_one, content_type, require_content_type};
use crate::codec::{MediaType, xml};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Piece;
use crate::services::{piece_service, resource_service};

#[utoipa::path(
    post,
    path = "/api/pieces",
    responses(
        (status = 202, description = "Piece created, returned as XML"),
        (status = 400, description = "Missing data or piece already exists"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn create_piece(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let piece: Piece =
        resource_service::create(state.piece_repo.as_ref(), content_type(&headers), &body).await?;
    Ok(accepted_one(MediaType::Xml, &piece))
}

#[utoipa::path(
    get,
    path = "/api/pieces",
    responses(
        (status = 202, description = "All pieces"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn list_pieces(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let media = require_content_type(&headers)?;
    let pieces: Vec<Piece> = resource_service::list(state.piece_repo.as_ref()).await?;
    Ok(accepted_many(media, &pieces))
}

#[utoipa::path(
    get,
    path = "/api/pieces/{id}",
    params(("id" = i32, Path, description = "Piece id")),
    responses(
        (status = 202, description = "The piece"),
        (status = 404, description = "Piece does not exist"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn get_piece(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let piece: Piece = resource_service::get(state.piece_repo.as_ref(), id).await?;
    let media = require_content_type(&headers)?;
    Ok(accepted_one(media, &piece))
}

#[utoipa::path(
    put,
    path = "/api/pieces/{id}",
    params(("id" = i32, Path, description = "Piece id")),
    responses(
        (status = 202, description = "Updated piece, returned as XML"),
        (status = 404, description = "Piece does not exist"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn update_piece(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let piece: Piece =
        resource_service::update(state.piece_repo.as_ref(), id, content_type(&headers), &body)
            .await?;
    Ok(accepted_one(MediaType::Xml, &piece))
}

#[utoipa::path(
    delete,
    path = "/api/pieces/{id}",
    params(("id" = i32, Path, description = "Piece id")),
    responses(
        (status = 204, description = "Piece and its evaluations deleted"),
        (status = 404, description = "Piece does not exist")
    )
)]
pub async fn delete_piece(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, DomainError> {
    piece_service::delete_piece(state.piece_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/studios/{id}/pieces",
    params(("id" = i32, Path, description = "Studio id")),
    responses(
        (status = 202, description = "Number of pieces produced by the studio"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn count_pieces_by_studio(
    State(state): State<AppState>,
    Path(studio_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let count = piece_service::count_by_studio(state.piece_repo.as_ref(), studio_id).await?;

    let response = match require_content_type(&headers)? {
        MediaType::Json => accepted(
            MediaType::Json,
            json!({ "number of pieces": count }).to_string(),
        ),
        MediaType::Xml => accepted(
            MediaType::Xml,
            xml::element("Pieces", &[("number", count.to_string())]),
        ),
    };
    Ok(response)
}
