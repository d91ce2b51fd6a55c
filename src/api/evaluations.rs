use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};

use super::negotiate::{accepted_many, accepted_one, content_type, require_content_type};
use crate::codec::MediaType;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Evaluation;
use crate::services::evaluation_service::{self, PatternQuery, WindowQuery};
use crate::services::resource_service;

#[utoipa::path(
    post,
    path = "/api/evaluations",
    responses(
        (status = 202, description = "Evaluation created, returned as XML"),
        (status = 400, description = "Missing data or unknown piece"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn create_evaluation(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let evaluation: Evaluation =
        resource_service::create(state.evaluation_repo.as_ref(), content_type(&headers), &body)
            .await?;
    Ok(accepted_one(MediaType::Xml, &evaluation))
}

#[utoipa::path(
    get,
    path = "/api/evaluations",
    params(PatternQuery),
    responses(
        (status = 202, description = "Evaluations whose text contains the pattern"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn search_evaluations(
    State(state): State<AppState>,
    Query(query): Query<PatternQuery>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let media = require_content_type(&headers)?;
    let evaluations =
        evaluation_service::search_evaluations(state.evaluation_repo.as_ref(), query).await?;
    Ok(accepted_many(media, &evaluations))
}

#[utoipa::path(
    get,
    path = "/api/pieces/{id}/evaluations",
    params(("id" = i32, Path, description = "Piece id"), WindowQuery),
    responses(
        (status = 202, description = "Evaluations of the piece on the date, windowed"),
        (status = 400, description = "Invalid date"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn evaluations_for_piece(
    State(state): State<AppState>,
    Path(piece_id): Path<i32>,
    Query(query): Query<WindowQuery>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let media = require_content_type(&headers)?;
    let evaluations =
        evaluation_service::evaluations_for_piece(state.evaluation_repo.as_ref(), piece_id, query)
            .await?;
    Ok(accepted_many(media, &evaluations))
}

#[utoipa::path(
    get,
    path = "/api/evaluations/{id}",
    params(("id" = i32, Path, description = "Evaluation id")),
    responses(
        (status = 202, description = "The evaluation"),
        (status = 404, description = "Evaluation does not exist"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn get_evaluation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let evaluation: Evaluation = resource_service::get(state.evaluation_repo.as_ref(), id).await?;
    let media = require_content_type(&headers)?;
    Ok(accepted_one(media, &evaluation))
}

#[utoipa::path(
    put,
    path = "/api/evaluations/{id}",
    params(("id" = i32, Path, description = "Evaluation id")),
    responses(
        (status = 202, description = "Updated evaluation, returned as XML"),
        (status = 404, description = "Evaluation does not exist"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn update_evaluation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let evaluation: Evaluation = resource_service::update(
        state.evaluation_repo.as_ref(),
        id,
        content_type(&headers),
        &body,
    )
    .await?;
    Ok(accepted_one(MediaType::Xml, &evaluation))
}

#[utoipa::path(
    delete,
    path = "/api/evaluations/{id}",
    params(("id" = i32, Path, description = "Evaluation id")),
    responses(
        (status = 204, description = "Evaluation deleted"),
        (status = 404, description = "Evaluation does not exist")
    )
)]
pub async fn delete_evaluation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, DomainError> {
    resource_service::delete::<Evaluation, _>(state.evaluation_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
