use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};

use super::negotiate::{accepted_many, accepted_one, content_type, require_content_type};
use crate::codec::MediaType;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Studio;
use crate::services::{resource_service, studio_service};

#[utoipa::path(
    post,
    path = "/api/studios",
    responses(
        (status = 202, description = "Studio created, returned as XML"),
        (status = 400, description = "Missing data or studio already exists"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn create_studio(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let studio: Studio =
        resource_service::create(state.studio_repo.as_ref(), content_type(&headers), &body)
            .await?;
    Ok(accepted_one(MediaType::Xml, &studio))
}

#[utoipa::path(
    get,
    path = "/api/studios",
    responses(
        (status = 202, description = "All studios"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn list_studios(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let media = require_content_type(&headers)?;
    let studios: Vec<Studio> = resource_service::list(state.studio_repo.as_ref()).await?;
    Ok(accepted_many(media, &studios))
}

#[utoipa::path(
    get,
    path = "/api/studios/{id}",
    params(("id" = i32, Path, description = "Studio id")),
    responses(
        (status = 202, description = "The studio"),
        (status = 404, description = "Studio does not exist"),
        (status = 415, description = "Not a JSON or XML request")
    )
)]
pub async fn get_studio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, DomainError> {
    let studio: Studio = resource_service::get(state.studio_repo.as_ref(), id).await?;
    let media = require_content_type(&headers)?;
    Ok(accepted_one(media, &studio))
}

#[utoipa::path(
    put,
    path = "/api/studios/{id}",
    params(("id" = i32, Path, description = "Studio id")),
    responses(
        (status = 202, description = "Updated studio, returned as XML"),
        (status = 404, description = "Studio does not exist"),
        (status = 415, description = "Not a JSON or XML body")
    )
)]
pub async fn update_studio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, DomainError> {
    let studio: Studio =
        resource_service::update(state.studio_repo.as_ref(), id, content_type(&headers), &body)
            .await?;
    Ok(accepted_one(MediaType::Xml, &studio))
}

#[utoipa::path(
    delete,
    path = "/api/studios/{id}",
    params(("id" = i32, Path, description = "Studio id")),
    responses(
        (status = 204, description = "Studio deleted"),
        (status = 400, description = "Studio has associated pieces"),
        (status = 404, description = "Studio does not exist")
    )
)]
pub async fn delete_studio(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, DomainError> {
    studio_service::delete_studio(state.studio_repo.as_ref(), state.piece_repo.as_ref(), id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
