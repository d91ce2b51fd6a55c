//! Content negotiation: codec selection from the declared content type and
//! the `202 Accepted` responses shared by every resource.

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::codec::{self, MediaType, Representation};
use crate::domain::DomainError;

/// Codec selected by the request's `Content-Type`, if supported
pub fn content_type(headers: &HeaderMap) -> Option<MediaType> {
    MediaType::from_content_type(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
    )
}

pub fn require_content_type(headers: &HeaderMap) -> Result<MediaType, DomainError> {
    content_type(headers).ok_or(DomainError::UnsupportedMediaType)
}

pub fn accepted(media: MediaType, body: String) -> Response {
    (
        StatusCode::ACCEPTED,
        [(header::CONTENT_TYPE, media.as_str())],
        body,
    )
        .into_response()
}

pub fn accepted_one<R: Representation>(media: MediaType, record: &R) -> Response {
    accepted(media, codec::encode_one(media, record))
}

pub fn accepted_many<R: Representation>(media: MediaType, records: &[R]) -> Response {
    accepted(media, codec::encode_many(media, records))
}
