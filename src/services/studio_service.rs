//! Studio Service - referential guard on delete

use crate::domain::{DomainError, PieceRepository, StudioRepository};
use crate::models::Studio;

use super::resource_service;

/// Delete a studio only when no piece is bound to it
pub async fn delete_studio(
    studios: &dyn StudioRepository,
    pieces: &dyn PieceRepository,
    id: i32,
) -> Result<(), DomainError> {
    resource_service::get::<Studio, _>(studios, id).await?;

    let bound = pieces.count_by_studio(id).await?;
    if bound > 0 {
        tracing::warn!("Refusing to delete Studio {}: {} piece(s) bound", id, bound);
        return Err(DomainError::Validation(format!(
            "Studio {} has associated pieces",
            id
        )));
    }

    studios.delete(id).await?;
    tracing::info!("Deleted Studio {}", id);
    Ok(())
}
