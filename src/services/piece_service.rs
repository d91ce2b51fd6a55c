//! Piece Service - cascade delete and per-studio counting

use crate::domain::{DomainError, PieceRepository};

/// Delete a piece together with every evaluation referencing it
pub async fn delete_piece(repo: &dyn PieceRepository, id: i32) -> Result<(), DomainError> {
    let removed = repo.delete_with_evaluations(id).await?;
    tracing::info!("Deleted Piece {} and {} evaluation(s)", id, removed);
    Ok(())
}

/// Number of pieces bound to a studio (zero for unknown studios)
pub async fn count_by_studio(
    repo: &dyn PieceRepository,
    studio_id: i32,
) -> Result<u64, DomainError> {
    repo.count_by_studio(studio_id).await
}
