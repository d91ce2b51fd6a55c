//! SeaORM implementation of PieceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::domain::{DomainError, PieceRepository, ResourceRepository};
use crate::models::Piece;
use crate::models::evaluation::{Column as EvaluationColumn, Entity as EvaluationEntity};
use crate::models::piece::{Column, Entity as PieceEntity};

/// SeaORM-based implementation of PieceRepository
pub struct SeaOrmPieceRepository {
    db: DatabaseConnection,
}

impl SeaOrmPieceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository<Piece> for SeaOrmPieceRepository {
    async fn find_all(&self) -> Result<Vec<Piece>, DomainError> {
        let pieces = PieceEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(pieces.into_iter().map(Piece::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Piece>, DomainError> {
        let piece = PieceEntity::find_by_id(id).one(&self.db).await?;
        Ok(piece.map(Piece::from))
    }

    async fn create(&self, piece: Piece) -> Result<Piece, DomainError> {
        let model = piece.into_active_model().insert(&self.db).await?;
        Ok(Piece::from(model))
    }

    async fn update(&self, piece: Piece) -> Result<Piece, DomainError> {
        let model = piece.into_active_model().update(&self.db).await?;
        Ok(Piece::from(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = PieceEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Piece {} does not exist", id)));
        }

        Ok(())
    }
}

#[async_trait]
impl PieceRepository for SeaOrmPieceRepository {
    async fn delete_with_evaluations(&self, id: i32) -> Result<u64, DomainError> {
        let txn = self.db.begin().await?;

        // Dropping the transaction on an early return rolls it back
        if PieceEntity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(DomainError::NotFound(format!("Piece {} does not exist", id)));
        }

        let removed = EvaluationEntity::delete_many()
            .filter(EvaluationColumn::Piece.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        PieceEntity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(removed)
    }

    async fn count_by_studio(&self, studio_id: i32) -> Result<u64, DomainError> {
        let count = PieceEntity::find()
            .filter(Column::Studio.eq(studio_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
