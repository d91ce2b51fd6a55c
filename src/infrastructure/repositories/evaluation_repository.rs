//! SeaORM implementation of EvaluationRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::domain::{DomainError, EvaluationRepository, EvaluationWindow, ResourceRepository};
use crate::models::Evaluation;
use crate::models::evaluation::{Column, Entity as EvaluationEntity};

/// SeaORM-based implementation of EvaluationRepository
pub struct SeaOrmEvaluationRepository {
    db: DatabaseConnection,
}

impl SeaOrmEvaluationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository<Evaluation> for SeaOrmEvaluationRepository {
    async fn find_all(&self) -> Result<Vec<Evaluation>, DomainError> {
        let evaluations = EvaluationEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(evaluations.into_iter().map(Evaluation::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Evaluation>, DomainError> {
        let evaluation = EvaluationEntity::find_by_id(id).one(&self.db).await?;
        Ok(evaluation.map(Evaluation::from))
    }

    async fn create(&self, evaluation: Evaluation) -> Result<Evaluation, DomainError> {
        let model = evaluation.into_active_model().insert(&self.db).await?;
        Ok(Evaluation::from(model))
    }

    async fn update(&self, evaluation: Evaluation) -> Result<Evaluation, DomainError> {
        let model = evaluation.into_active_model().update(&self.db).await?;
        Ok(Evaluation::from(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = EvaluationEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Evaluation {} does not exist",
                id
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl EvaluationRepository for SeaOrmEvaluationRepository {
    async fn find_in_window(
        &self,
        window: EvaluationWindow,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let evaluations = EvaluationEntity::find()
            .filter(Column::Piece.eq(window.piece_id))
            .filter(Column::Date.eq(window.date))
            .order_by_asc(Column::Id)
            .offset(window.start)
            .limit(window.length)
            .all(&self.db)
            .await?;

        Ok(evaluations.into_iter().map(Evaluation::from).collect())
    }

    async fn find_by_text(&self, pattern: &str) -> Result<Vec<Evaluation>, DomainError> {
        // Case-sensitive substring match, no wildcards
        let evaluations = EvaluationEntity::find()
            .filter(Expr::cust_with_values("instr(text, ?) > 0", [pattern]))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(evaluations.into_iter().map(Evaluation::from).collect())
    }
}
