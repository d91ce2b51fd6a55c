//! SeaORM implementation of StudioRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::{DomainError, ResourceRepository, StudioRepository};
use crate::models::Studio;
use crate::models::studio::{Column, Entity as StudioEntity};

/// SeaORM-based implementation of StudioRepository
pub struct SeaOrmStudioRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceRepository<Studio> for SeaOrmStudioRepository {
    async fn find_all(&self) -> Result<Vec<Studio>, DomainError> {
        let studios = StudioEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(studios.into_iter().map(Studio::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Studio>, DomainError> {
        let studio = StudioEntity::find_by_id(id).one(&self.db).await?;
        Ok(studio.map(Studio::from))
    }

    async fn create(&self, studio: Studio) -> Result<Studio, DomainError> {
        let model = studio.into_active_model().insert(&self.db).await?;
        Ok(Studio::from(model))
    }

    async fn update(&self, studio: Studio) -> Result<Studio, DomainError> {
        let model = studio.into_active_model().update(&self.db).await?;
        Ok(Studio::from(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = StudioEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!("Studio {} does not exist", id)));
        }

        Ok(())
    }
}

impl StudioRepository for SeaOrmStudioRepository {}
