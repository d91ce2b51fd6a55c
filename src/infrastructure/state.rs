//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{EvaluationRepository, PieceRepository, StudioRepository};
use crate::infrastructure::{
    SeaOrmEvaluationRepository, SeaOrmPieceRepository, SeaOrmStudioRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Storage handle, opened once at startup
    db: DatabaseConnection,
    pub piece_repo: Arc<dyn PieceRepository>,
    pub studio_repo: Arc<dyn StudioRepository>,
    pub evaluation_repo: Arc<dyn EvaluationRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let piece_repo = Arc::new(SeaOrmPieceRepository::new(db.clone()));
        let studio_repo = Arc::new(SeaOrmStudioRepository::new(db.clone()));
        let evaluation_repo = Arc::new(SeaOrmEvaluationRepository::new(db.clone()));

        Self {
            db,
            piece_repo,
            studio_repo,
            evaluation_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
