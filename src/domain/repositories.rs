//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::{Evaluation, Piece, Studio};

/// Date used by the per-piece evaluation filter when the query omits one
pub const DEFAULT_EVALUATION_DATE: &str = "2022-12-13";

/// Window length used when the query omits `end`
pub const DEFAULT_WINDOW_LENGTH: u64 = 100;

/// Uniform storage contract shared by every catalog record type
#[async_trait]
pub trait ResourceRepository<R>: Send + Sync
where
    R: Send + 'static,
{
    /// Find all records, ordered by id
    async fn find_all(&self) -> Result<Vec<R>, DomainError>;

    /// Find a single record by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, DomainError>;

    /// Insert a new record; the returned copy carries the generated id
    async fn create(&self, record: R) -> Result<R, DomainError>;

    /// Persist every field of an existing record
    async fn update(&self, record: R) -> Result<R, DomainError>;

    /// Delete a record by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Piece entity
#[async_trait]
pub trait PieceRepository: ResourceRepository<Piece> {
    /// Delete a piece and every evaluation referencing it in one transaction.
    /// Returns the number of evaluations removed.
    async fn delete_with_evaluations(&self, id: i32) -> Result<u64, DomainError>;

    /// Count pieces bound to a studio
    async fn count_by_studio(&self, studio_id: i32) -> Result<u64, DomainError>;
}

/// Repository trait for Studio entity
#[async_trait]
pub trait StudioRepository: ResourceRepository<Studio> {}

/// Filter criteria for the per-piece evaluation window
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationWindow {
    pub piece_id: i32,
    pub date: NaiveDate,
    pub start: u64,
    /// Window length, not an absolute end index
    pub length: u64,
}

/// Repository trait for Evaluation entity
#[async_trait]
pub trait EvaluationRepository: ResourceRepository<Evaluation> {
    /// Evaluations of one piece on one date, ordered by id and sliced to the window
    async fn find_in_window(
        &self,
        window: EvaluationWindow,
    ) -> Result<Vec<Evaluation>, DomainError>;

    /// Evaluations whose text contains `pattern` as a substring
    async fn find_by_text(&self, pattern: &str) -> Result<Vec<Evaluation>, DomainError>;
}
