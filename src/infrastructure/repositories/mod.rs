//! Repository implementations using SeaORM

pub mod evaluation_repository;
pub mod piece_repository;
pub mod studio_repository;

pub use evaluation_repository::SeaOrmEvaluationRepository;
pub use piece_repository::SeaOrmPieceRepository;
pub use studio_repository::SeaOrmStudioRepository;
