pub mod evaluation;
pub mod piece;
pub mod studio;

pub use evaluation::Evaluation;
pub use piece::Piece;
pub use studio::Studio;
