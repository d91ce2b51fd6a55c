//! Domain layer - Pure business abstractions
//!
//! Only trait definitions, query parameters and domain error types live here.
//! Storage implementations live in the infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
