//! Services Layer
//!
//! Resource operations over the repository traits. Handlers negotiate the
//! media type and hand the raw body to these functions.

pub mod evaluation_service;
pub mod piece_service;
pub mod resource_service;
pub mod studio_service;
