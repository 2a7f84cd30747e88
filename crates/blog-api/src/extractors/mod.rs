//! Custom Axum extractors

pub mod auth;
pub mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use validated::ValidatedJson;
