//! Service layer - business logic

mod admin;
mod auth;
mod context;
mod error;
mod post;

pub use admin::AdminService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;

#[cfg(test)]
pub(crate) mod test_support;
