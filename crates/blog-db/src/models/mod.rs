//! Database models with SQLx `FromRow` derives

mod post;
mod user;

pub use post::PostModel;
pub use user::UserModel;
