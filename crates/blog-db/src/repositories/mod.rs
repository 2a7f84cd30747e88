//! Repository implementations

mod error;
mod post;
mod user;

pub use error::{map_db_error, map_unique_violation};
pub use post::PgPostRepository;
pub use user::PgUserRepository;
