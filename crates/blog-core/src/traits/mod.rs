//! Ports - interfaces the domain needs from the outside world

mod mailer;
mod repositories;

pub use mailer::Mailer;
pub use repositories::{PostRepository, RepoResult, UserRepository};
