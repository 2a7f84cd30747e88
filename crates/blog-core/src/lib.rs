//! # blog-core
//!
//! Domain layer containing entities, the reaction ledger, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    find_comment, find_comment_mut, Comment, Post, Reactable, ReactionState, Role, User,
};
pub use error::DomainError;
pub use traits::{Mailer, PostRepository, RepoResult, UserRepository};
