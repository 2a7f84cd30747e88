//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Post, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Storage boundary for the post aggregate
///
/// The aggregate (post + comment tree + reaction maps) is always read and
/// written as one unit; there is no partial persistence of a sub-node.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// List all posts, newest first
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    /// Persist the whole aggregate (insert or overwrite)
    ///
    /// Last write wins: there is no optimistic-concurrency check, so
    /// concurrent save cycles against the same post can silently drop the
    /// earlier mutation. Callers needing strict consistency must serialize
    /// writes per post externally.
    async fn save(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post and its owned comment tree
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if at least one admin account exists (admin-bootstrap query)
    async fn admin_exists(&self) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;

    /// Store a hashed password-reset token and its expiry
    async fn set_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Find the user holding an unexpired reset token hash
    async fn find_by_reset_token(&self, token_hash: &str) -> RepoResult<Option<User>>;

    /// Clear any stored reset token
    async fn clear_reset_token(&self, id: Uuid) -> RepoResult<()>;
}
