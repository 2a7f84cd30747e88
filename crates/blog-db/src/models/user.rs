//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the users table
///
/// Carries the credential columns that never leave the repository layer:
/// the password hash and the hashed reset token with its expiry.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check if the stored reset token is still valid at `now`
    #[inline]
    #[must_use]
    pub fn reset_token_valid_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.reset_token_expires_at, Some(expires) if expires > now)
    }
}
