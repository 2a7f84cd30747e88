//! Password-reset tokens
//!
//! The raw token is sent to the user by email; only its SHA-256 digest is
//! persisted, so a database leak does not expose usable reset links.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// How long a reset token stays valid, in seconds
pub const RESET_TOKEN_TTL: i64 = 3600;

/// A freshly generated reset token
#[derive(Debug, Clone)]
pub struct ResetToken {
    /// Raw token to embed in the emailed link
    pub token: String,
    /// SHA-256 digest of the raw token, hex encoded, for storage
    pub token_hash: String,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Generate a new reset token with its storage hash and expiry
#[must_use]
pub fn generate_reset_token() -> ResetToken {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    let token = hex::encode(bytes);

    ResetToken {
        token_hash: hash_reset_token(&token),
        token,
        expires_at: Utc::now() + Duration::seconds(RESET_TOKEN_TTL),
    }
}

/// Hash a raw reset token for storage or lookup
#[must_use]
pub fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
