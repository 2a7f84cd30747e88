//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
            role: None,
        }
    }

    /// Fixed admin credentials shared by all tests in a run
    ///
    /// The first caller bootstraps the admin account; later callers fall
    /// back to logging in with the same credentials.
    pub fn shared_admin() -> Self {
        Self {
            username: "it-admin".to_string(),
            email: "it-admin@example.com".to_string(),
            password: "AdminPass123".to_string(),
            role: Some("admin".to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

/// Bootstrap status response
#[derive(Debug, Deserialize)]
pub struct BootstrapStatusResponse {
    pub admin_exists: bool,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Post {suffix}"),
            content: "Some body text".to_string(),
            author: "Integration Tester".to_string(),
            category: Some("testing".to_string()),
        }
    }
}

/// Partial post update request
#[derive(Debug, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Add comment request
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub author: String,
    pub text: String,
}

impl AddCommentRequest {
    pub fn simple(text: &str) -> Self {
        Self {
            author: "Commenter".to_string(),
            text: text.to_string(),
        }
    }
}

/// Reaction request
#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub kind: String,
}

impl ReactionRequest {
    pub fn like() -> Self {
        Self {
            kind: "like".to_string(),
        }
    }
}

/// Full post aggregate response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub comments: Vec<CommentResponse>,
    pub reactions: HashMap<String, i64>,
    pub reacted_by: HashMap<String, String>,
    pub shares: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Comment or reply node in a post response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub text: String,
    pub reactions: HashMap<String, i64>,
    pub reacted_by: HashMap<String, String>,
    pub replies: Vec<CommentResponse>,
    pub created_at: String,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
