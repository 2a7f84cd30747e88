//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
///
/// `role` is optional; requesting `admin` only succeeds during bootstrap
/// (no admin exists yet) or when the caller is already an admin.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Password reset request (step one: ask for a reset link)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Password reset confirmation (step two: present the token)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetConfirm {
    #[validate(length(min = 1, message = "Token must not be empty"))]
    pub token: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[validate(length(min = 1, max = 64, message = "Author must be 1-64 characters"))]
    pub author: String,

    #[validate(length(max = 64, message = "Category must be at most 64 characters"))]
    pub category: Option<String>,
}

/// Update post request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Author must be 1-64 characters"))]
    pub author: Option<String>,

    #[validate(length(max = 64, message = "Category must be at most 64 characters"))]
    pub category: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Add comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 64, message = "Author must be 1-64 characters"))]
    pub author: String,

    #[validate(length(min = 1, max = 2000, message = "Text must be 1-2000 characters"))]
    pub text: String,
}

/// Add reply request (same shape as a comment; replies nest arbitrarily)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReplyRequest {
    #[validate(length(min = 1, max = 64, message = "Author must be 1-64 characters"))]
    pub author: String,

    #[validate(length(min = 1, max = 2000, message = "Text must be 1-2000 characters"))]
    pub text: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle a reaction on a post, comment, or reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    #[validate(length(min = 1, max = 32, message = "Reaction kind must be 1-32 characters"))]
    pub kind: String,
}
