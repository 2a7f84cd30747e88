//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AddCommentRequest, AddReplyRequest, CreatePostRequest, LoginRequest, PasswordResetConfirm,
    PasswordResetRequest, ReactionRequest, RegisterRequest, UpdatePostRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, BootstrapStatusResponse, CommentResponse, CurrentUserResponse,
    HealthResponse, MessageResponse, PostResponse, ReadinessResponse,
};
