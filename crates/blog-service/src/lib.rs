//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddCommentRequest, AddReplyRequest, AuthResponse, BootstrapStatusResponse, CommentResponse,
    CreatePostRequest, CurrentUserResponse, HealthResponse, LoginRequest, MessageResponse,
    PasswordResetConfirm, PasswordResetRequest, PostResponse, ReactionRequest, ReadinessResponse,
    RegisterRequest, UpdatePostRequest,
};
pub use services::{
    AdminService, AuthService, PostService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
