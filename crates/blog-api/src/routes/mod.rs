//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, health, posts};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root, outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(post_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::current_user))
        .route("/auth/bootstrap-status", get(auth::bootstrap_status))
        .route("/auth/password-reset/request", post(auth::request_password_reset))
        .route("/auth/password-reset/confirm", post(auth::confirm_password_reset))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        // Post CRUD
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Comment tree
        .route("/posts/:post_id/comments", post(posts::add_comment))
        .route(
            "/posts/:post_id/comments/:comment_id/replies",
            post(posts::add_reply),
        )
        // Reactions
        .route("/posts/:post_id/reactions", post(posts::react_to_post))
        .route(
            "/posts/:post_id/comments/:comment_id/reactions",
            post(posts::react_to_comment),
        )
        .route(
            "/posts/:post_id/comments/:comment_id/replies/:reply_id/reactions",
            post(posts::react_to_reply),
        )
        // Shares
        .route("/posts/:post_id/share", post(posts::share_post))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new().route(
        "/admin/users/:user_id/password-reset",
        post(admin::send_password_reset),
    )
}
