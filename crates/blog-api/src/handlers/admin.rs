//! Admin handlers

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{AdminService, MessageResponse};
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Send a password reset link to a user
///
/// POST /admin/users/:user_id/password-reset
pub async fn send_password_reset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    auth.require_admin()?;

    let service = AdminService::new(state.service_context());
    service.send_password_reset_link(user_id).await?;
    Ok(Json(MessageResponse::new("Password reset email sent")))
}
