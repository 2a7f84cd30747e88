//! Authentication handlers
//!
//! Endpoints for registration, login, profile lookup, bootstrap status,
//! and the self-service password reset flow.

use axum::{extract::State, Json};
use blog_service::{
    AuthResponse, AuthService, BootstrapStatusResponse, CurrentUserResponse, LoginRequest,
    MessageResponse, PasswordResetConfirm, PasswordResetRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
///
/// Registration is open. Requesting the admin role requires either an
/// authenticated admin caller or an empty admin table (first boot).
pub async fn register(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let requester = auth.0.map(|user| user.role);
    let response = service.register(request, requester).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
///
/// GET /auth/me
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Check whether an admin account exists yet
///
/// GET /auth/bootstrap-status
pub async fn bootstrap_status(
    State(state): State<AppState>,
) -> ApiResult<Json<BootstrapStatusResponse>> {
    let service = AuthService::new(state.service_context());
    let admin_exists = service.admin_exists().await?;
    Ok(Json(BootstrapStatusResponse { admin_exists }))
}

/// Request a password reset email
///
/// POST /auth/password-reset/request
///
/// Always acknowledges, whether or not the email is registered.
pub async fn request_password_reset(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PasswordResetRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.request_password_reset(&request.email).await?;
    Ok(Json(MessageResponse::new(
        "If the address is registered, a reset email has been sent",
    )))
}

/// Complete a password reset with the emailed token
///
/// POST /auth/password-reset/confirm
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PasswordResetConfirm>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service
        .reset_password(&request.token, &request.password)
        .await?;
    Ok(Json(MessageResponse::new("Password has been reset")))
}
