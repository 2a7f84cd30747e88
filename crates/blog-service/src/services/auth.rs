//! Authentication service
//!
//! Handles registration (with admin bootstrap), login, and the two-step
//! password reset flow.

use blog_common::auth::{
    generate_reset_token, hash_password, hash_reset_token, validate_password_strength,
    verify_password,
};
use blog_common::AppError;
use blog_core::{Role, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// `requester` is the role of the authenticated caller, if any. The
    /// admin role can be requested while no admin exists yet (bootstrap)
    /// or by a caller who is already an admin; anyone else gets rejected.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(
        &self,
        request: RegisterRequest,
        requester: Option<Role>,
    ) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let role = match request.role.unwrap_or_default() {
            Role::User => Role::User,
            Role::Admin => {
                let caller_is_admin = requester.is_some_and(Role::is_admin);
                if caller_is_admin || !self.ctx.user_repo().admin_exists().await? {
                    Role::Admin
                } else {
                    return Err(ServiceError::permission_denied(
                        "Only an admin can create admin accounts",
                    ));
                }
            }
        };

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(
            self.ctx.generate_id(),
            request.username,
            request.email,
            role,
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;
        info!(user_id = %user.id, role = %user.role, "User registered");

        self.issue_token(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");
        self.issue_token(&user)
    }

    /// Get the authenticated user's profile
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Uuid) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Check whether any admin account exists (bootstrap query)
    #[instrument(skip(self))]
    pub async fn admin_exists(&self) -> ServiceResult<bool> {
        Ok(self.ctx.user_repo().admin_exists().await?)
    }

    /// Start the password reset flow for an email address
    ///
    /// Unknown addresses return success without sending anything, so the
    /// endpoint cannot be used to enumerate accounts.
    #[instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &str) -> ServiceResult<()> {
        let Some(user) = self.ctx.user_repo().find_by_email(email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        self.send_reset_email(&user).await
    }

    /// Complete the password reset flow with the emailed token
    #[instrument(skip(self, token, new_password))]
    pub async fn reset_password(&self, token: &str, new_password: &str) -> ServiceResult<()> {
        validate_password_strength(new_password).map_err(ServiceError::from)?;

        let token_hash = hash_reset_token(token);
        let user = self
            .ctx
            .user_repo()
            .find_by_reset_token(&token_hash)
            .await?
            .ok_or_else(|| ServiceError::validation("Invalid or expired reset token"))?;

        let password_hash =
            hash_password(new_password).map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(user.id, &password_hash)
            .await?;
        self.ctx.user_repo().clear_reset_token(user.id).await?;

        info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }

    /// Generate a reset token for `user`, store its hash, and email the link
    pub(crate) async fn send_reset_email(&self, user: &User) -> ServiceResult<()> {
        let reset = generate_reset_token();

        self.ctx
            .user_repo()
            .set_reset_token(user.id, &reset.token_hash, reset.expires_at)
            .await?;

        let link = format!(
            "{}/reset-password/{}",
            self.ctx.frontend_url().trim_end_matches('/'),
            reset.token
        );
        let body = format!(
            "<p>Hello {},</p>\
             <p>A password reset was requested for your account. \
             The link below is valid for one hour:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>If you did not request this, you can ignore this email.</p>",
            user.username
        );

        self.ctx
            .mailer()
            .send(&user.email, "Password reset", &body)
            .await?;

        info!(user_id = %user.id, "Password reset email sent");
        Ok(())
    }

    fn issue_token(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self
            .ctx
            .jwt_service()
            .encode_token(user.id, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token,
            self.ctx.jwt_service().token_expiry(),
            CurrentUserResponse::from(user),
        ))
    }
}
