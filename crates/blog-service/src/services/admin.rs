//! Admin service
//!
//! Operations reserved for admin accounts. Authorization happens at the
//! API boundary; this layer assumes the caller was already vetted.

use tracing::{info, instrument};
use uuid::Uuid;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a password reset link to an arbitrary user
    ///
    /// Same token mechanics as the self-service flow; the difference is that
    /// an admin addresses the user by id instead of proving email ownership.
    #[instrument(skip(self))]
    pub async fn send_password_reset_link(&self, user_id: Uuid) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        AuthService::new(self.ctx).send_reset_email(&user).await?;
        info!(user_id = %user_id, "Admin-triggered password reset link sent");
        Ok(())
    }
}
