//! User entity <-> model mapper

use blog_core::{Role, User};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Credential columns (password hash, reset token) are deliberately dropped;
/// the repository exposes them through dedicated methods.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            role: model.role.parse::<Role>().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
