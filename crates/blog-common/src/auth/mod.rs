//! Authentication utilities - JWT, password hashing, reset tokens

mod jwt;
mod password;
mod reset;

pub use jwt::{Claims, JwtService};
pub use password::{hash_password, validate_password_strength, verify_password};
pub use reset::{generate_reset_token, hash_reset_token, ResetToken, RESET_TOKEN_TTL};
