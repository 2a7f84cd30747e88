//! # blog-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! email delivery, and telemetry.

pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_reset_token, hash_password, hash_reset_token, validate_password_strength,
    verify_password, Claims, JwtService, ResetToken, RESET_TOKEN_TTL,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, EmailConfig, Environment,
    JwtConfig, ServerConfig, SmtpConfig,
};
pub use email::{LogMailer, SmtpMailer};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig};
