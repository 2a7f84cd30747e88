//! Mail delivery port

use async_trait::async_trait;

use crate::error::DomainError;

/// Outbound email boundary
///
/// The core only ever hands over a fully rendered message; transport,
/// retries, and templating beyond simple HTML bodies are the adapter's
/// concern.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an HTML email
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), DomainError>;
}
