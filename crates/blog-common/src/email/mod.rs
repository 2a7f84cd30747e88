//! Mail delivery adapters
//!
//! `SmtpMailer` sends over a real SMTP relay; `LogMailer` only logs the
//! message and is used when no SMTP settings are configured.

use async_trait::async_trait;
use blog_core::{DomainError, Mailer};
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

use crate::config::SmtpConfig;

/// SMTP-backed mailer built on lettre
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Create a mailer from SMTP configuration
    ///
    /// # Errors
    /// Returns an error if the relay host cannot be resolved into a transport
    pub fn new(config: &SmtpConfig) -> Result<Self, DomainError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| DomainError::MailError(e.to_string()))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), DomainError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|_| DomainError::MailError(format!("Invalid from address: {}", self.from)))?,
            )
            .to(to
                .parse()
                .map_err(|_| DomainError::MailError(format!("Invalid recipient: {to}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| DomainError::MailError(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DomainError::MailError(e.to_string()))?;

        info!(to, subject, "Email sent");
        Ok(())
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

/// Mailer that logs instead of sending
///
/// Keeps local development working without an SMTP account; the reset link
/// ends up in the server log.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), DomainError> {
        info!(to, subject, body = html_body, "Email delivery skipped (no SMTP configured)");
        Ok(())
    }
}
