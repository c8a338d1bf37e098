//! Outbound mail for contact-form submissions.
//!
//! [`MailRelay`] is the seam the API depends on. [`SmtpRelay`] delivers
//! through an SMTP server via `lettre`; [`LogRelay`] only records the message
//! in the log and is used whenever SMTP is not configured.

use std::sync::Arc;

use async_trait::async_trait;

pub mod smtp;

pub use smtp::{MailConfig, SmtpRelay};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Relay
// ---------------------------------------------------------------------------

/// Something that can deliver a plain-text email.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Short name used in log fields.
    fn name(&self) -> &'static str;

    /// Deliver a message to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Fallback relay that writes the message to the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRelay;

#[async_trait]
impl MailRelay for LogRelay {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, body, "Mail relay not configured, message logged only");
        Ok(())
    }
}

/// Pick the relay described by the environment.
///
/// Returns an [`SmtpRelay`] when `SMTP_HOST` is set, a [`LogRelay`] otherwise.
pub fn relay_from_env() -> Arc<dyn MailRelay> {
    match MailConfig::from_env() {
        Some(config) => {
            tracing::info!(host = %config.smtp_host, port = config.smtp_port, "SMTP mail relay configured");
            Arc::new(SmtpRelay::new(config))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, contact messages will only be logged");
            Arc::new(LogRelay)
        }
    }
}
