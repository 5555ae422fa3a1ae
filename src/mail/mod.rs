//! Outbound mail channels.
//!
//! DESIGN
//! ======
//! Two independent delivery mechanisms sit behind trait objects so the
//! contact flow can be exercised with mocks: the transactional provider
//! ([`Mailer`], implemented over Resend) and the hosted form relay
//! ([`FormRelay`], a thin HTTP wrapper over the pre-registered endpoint).

pub mod relay;
pub mod resend;

use crate::services::contact::ContactSubmission;

/// Generic visitor-facing failure string when no provider detail survives.
pub const GENERIC_SEND_ERROR: &str = "Failed to send";

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Missing RESEND_API_KEY")]
    MissingApiKey,
    #[error("Missing recipient email")]
    MissingRecipient,
    /// Provider-reported delivery failure; the message is caller-visible.
    /// Any other error kind is swallowed into a generic failure at the HTTP
    /// boundary.
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Message handed to the transactional provider.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the email, returning the provider's delivery id.
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The relay rejected the submission with structured error objects.
    #[error("form relay rejected submission: {}", messages.join(". "))]
    Rejected { messages: Vec<String> },
    /// The relay answered with a single error string.
    #[error("form relay error: {0}")]
    Api(String),
    #[error("form relay request failed: {0}")]
    Transport(String),
}

impl RelayError {
    /// Collapse the failure into the single string shown to the visitor:
    /// joined error messages, the relay's error string, or the generic
    /// fallback.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Rejected { messages } if !messages.is_empty() => messages.join(". "),
            Self::Api(message) => message.clone(),
            _ => GENERIC_SEND_ERROR.to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait FormRelay: Send + Sync {
    /// Submit the contact payload to the hosted relay.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}
