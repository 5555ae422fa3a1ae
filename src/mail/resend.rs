//! Resend-backed transactional mailer.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::{MailError, Mailer, OutgoingEmail};
use crate::config::MailConfig;

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    /// # Errors
    ///
    /// Returns [`MailError::MissingApiKey`] when no credential is configured.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let api_key = config.api_key.as_deref().ok_or(MailError::MissingApiKey)?;
        Ok(Self { client: Resend::new(api_key) })
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
        let to = [email.to.as_str()];
        let mut options = CreateEmailBaseOptions::new(&email.from, to, &email.subject)
            .with_text(&email.text);
        if let Some(reply_to) = &email.reply_to {
            options = options.with_reply(reply_to);
        }

        let sent = self
            .client
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(sent.id.to_string())
    }
}
