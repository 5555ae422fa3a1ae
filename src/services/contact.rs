//! Contact submission flow.
//!
//! DESIGN
//! ======
//! One attempt per channel, no retries: direct transactional delivery first,
//! then the hosted form relay, then a `mailto:` handoff to the visitor's own
//! mail client when the owner's address is known. A failure anywhere in the
//! chain never escalates beyond the current request.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::mail::{MailError, OutgoingEmail};
use crate::state::AppState;

/// Matches JavaScript's `encodeURIComponent`: everything outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, so mail clients decode the
/// templated subject and body verbatim.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A visitor's message. Request-scoped; discarded once delivered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Form lifecycle state driving the status line and the submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Succeeded => Some("Thanks! Your message was sent successfully."),
            Self::Failed(message) => Some(message),
        }
    }

    /// The submit control is disabled exactly while a request is in flight.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Outcome of one pass through the delivery chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Every server-side channel failed; hand composition to the visitor's
    /// mail client.
    MailtoFallback { href: String },
    Failed { message: String },
}

#[must_use]
pub fn contact_subject(name: &str) -> String {
    let name = if name.is_empty() { "your website" } else { name };
    format!("Contact from {name}")
}

#[must_use]
pub fn contact_body(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    )
}

/// Build the `mailto:` deep link for the final fallback.
#[must_use]
pub fn mailto_href(to: &str, submission: &ContactSubmission) -> String {
    let subject_raw = contact_subject(&submission.name);
    let body_raw = contact_body(submission);
    let subject = utf8_percent_encode(&subject_raw, URI_COMPONENT);
    let body = utf8_percent_encode(&body_raw, URI_COMPONENT);
    format!("mailto:{to}?subject={subject}&body={body}")
}

/// Run the delivery chain: transactional provider, hosted relay, `mailto:`.
pub async fn submit_with_fallback(state: &AppState, submission: &ContactSubmission) -> SubmitOutcome {
    match deliver_direct(state, submission).await {
        Ok(()) => return SubmitOutcome::Sent,
        Err(e) => tracing::warn!(error = %e, "direct delivery failed, trying hosted relay"),
    }

    let relay_err = match state.relay.submit(submission).await {
        Ok(()) => return SubmitOutcome::Sent,
        Err(e) => {
            tracing::warn!(error = %e, "hosted relay submission failed");
            e
        }
    };

    match state.portfolio.contact_email() {
        Some(to) => SubmitOutcome::MailtoFallback { href: mailto_href(&to, submission) },
        None => SubmitOutcome::Failed { message: relay_err.display_message() },
    }
}

/// Deliver through the transactional provider with server-held credentials.
async fn deliver_direct(state: &AppState, submission: &ContactSubmission) -> Result<(), MailError> {
    let Some(mailer) = &state.mailer else {
        return Err(MailError::MissingApiKey);
    };
    let Some(to) = state.mail.default_to.clone() else {
        return Err(MailError::MissingRecipient);
    };

    let email = OutgoingEmail {
        from: state.mail.from.clone(),
        to,
        reply_to: (!submission.email.is_empty()).then(|| submission.email.clone()),
        subject: contact_subject(&submission.name),
        text: contact_body(submission),
    };
    mailer.send(&email).await.map(|_| ())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
