//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything here is read-only after startup; request handlers hold no
//! shared mutable state.

use std::sync::Arc;

use crate::config::MailConfig;
use crate::content::PortfolioConfig;
use crate::mail::{FormRelay, Mailer};

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<PortfolioConfig>,
    pub mail: Arc<MailConfig>,
    /// `None` when no provider credential is configured: direct delivery is
    /// skipped and the relay endpoint reports a configuration error.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub relay: Arc<dyn FormRelay>,
}

impl AppState {
    #[must_use]
    pub fn new(
        portfolio: PortfolioConfig,
        mail: MailConfig,
        mailer: Option<Arc<dyn Mailer>>,
        relay: Arc<dyn FormRelay>,
    ) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            mail: Arc::new(mail),
            mailer,
            relay,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::config::{
        DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FORM_RELAY_URL, DEFAULT_FROM_EMAIL,
        DEFAULT_REQUEST_TIMEOUT_SECS, HttpTimeouts,
    };
    use crate::mail::{MailError, OutgoingEmail, RelayError};
    use crate::services::contact::ContactSubmission;

    /// Scripted mailer: pops results front-to-back, records every send.
    pub struct MockMailer {
        results: Mutex<Vec<Result<String, MailError>>>,
        pub sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl MockMailer {
        #[must_use]
        pub fn new(results: Vec<Result<String, MailError>>) -> Self {
            Self { results: Mutex::new(results), sent: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<String, MailError> {
            self.sent.lock().unwrap().push(email.clone());
            let mut results = self.results.lock().unwrap();
            if results.is_empty() { Ok("mock-id".into()) } else { results.remove(0) }
        }
    }

    /// Scripted form relay mirroring [`MockMailer`].
    pub struct MockRelay {
        results: Mutex<Vec<Result<(), RelayError>>>,
        pub submitted: Mutex<Vec<ContactSubmission>>,
    }

    impl MockRelay {
        #[must_use]
        pub fn new(results: Vec<Result<(), RelayError>>) -> Self {
            Self { results: Mutex::new(results), submitted: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait::async_trait]
    impl FormRelay for MockRelay {
        async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
            self.submitted.lock().unwrap().push(submission.clone());
            let mut results = self.results.lock().unwrap();
            if results.is_empty() { Ok(()) } else { results.remove(0) }
        }
    }

    #[must_use]
    pub fn test_mail_config() -> MailConfig {
        MailConfig {
            api_key: None,
            from: DEFAULT_FROM_EMAIL.to_string(),
            default_to: Some("owner@example.com".to_string()),
            relay_url: DEFAULT_FORM_RELAY_URL.to_string(),
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }

    /// State with a configured default recipient and a portfolio that has a
    /// `mailto:` link.
    #[must_use]
    pub fn test_app_state(mailer: Option<Arc<dyn Mailer>>, relay: Arc<dyn FormRelay>) -> AppState {
        AppState::new(PortfolioConfig::load(), test_mail_config(), mailer, relay)
    }

    /// State with no default recipient and no email link anywhere: the chain
    /// has nowhere left to fall.
    #[must_use]
    pub fn test_app_state_without_recipient(
        mailer: Option<Arc<dyn Mailer>>,
        relay: Arc<dyn FormRelay>,
    ) -> AppState {
        let mut portfolio = PortfolioConfig::load();
        portfolio.links.retain(|l| {
            !l.href.starts_with("mailto:") && !l.label.eq_ignore_ascii_case("email")
        });
        let mail = MailConfig { default_to: None, ..test_mail_config() };
        AppState::new(portfolio, mail, mailer, relay)
    }
}
