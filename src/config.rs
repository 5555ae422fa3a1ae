//! Mail configuration parsed from environment variables.

pub const DEFAULT_FROM_EMAIL: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_FORM_RELAY_URL: &str = "https://formspree.io/f/mqeqeojw";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Transactional provider credential. `None` disables direct delivery.
    pub api_key: Option<String>,
    pub from: String,
    /// Default recipient for contact messages, trimmed; `None` when unset.
    pub default_to: Option<String>,
    /// Hosted form-relay submission endpoint.
    pub relay_url: String,
    pub timeouts: HttpTimeouts,
}

impl MailConfig {
    /// Build typed mail config from environment variables.
    ///
    /// Optional:
    /// - `RESEND_API_KEY`: provider credential
    /// - `FROM_EMAIL`: default sender
    /// - `CONTACT_TO_EMAIL`: default recipient
    /// - `FORM_RELAY_URL`: hosted form-relay endpoint
    /// - `MAIL_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MAIL_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let from = std::env::var("FROM_EMAIL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string());
        let default_to = std::env::var("CONTACT_TO_EMAIL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let relay_url = std::env::var("FORM_RELAY_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORM_RELAY_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = HttpTimeouts {
            request_secs: env_parse_u64("MAIL_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("MAIL_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { api_key, from, default_to, relay_url, timeouts }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
