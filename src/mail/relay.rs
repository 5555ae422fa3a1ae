//! Hosted form-relay client.
//!
//! Thin HTTP wrapper over the pre-registered submission endpoint. The relay
//! accepts `{name, email, message}` as JSON; a non-success response carries
//! either an `errors` array of `{message}` objects or a single `error`
//! string.

use std::time::Duration;

use serde::Serialize;

use super::{FormRelay, RelayError};
use crate::config::MailConfig;
use crate::services::contact::ContactSubmission;

pub struct HostedFormRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl HostedFormRelay {
    /// # Errors
    ///
    /// Returns [`RelayError::Transport`] if the HTTP client fails to build.
    pub fn from_config(config: &MailConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(Self { http, endpoint: config.relay_url.clone() })
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[async_trait::async_trait]
impl FormRelay for HostedFormRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let body = RelayRequest {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Err(parse_error_body(&text))
    }
}

/// Classify the relay's error payload. Unparseable bodies reduce to the
/// generic failure via an empty `Rejected`.
fn parse_error_body(body: &str) -> RelayError {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return RelayError::Rejected { messages: Vec::new() };
    };

    if let Some(errors) = value.get("errors").and_then(|v| v.as_array()) {
        let messages = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
            .map(str::to_string)
            .collect();
        return RelayError::Rejected { messages };
    }

    if let Some(error) = value.get("error").and_then(|v| v.as_str()) {
        return RelayError::Api(error.to_string());
    }

    RelayError::Rejected { messages: Vec::new() }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
