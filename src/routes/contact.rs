//! Contact routes — the form submission flow and the JSON mail-relay
//! endpoint.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;

use crate::mail::{GENERIC_SEND_ERROR, MailError, OutgoingEmail};
use crate::render::{FormView, render_home};
use crate::services::contact::{self, ContactSubmission, SubmitOutcome, SubmitStatus};
use crate::state::AppState;

const MAILTO_NOTICE: &str = "Couldn't reach the relay, opening your email app instead.";

/// `POST /contact` — urlencoded form submit. Runs the delivery chain and
/// re-renders the page with the outcome: cleared fields on success, sticky
/// fields plus a status line on failure, and a `mailto:` navigation when the
/// chain fell all the way through.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> Html<String> {
    let form = match contact::submit_with_fallback(&state, &submission).await {
        SubmitOutcome::Sent => FormView { status: SubmitStatus::Succeeded, ..FormView::default() },
        SubmitOutcome::MailtoFallback { href } => FormView {
            status: SubmitStatus::Failed(MAILTO_NOTICE.to_string()),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            mailto: Some(href),
        },
        SubmitOutcome::Failed { message } => FormView {
            status: SubmitStatus::Failed(message),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            mailto: None,
        },
    };

    Html(render_home(&state.portfolio, &form))
}

#[derive(Debug, Default, Deserialize)]
pub struct RelayPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub to: String,
}

/// `POST /api/contact` — deliver a contact payload through the transactional
/// provider using server-held credentials.
///
/// Contract: missing credential is 500 regardless of body; a malformed body
/// is a generic 500; a missing recipient (payload `to` falling back to the
/// configured default) is 400; provider-reported failures are 500 with the
/// provider's message.
pub async fn send_contact(State(state): State<AppState>, body: String) -> Response {
    let Some(mailer) = state.mailer.clone() else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Missing RESEND_API_KEY");
    };

    let Ok(payload) = serde_json::from_str::<RelayPayload>(&body) else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SEND_ERROR);
    };

    let recipient = {
        let to = payload.to.trim();
        if to.is_empty() {
            state.mail.default_to.clone().unwrap_or_default()
        } else {
            to.to_string()
        }
    };
    if recipient.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing recipient email");
    }

    let submission = ContactSubmission {
        name: payload.name,
        email: payload.email,
        message: payload.message,
    };
    let email = OutgoingEmail {
        from: state.mail.from.clone(),
        to: recipient,
        reply_to: (!submission.email.is_empty()).then(|| submission.email.clone()),
        subject: contact::contact_subject(&submission.name),
        text: contact::contact_body(&submission),
    };

    match mailer.send(&email).await {
        Ok(id) => Json(serde_json::json!({ "ok": true, "id": id })).into_response(),
        Err(MailError::Delivery(message)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
        Err(e) => {
            tracing::error!(error = %e, "contact delivery failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SEND_ERROR)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
