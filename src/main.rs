mod config;
mod content;
mod mail;
mod render;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::mail::Mailer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let portfolio = content::PortfolioConfig::load();
    let mail_config = config::MailConfig::from_env();

    // Direct delivery is optional: without a credential the contact flow
    // starts at the hosted form relay.
    let mailer: Option<Arc<dyn Mailer>> =
        match mail::resend::ResendMailer::from_config(&mail_config) {
            Ok(m) => {
                tracing::info!(from = %mail_config.from, "resend mailer initialized");
                Some(Arc::new(m))
            }
            Err(e) => {
                tracing::warn!(error = %e, "mailer not configured, direct delivery disabled");
                None
            }
        };

    let relay = Arc::new(
        mail::relay::HostedFormRelay::from_config(&mail_config)
            .expect("form relay client build failed"),
    );

    let state = state::AppState::new(portfolio, mail_config, mailer, relay);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await.expect("server failed");
}
