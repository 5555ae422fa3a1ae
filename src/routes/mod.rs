//! Router assembly.
//!
//! The portfolio page is server-rendered at `/`, static assets come from
//! `/assets`, and the contact surface is two endpoints: the urlencoded form
//! handler at `/contact` and the JSON mail-relay endpoint at `/api/contact`.

pub mod contact;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the static assets directory.
fn assets_dir() -> PathBuf {
    std::env::var("ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::home))
        .route("/contact", post(contact::submit_form))
        .route("/api/contact", post(contact::send_contact))
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(assets_dir()))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
