//! Page routes — server-rendered portfolio.

use axum::extract::State;
use axum::response::Html;

use crate::render::{FormView, render_home};
use crate::state::AppState;

/// `GET /` — the portfolio page with an idle contact form.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.portfolio, &FormView::default()))
}
