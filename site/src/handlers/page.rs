//! Page handler

use axum::extract::State;
use maud::Markup;

use crate::render::home_page;
use crate::AppState;

/// GET /
///
/// Render the home page. Waits for every showcase card before responding.
pub async fn home(State(state): State<AppState>) -> Markup {
    let cards = state.showcase_service.load_cards().await;
    tracing::debug!(cards = cards.len(), "rendering home page");

    home_page(&cards, &state.config.site_url)
}
