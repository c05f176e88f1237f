//! Layout Route
//!
//! - GET /api/v1/layout - The page's view definition as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::PageLayout;

/// GET /api/v1/layout
///
/// Returns the declarative page description: title, dropdown options,
/// range-control bounds and seed, and the chart slots with their input
/// subscriptions. The browser shell builds the page from this.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<PageLayout> {
    Json((*state.layout).clone())
}
