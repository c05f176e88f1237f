//! Callback Route
//!
//! - GET /api/v1/callback/:output - Recompute one chart from the current
//!   control values

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::CallbackParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::Figure;

/// GET /api/v1/callback/:output
///
/// Looks the output slot up in the callback registry and invokes its pure
/// handler with the shared dataset and the resolved control values. An
/// unknown output slot is a 404; an unknown site or an empty narrowing is
/// not an error and returns a figure with no traces.
pub async fn invoke_callback(
    State(state): State<Arc<AppState>>,
    Path(output): Path<String>,
    Query(params): Query<CallbackParams>,
) -> ApiResult<Json<Figure>> {
    let controls = params.into_controls(&state.dataset);

    tracing::debug!(
        output = %output,
        site = %controls.site,
        low = controls.payload_range.0,
        high = controls.payload_range.1,
        "Invoking chart callback"
    );

    state
        .callbacks
        .invoke(&output, &state.dataset, &controls)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown chart slot: {output}")))
}
