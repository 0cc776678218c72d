//! Marker Routes
//!
//! - GET /api/v1/markers - Entry markers as a GeoJSON FeatureCollection

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::map::{render_markers, MarkerCollection};

/// GET /api/v1/markers
///
/// Render the current entry list as map markers. The collection is
/// rebuilt from scratch on every request.
pub async fn get_markers(State(state): State<Arc<AppState>>) -> Json<MarkerCollection> {
    let entries = state.store.entries().await;
    Json(render_markers(&entries))
}
