//! Route definitions for the `/presets` resource.
//!
//! ```text
//! GET    /                              list_presets
//! POST   /                              create_preset
//! PUT    /{id}                          update_preset
//! DELETE /{id}                          delete_preset
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::presets;
use crate::state::AppState;

/// Preset routes, mounted at `/presets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(presets::list_presets).post(presets::create_preset))
        .route(
            "/{id}",
            put(presets::update_preset).delete(presets::delete_preset),
        )
}
