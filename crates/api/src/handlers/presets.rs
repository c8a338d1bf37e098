//! Handlers for the `/presets` resource.
//!
//! Listing is public; creating, updating and deleting require an
//! [`AuthUser`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use presetshop_core::error::CoreError;
use presetshop_core::preset::{CreatePreset, Preset, UpdatePreset};
use presetshop_core::types::PresetId;
use serde::Serialize;

use super::json_or_default;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Acknowledgement returned by delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Path ids arrive as text; anything that is not an integer matches no preset.
fn parse_id(raw: &str) -> Option<PresetId> {
    raw.trim().parse().ok()
}

// ---------------------------------------------------------------------------
// GET /presets
// ---------------------------------------------------------------------------

/// List every preset in display order.
pub async fn list_presets(State(state): State<AppState>) -> Json<Vec<Preset>> {
    let items = state.catalog.list().await;
    tracing::debug!(count = items.len(), "Listed presets");
    Json(items)
}

// ---------------------------------------------------------------------------
// POST /presets
// ---------------------------------------------------------------------------

/// Create a preset at the end of the display order.
pub async fn create_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreatePreset>, JsonRejection>,
) -> AppResult<Json<Preset>> {
    let input = json_or_default(payload)?;

    let created = state.catalog.create(input).await?;
    tracing::info!(id = created.id, name = %created.name, by = %auth.username, "Preset created");
    Ok(Json(created))
}

// ---------------------------------------------------------------------------
// PUT /presets/{id}
// ---------------------------------------------------------------------------

/// Merge the supplied fields into an existing preset.
pub async fn update_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdatePreset>, JsonRejection>,
) -> AppResult<Json<Preset>> {
    let changes = json_or_default(payload)?;
    let id = parse_id(&raw_id).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Preset",
            id: raw_id.clone(),
        })
    })?;

    let updated = state.catalog.update(id, &changes).await?;
    tracing::info!(id = updated.id, by = %auth.username, "Preset updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /presets/{id}
// ---------------------------------------------------------------------------

/// Delete a preset. Succeeds whether or not the id exists.
pub async fn delete_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<DeleteResponse> {
    let removed = match parse_id(&raw_id) {
        Some(id) => state.catalog.delete(id).await,
        None => 0,
    };
    tracing::info!(id = %raw_id, removed, by = %auth.username, "Preset delete requested");
    Json(DeleteResponse { message: "Deleted" })
}
