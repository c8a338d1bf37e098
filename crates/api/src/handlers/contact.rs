//! Handler for the public contact form.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use presetshop_core::contact::ContactMessage;
use presetshop_core::validation::validate_fields;
use serde::Serialize;

use super::json_or_default;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
}

/// POST /api/contact
///
/// Relay a contact-form submission to the configured recipient.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<Json<ContactResponse>> {
    let input = json_or_default(payload)?;
    validate_fields(&input)?;

    let mail = input.to_mail();
    let relay = state.mailer.name();
    state
        .mailer
        .send(&state.config.contact_to, &mail.subject, &mail.body)
        .await
        .map_err(|e| AppError::InternalError(format!("Mail relay '{relay}' failed: {e}")))?;

    tracing::info!(relay, "Contact message relayed");
    Ok(Json(ContactResponse { ok: true }))
}
