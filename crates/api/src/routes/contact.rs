use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// `POST /contact` -> submit_contact
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit_contact))
}
