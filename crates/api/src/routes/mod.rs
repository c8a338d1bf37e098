pub mod auth;
pub mod contact;
pub mod health;
pub mod presets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /presets                                         list (public), create (auth)
/// /presets/{id}                                    update, delete (auth)
///
/// /contact                                         submit contact form (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/presets", presets::router())
        .merge(contact::router())
}
