use std::sync::Arc;

use presetshop_core::catalog::CatalogStore;
use presetshop_mail::MailRelay;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings, admin credentials, contact recipient).
    pub config: Arc<ServerConfig>,
    /// The preset catalog, seeded at startup.
    pub catalog: Arc<CatalogStore>,
    /// Outbound relay for contact-form mail.
    pub mailer: Arc<dyn MailRelay>,
}
