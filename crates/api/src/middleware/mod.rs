//! Request extractors that guard handlers.
//!
//! - [`auth::AuthUser`] -- Requires a valid Bearer token.

pub mod auth;
