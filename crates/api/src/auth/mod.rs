//! Authentication primitives.
//!
//! - [`credentials`] -- Admin username/password check backed by Argon2id.
//! - [`jwt`] -- Bearer token issuance and verification.

pub mod credentials;
pub mod jwt;
