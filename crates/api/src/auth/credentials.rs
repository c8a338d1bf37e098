//! Admin credential check.
//!
//! The store has a single administrator configured through the environment.
//! The password is kept only as an Argon2id PHC string: a plaintext
//! `ADMIN_PASSWORD` is hashed once at startup, or a precomputed
//! `ADMIN_PASSWORD_HASH` is used as-is.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// The configured administrator.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminCredentials {
    /// Build credentials from a plaintext password, hashing it with a random salt.
    pub fn from_plaintext(
        username: impl Into<String>,
        password: &str,
    ) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }

    /// Build credentials from an existing PHC-formatted hash.
    ///
    /// Fails if `hash` is not a parseable PHC string.
    pub fn from_hash(
        username: impl Into<String>,
        hash: impl Into<String>,
    ) -> Result<Self, argon2::password_hash::Error> {
        let password_hash = hash.into();
        PasswordHash::new(&password_hash)?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    /// Load the administrator from the environment.
    ///
    /// | Env Var               | Notes                                  |
    /// |-----------------------|----------------------------------------|
    /// | `ADMIN_USERNAME`      | required                               |
    /// | `ADMIN_PASSWORD_HASH` | Argon2 PHC string, takes precedence    |
    /// | `ADMIN_PASSWORD`      | plaintext, hashed at startup           |
    ///
    /// Returns `None` when no administrator is configured.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD_HASH` is set but malformed.
    pub fn from_env() -> Option<Self> {
        let username = non_empty_var("ADMIN_USERNAME")?;

        if let Some(hash) = non_empty_var("ADMIN_PASSWORD_HASH") {
            return Some(
                Self::from_hash(username, hash)
                    .unwrap_or_else(|e| panic!("ADMIN_PASSWORD_HASH is not a valid PHC string: {e}")),
            );
        }

        let password = non_empty_var("ADMIN_PASSWORD")?;
        Some(
            Self::from_plaintext(username, &password)
                .unwrap_or_else(|e| panic!("Failed to hash ADMIN_PASSWORD: {e}")),
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt against the configured administrator.
    ///
    /// The password hash is always verified, even when the username is wrong.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let password_ok = match verify_password(password, &self.password_hash) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!(error = %e, "Admin password hash could not be verified");
                false
            }
        };
        password_ok && username == self.username
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
