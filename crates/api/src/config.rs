use crate::auth::credentials::AdminCredentials;
use crate::auth::jwt::JwtConfig;

/// Origins the public site is served from.
const DEFAULT_CORS_ORIGINS: &str = "https://sreenish-hub.github.io,http://localhost:3000";

/// Largest accepted JSON request body (10 MiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Contact-form recipient when neither `CONTACT_TO` nor `SMTP_FROM` is set.
const DEFAULT_CONTACT_TO: &str = "contact@localhost";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes (default: 10 MiB).
    pub body_limit_bytes: usize,
    /// JWT token configuration (secret, lifetime).
    pub jwt: JwtConfig,
    /// The administrator allowed to log in, if any.
    pub admin: Option<AdminCredentials>,
    /// Recipient of contact-form messages.
    pub contact_to: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                              |
    /// |------------------------|------------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                            |
    /// | `PORT`                 | `3000`                                               |
    /// | `CORS_ORIGINS`         | `https://sreenish-hub.github.io,http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                                 |
    /// | `BODY_LIMIT_BYTES`     | `10485760`                                           |
    /// | `CONTACT_TO`           | `SMTP_FROM`, then `contact@localhost`                |
    ///
    /// JWT settings come from [`JwtConfig::from_env`], the administrator from
    /// [`AdminCredentials::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .unwrap_or_else(|_| DEFAULT_BODY_LIMIT_BYTES.to_string())
            .parse()
            .expect("BODY_LIMIT_BYTES must be a valid usize");

        let contact_to = std::env::var("CONTACT_TO")
            .or_else(|_| std::env::var("SMTP_FROM"))
            .unwrap_or_else(|_| DEFAULT_CONTACT_TO.into());

        let admin = AdminCredentials::from_env();
        if admin.is_none() {
            tracing::warn!("ADMIN_USERNAME / ADMIN_PASSWORD not set, every login will be rejected");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            body_limit_bytes,
            jwt: JwtConfig::from_env(),
            admin,
            contact_to,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origins_cover_site_and_local_dev() {
        assert_eq!(
            parse_origins(DEFAULT_CORS_ORIGINS),
            vec!["https://sreenish-hub.github.io", "http://localhost:3000"]
        );
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
    }
}
