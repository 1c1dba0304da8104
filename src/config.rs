// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! immutable [`AppConfig`] built from them at startup. A `.env` file in the
//! working directory is honoured (loaded by `main` through `dotenvy`).
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATA_DIR` | Root directory of the document store | `./data` |
//! | `DB_NAME` | Database name (sub-directory of `DATA_DIR`) | `site` |
//! | `UPLOADS_DIR` | Directory holding uploaded images | `./uploads` |
//! | `ADMIN_EMAIL` | Email of the single admin account | Required |
//! | `ADMIN_PASSWORD` | Admin password, hashed at startup | Required |
//! | `JWT_SECRET` | Session token signing secret (>= 32 bytes) | Required |
//! | `TOKEN_TTL_HOURS` | Session token lifetime in hours | `24` |
//! | `CORS_ORIGINS` | Comma-separated allowed origins, or `*` | `*` |
//! | `RESEND_API_KEY` | Resend API key for contact notifications | Optional |
//! | `CONTACT_EMAIL` | Destination of contact notifications | `info@belkgroup.be` |
//! | `SENDER_EMAIL` | Sender of contact notifications | `onboarding@resend.dev` |
//! | `SEED_DEFAULT_CONTENT` | Seed the default services when the catalog is empty | `false` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{fmt, path::PathBuf};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_DIR_ENV: &str = "DATA_DIR";
pub const DB_NAME_ENV: &str = "DB_NAME";
pub const UPLOADS_DIR_ENV: &str = "UPLOADS_DIR";
pub const ADMIN_EMAIL_ENV: &str = "ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const TOKEN_TTL_HOURS_ENV: &str = "TOKEN_TTL_HOURS";
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";
pub const RESEND_API_KEY_ENV: &str = "RESEND_API_KEY";
pub const CONTACT_EMAIL_ENV: &str = "CONTACT_EMAIL";
pub const SENDER_EMAIL_ENV: &str = "SENDER_EMAIL";
pub const SEED_DEFAULT_CONTENT_ENV: &str = "SEED_DEFAULT_CONTENT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_DB_NAME: &str = "site";
pub const DEFAULT_UPLOADS_DIR: &str = "./uploads";
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
pub const DEFAULT_CONTACT_EMAIL: &str = "info@belkgroup.be";
pub const DEFAULT_SENDER_EMAIL: &str = "onboarding@resend.dev";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// HS256 keys shorter than the hash output weaken the signature.
pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Read `LOG_FORMAT` directly; logging is set up before the rest of the
    /// configuration is validated.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Outbound email settings. `api_key` is `None` when notifications are off.
#[derive(Clone)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub contact_email: String,
    pub sender_email: String,
}

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub db_name: String,
    pub uploads_dir: PathBuf,
    pub admin_email: String,
    pub admin_password: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub cors_origins: CorsOrigins,
    pub email: EmailConfig,
    pub seed_default_content: bool,
}

impl AppConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get(PORT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: PORT_ENV,
                reason: format!("'{raw}' is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let token_ttl_hours = match get(TOKEN_TTL_HOURS_ENV) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: TOKEN_TTL_HOURS_ENV,
                        reason: format!("'{raw}' is not a positive number of hours"),
                    })
                }
            },
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        let jwt_secret = required(JWT_SECRET_ENV)?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Invalid {
                var: JWT_SECRET_ENV,
                reason: format!("must be at least {MIN_JWT_SECRET_LEN} bytes"),
            });
        }

        let seed_default_content = get(SEED_DEFAULT_CONTENT_ENV)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host: get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            data_dir: PathBuf::from(get(DATA_DIR_ENV).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())),
            db_name: get(DB_NAME_ENV).unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            uploads_dir: PathBuf::from(
                get(UPLOADS_DIR_ENV).unwrap_or_else(|| DEFAULT_UPLOADS_DIR.to_string()),
            ),
            admin_email: required(ADMIN_EMAIL_ENV)?.trim().to_string(),
            admin_password: required(ADMIN_PASSWORD_ENV)?,
            jwt_secret,
            token_ttl_hours,
            cors_origins: CorsOrigins::parse(&get(CORS_ORIGINS_ENV).unwrap_or_default()),
            email: EmailConfig {
                api_key: get(RESEND_API_KEY_ENV),
                contact_email: get(CONTACT_EMAIL_ENV)
                    .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
                sender_email: get(SENDER_EMAIL_ENV)
                    .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_string()),
            },
            seed_default_content,
        })
    }

    /// Directory of the configured database inside the data root.
    pub fn database_dir(&self) -> PathBuf {
        self.data_dir.join(&self.db_name)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("db_name", &self.db_name)
            .field("uploads_dir", &self.uploads_dir)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("cors_origins", &self.cors_origins)
            .field("email_enabled", &self.email.api_key.is_some())
            .field("contact_email", &self.email.contact_email)
            .field("seed_default_content", &self.seed_default_content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn minimal() -> Vec<(&'static str, &'static str)> {
        vec![
            (ADMIN_EMAIL_ENV, "admin@example.com"),
            (ADMIN_PASSWORD_ENV, "hunter2"),
            (JWT_SECRET_ENV, SECRET),
        ]
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_unset() {
        let config = AppConfig::from_lookup(lookup(&minimal())).unwrap();

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_dir(), PathBuf::from("./data/site"));
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert!(config.email.api_key.is_none());
        assert_eq!(config.email.contact_email, DEFAULT_CONTACT_EMAIL);
        assert!(!config.seed_default_content);
    }

    #[test]
    fn missing_admin_email_is_rejected() {
        let vars: Vec<_> = minimal()
            .into_iter()
            .filter(|(k, _)| *k != ADMIN_EMAIL_ENV)
            .collect();
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ADMIN_EMAIL_ENV));
    }

    #[test]
    fn short_jwt_secret_is_rejected() {
        let mut vars = minimal();
        vars.retain(|(k, _)| *k != JWT_SECRET_ENV);
        vars.push((JWT_SECRET_ENV, "too-short"));
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: JWT_SECRET_ENV, .. }));
    }

    #[test]
    fn invalid_port_and_ttl_are_rejected() {
        let mut vars = minimal();
        vars.push((PORT_ENV, "eighty"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { var: PORT_ENV, .. })
        ));

        let mut vars = minimal();
        vars.push((TOKEN_TTL_HOURS_ENV, "0"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { var: TOKEN_TTL_HOURS_ENV, .. })
        ));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let mut vars = minimal();
        vars.push((CORS_ORIGINS_ENV, "https://a.example, https://b.example ,"));
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn wildcard_anywhere_means_any_origin() {
        assert_eq!(CorsOrigins::parse("https://a.example,*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse(""), CorsOrigins::Any);
    }

    #[test]
    fn seed_flag_accepts_common_truthy_values() {
        for raw in ["true", "1", "YES"] {
            let mut vars = minimal();
            vars.push((SEED_DEFAULT_CONTENT_ENV, raw));
            assert!(AppConfig::from_lookup(lookup(&vars)).unwrap().seed_default_content);
        }
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = AppConfig::from_lookup(lookup(&minimal())).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains(SECRET));
        assert!(rendered.contains("<redacted>"));
    }
}
