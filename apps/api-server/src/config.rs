//! Application configuration loaded from environment variables.

use std::env;

use bloglist_infra::{JwtConfig, PasswordConfig};
use bloglist_infra::auth::DEFAULT_SECRET;
use bloglist_infra::database::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let is_test = lookup("APP_ENV").is_some_and(|v| v == "test");
        let url_var = if is_test {
            "TEST_DATABASE_URL"
        } else {
            "DATABASE_URL"
        };

        let database = lookup(url_var).map(|url| DatabaseConfig {
            url,
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(10),
            min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(1),
            auto_migrate: lookup("DB_AUTO_MIGRATE").is_none_or(|v| v != "false" && v != "0"),
        });

        let secret = lookup("JWT_SECRET")
            .or_else(|| lookup("SECRET"))
            .unwrap_or_else(|| DEFAULT_SECRET.to_string());

        let jwt = JwtConfig {
            secret,
            expiration_hours: parsed(&lookup, "JWT_EXPIRATION_HOURS"),
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| JwtConfig::default().issuer),
        };

        let defaults = PasswordConfig::default();
        let password = PasswordConfig {
            memory_kib: parsed(&lookup, "ARGON2_MEMORY_KIB").unwrap_or(defaults.memory_kib),
            iterations: parsed(&lookup, "ARGON2_ITERATIONS").unwrap_or(defaults.iterations),
            parallelism: parsed(&lookup, "ARGON2_PARALLELISM").unwrap_or(defaults.parallelism),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parsed(&lookup, "PORT").unwrap_or(3003),
            database,
            jwt,
            password,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }

    /// Emit warnings for settings that are unsafe outside development.
    pub fn warn_insecure_defaults(&self) {
        if self.jwt.secret == DEFAULT_SECRET {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}
