use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::adapter::outgoing::security::PasswordHashingConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Reads a single variable. Production uses the process environment, tests
/// pass a map.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn required(lookup: EnvLookup<'_>, key: &'static str) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub fn parse_or<T>(lookup: EnvLookup<'_>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hashing: PasswordHashingConfig,
    pub shutdown_delay: Duration,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "PORT", 8080)?,
        };

        let database = DatabaseConfig {
            url: required(lookup, "DATABASE_URL")?,
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 20)?,
            run_migrations: parse_or(lookup, "RUN_MIGRATIONS", true)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        let shutdown_delay = Duration::from_secs(parse_or(lookup, "SHUTDOWN_DELAY_SECS", 2)?);

        Ok(Self {
            environment,
            server,
            database,
            jwt: JwtConfig::from_lookup(lookup)?,
            hashing: PasswordHashingConfig::from_lookup(lookup)?,
            shutdown_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::security::HasherKind;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_defaults_apply_when_only_required_values_are_set() {
        let lookup = lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/helpdesk"),
            ("JWT_SECRET", SECRET),
        ]);

        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 20);
        assert!(config.database.run_migrations);
        assert_eq!(config.jwt.access_token_expiry, 3600);
        assert_eq!(config.jwt.issuer, "helpdesk");
        assert_eq!(config.hashing.kind, HasherKind::Argon2);
        assert_eq!(config.shutdown_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_missing_database_url() {
        let lookup = lookup_from(&[("JWT_SECRET", SECRET)]);
        let result = AppConfig::from_lookup(&lookup);
        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_port_is_reported_not_panicked() {
        let lookup = lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/helpdesk"),
            ("JWT_SECRET", SECRET),
            ("PORT", "eighty"),
        ]);

        let result = AppConfig::from_lookup(&lookup);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_overrides_are_read() {
        let lookup = lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/helpdesk"),
            ("JWT_SECRET", SECRET),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("PASSWORD_HASHER", "bcrypt"),
            ("SHUTDOWN_DELAY_SECS", "5"),
            ("RUN_MIGRATIONS", "false"),
        ]);

        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.hashing.kind, HasherKind::Bcrypt);
        assert_eq!(config.shutdown_delay, Duration::from_secs(5));
        assert!(!config.database.run_migrations);
    }
}
