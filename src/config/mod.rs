use std::env;
use std::time::Duration;

use crate::Error;

/// Default PostgreSQL port when `DB_PORT` is not set.
pub const DEFAULT_PORT: u16 = 5432;

/// Default connect/statement timeout in seconds when `DB_CONNECT_TIMEOUT`
/// is not set. Bounds both the TCP connect and each statement so an
/// unreachable or wedged store fails the cycle instead of hanging it.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection parameters for the work order store, resolved from the
/// environment before any connection attempt.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Resolve configuration from process environment variables.
    ///
    /// Recognized keys: `DB_HOST`, `DB_DATABASE`, `DB_USER`, `DB_PASSWORD`
    /// (required), `DB_PORT` (default 5432), `DB_CONNECT_TIMEOUT` in seconds
    /// (default 10). Fails fast with a configuration error when a required
    /// key is missing or a numeric value does not parse.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through a key lookup function.
    ///
    /// Lets tests supply values without mutating process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, Error> {
            match get(key) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(Error::configuration(format!("{} is not set", key))),
            }
        };

        let host = required("DB_HOST")?;
        let database = required("DB_DATABASE")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;

        let port = match get("DB_PORT") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.trim().parse::<u16>().map_err(|_| {
                    Error::configuration(format!(
                        "DB_PORT must be a port number, got '{}'",
                        raw.trim()
                    ))
                })?
            }
            _ => DEFAULT_PORT,
        };

        let timeout_secs = match get("DB_CONNECT_TIMEOUT") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    Error::configuration(format!(
                        "DB_CONNECT_TIMEOUT must be a number of seconds, got '{}'",
                        raw.trim()
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::configuration(
                        "DB_CONNECT_TIMEOUT must be at least 1 second",
                    ));
                }
                secs
            }
            _ => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(DbConfig {
            host,
            database,
            user,
            password,
            port,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
