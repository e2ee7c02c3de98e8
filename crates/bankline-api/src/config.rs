//! Configuration for the account API process.
//!
//! All configuration is loaded from environment variables. Without a
//! `DATABASE_URL` the server runs against the in-memory store.

use std::net::SocketAddr;
use std::time::Duration;

use bankline_db::PostgresConfig;
use bankline_db::postgres::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS,
};

/// Address used when `LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is present but its value cannot be used.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Complete API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// `PostgreSQL` settings; `None` selects the in-memory store.
    pub database: Option<PostgresConfig>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `LISTEN_ADDR` -- bind address (default `0.0.0.0:3000`; a bare
    ///   `:port` binds all interfaces)
    /// - `DATABASE_URL` -- `PostgreSQL` URL; enables the `PostgreSQL` store
    /// - `DATABASE_MAX_CONNECTIONS` -- pool size (default 10)
    /// - `DATABASE_CONNECT_TIMEOUT_SECS` -- pool acquire timeout (default 5)
    /// - `DATABASE_IDLE_TIMEOUT_SECS` -- idle connection timeout (default 300)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = parse_listen_addr(&raw_addr)?;

        let max_connections: u32 =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let connect_timeout = Duration::from_secs(parse_or(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);
        let idle_timeout = Duration::from_secs(parse_or(
            &lookup,
            "DATABASE_IDLE_TIMEOUT_SECS",
            DEFAULT_IDLE_TIMEOUT_SECS,
        )?);

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| {
                PostgresConfig::new(&url)
                    .with_max_connections(max_connections)
                    .with_connect_timeout(connect_timeout)
                    .with_idle_timeout(idle_timeout)
            });

        Ok(Self {
            listen_addr,
            database,
        })
    }
}

/// Parse `name` if it is set, otherwise fall back to `default`.
fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name).map_or(Ok(default), |raw| {
        raw.parse().map_err(|e| ConfigError::Invalid {
            name,
            reason: format!("{raw}: {e}"),
        })
    })
}

/// Parse a listen address, treating `:port` as all interfaces.
fn parse_listen_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    let full = if raw.starts_with(':') {
        format!("0.0.0.0{raw}")
    } else {
        raw.to_owned()
    };
    full.parse().map_err(|e| ConfigError::Invalid {
        name: "LISTEN_ADDR",
        reason: format!("{raw}: {e}"),
    })
}
