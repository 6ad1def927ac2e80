//! Server configuration from environment variables.

use derive_getters::Getters;
use promessa_error::{ConfigError, PromessaResult};

/// Runtime configuration for the API server.
///
/// Reads:
/// - `DATABASE_URL` (required)
/// - `PROMESSA_BIND_ADDR` (default: "127.0.0.1:3000")
/// - `PROMESSA_LOCAL_STORE_DIR` (default: "./local-store")
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    database_url: String,
    /// Address the HTTP listener binds to
    bind_addr: String,
    /// Directory backing the device-local fallback store
    local_store_dir: String,
}

impl ServerConfig {
    /// Build a configuration from explicit values.
    pub fn new(
        database_url: impl Into<String>,
        bind_addr: impl Into<String>,
        local_store_dir: impl Into<String>,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            bind_addr: bind_addr.into(),
            local_store_dir: local_store_dir.into(),
        }
    }

    /// Build a configuration from the environment.
    pub fn from_env() -> PromessaResult<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::new("DATABASE_URL not set"))?;
        let bind_addr = std::env::var("PROMESSA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let local_store_dir = std::env::var("PROMESSA_LOCAL_STORE_DIR")
            .unwrap_or_else(|_| "./local-store".to_string());
        Ok(Self {
            database_url,
            bind_addr,
            local_store_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_round_trip() {
        let config = ServerConfig::new("postgres://localhost/promessa", "0.0.0.0:8080", "/tmp/ls");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.local_store_dir(), "/tmp/ls");
        assert!(config.database_url().starts_with("postgres://"));
    }
}
