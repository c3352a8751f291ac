//! Process configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
pub struct Config {
    /// Connection string of the relational store
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub host: IpAddr,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, falling back to defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready to use
    /// - `Err(ConfigError::InvalidEnvValue)` - `HOST` or `PORT` could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("DATABASE_URL") {
            // sqlx only understands the `postgresql://` scheme spelling in some setups
            Some(url) if url.starts_with("postgres://") => {
                url.replacen("postgres://", "postgresql://", 1)
            }
            Some(url) => url,
            None => DEFAULT_DATABASE_URL.to_string(),
        };

        let host = match lookup("HOST") {
            Some(host) => host.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "HOST".to_string(),
                reason: format!("{}", e),
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Socket address the HTTP listener binds to
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
