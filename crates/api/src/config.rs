//! Server configuration loaded from the environment.

use std::env;
use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

/// Bind address for the HTTP server.
///
/// - `HOST`: defaults to `0.0.0.0`
/// - `PORT`: defaults to `8080`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| Ipv4Addr::UNSPECIFIED.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::Parse {
                key: "PORT".to_string(),
                details: format!("{e}"),
            })?,
            Err(_) => Self::default().port,
        };
        Ok(Self { host, port })
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}
