//! Service metadata and bind-address configuration for the SPM AI service.

use serde::Serialize;
use std::env;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Metadata
// ─────────────────────────────────────────────────────────────────────────────

pub const SERVICE_TITLE: &str = "SPM AI Service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const SERVICE_NAME: &str = "ai-service";

/// Fixed identity of the service, shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: SERVICE_TITLE,
            version: SERVICE_VERSION,
            service: SERVICE_NAME,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = non_empty(lookup("HOST")) {
            config.host = host;
        }

        if let Some(port) = non_empty(lookup("PORT")) {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
