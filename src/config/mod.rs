// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration loaded from the environment

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::generator::client::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::posts::ImageMode;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Errors detected while loading configuration. All of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Runtime configuration for the relay
#[derive(Clone)]
pub struct RelayConfig {
    /// Provider credential
    pub api_key: String,
    /// Provider model identifier
    pub model: String,
    /// Provider REST base URL
    pub api_base: String,
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Image mode forced for requests that do not pick one; `None` lets the
    /// post style decide
    pub image_mode: Option<ImageMode>,
    /// Client-side timeout for provider calls; `None` waits indefinitely
    pub provider_timeout: Option<Duration>,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("image_mode", &self.image_mode)
            .field("provider_timeout", &self.provider_timeout)
            .finish()
    }
}

impl RelayConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_empty("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match non_empty("API_PORT") {
            Some(v) => v.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "API_PORT".to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let image_mode = match non_empty("IMAGE_MODE") {
            Some(v) => Some(v.parse::<ImageMode>().map_err(|message| ConfigError::Invalid {
                key: "IMAGE_MODE".to_string(),
                message,
            })?),
            None => None,
        };

        let provider_timeout = match non_empty("PROVIDER_TIMEOUT_SECS") {
            Some(v) => {
                let secs = v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "PROVIDER_TIMEOUT_SECS".to_string(),
                    message: e.to_string(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            host: non_empty("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            image_mode,
            provider_timeout,
        })
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "API_HOST".to_string(),
                message: e.to_string(),
            })
    }
}
