// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! Built once and moved into [`crate::DexcomClient`]; nothing is read from
//! ambient state after construction.

use crate::services::endpoint::Environment;
use std::env;
use std::time::Duration;

/// Request timeout used when `DEXCOM_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client configuration.
#[derive(Clone)]
pub struct DexcomConfig {
    /// Dexcom OAuth client ID (public)
    pub client_id: String,
    /// Dexcom OAuth client secret
    pub client_secret: String,
    /// Upper bound on a single request, connect through body
    pub timeout: Duration,
    /// Production or sandbox host
    pub environment: Environment,
}

impl std::fmt::Debug for DexcomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DexcomConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("environment", &self.environment)
            .finish()
    }
}

impl DexcomConfig {
    /// Production config with the default timeout.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: DEFAULT_TIMEOUT,
            environment: Environment::Production,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let client_id =
            lookup("DEXCOM_CLIENT_ID").ok_or(ConfigError::Missing("DEXCOM_CLIENT_ID"))?;
        let client_secret = lookup("DEXCOM_CLIENT_SECRET")
            .map(|v| v.trim().to_string())
            .ok_or(ConfigError::Missing("DEXCOM_CLIENT_SECRET"))?;

        let timeout = match lookup("DEXCOM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "DEXCOM_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let sandbox = match lookup("DEXCOM_SANDBOX") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                name: "DEXCOM_SANDBOX",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            client_id,
            client_secret,
            timeout,
            environment: Environment::from_sandbox_flag(sandbox),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
