// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error categories returned by the Dexcom client.

use crate::services::transport::TransportError;

/// Categorized failure of a Dexcom API call.
#[derive(Debug, thiserror::Error)]
pub enum DexcomError {
    #[error("Missing parameter: {0}")]
    MissingParam(&'static str),

    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Status code was not in the 2xx range: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Could not unmarshal response with code {status} | {message}")]
    Json { status: u16, message: String },

    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl DexcomError {
    pub const MISSING_PARAM: &'static str = "ERROR_MISSING_PARAM";
    pub const REQUEST: &'static str = "ERROR_REQUEST";
    pub const API: &'static str = "ERROR_API";
    pub const JSON: &'static str = "ERROR_JSON";
    pub const ENCODE: &'static str = "ERROR_ENCODE";

    /// Stable code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            DexcomError::MissingParam(_) => Self::MISSING_PARAM,
            DexcomError::Transport(_) => Self::REQUEST,
            DexcomError::Api { .. } => Self::API,
            DexcomError::Json { .. } => Self::JSON,
            DexcomError::Encode(_) => Self::ENCODE,
        }
    }

    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            DexcomError::Api { status, .. } | DexcomError::Json { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the API rejected the access token (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, DexcomError::Api { status: 401, .. })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, DexcomError>;
