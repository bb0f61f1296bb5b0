// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Status and body interpretation shared by every operation.

use crate::error::DexcomError;
use crate::services::transport::ApiResponse;
use serde::de::DeserializeOwned;

/// Decode a 2xx body into `T`; anything else becomes an API error.
///
/// Non-2xx bodies are kept as raw text and never parsed, since Dexcom error
/// payloads follow no fixed schema.
pub fn interpret<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, DexcomError> {
    let status = response.status;

    if !(200..300).contains(&status) {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        tracing::warn!(status, "Dexcom API returned non-success status");
        return Err(DexcomError::Api { status, body });
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        tracing::warn!(status, error = %e, "Failed to decode Dexcom response");
        DexcomError::Json {
            status,
            message: e.to_string(),
        }
    })
}
