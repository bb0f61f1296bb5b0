// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth token returned by the Dexcom token endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds shaved off `expires_in` so the token is treated as expired slightly
/// before the server would reject it.
pub const EXPIRY_BUFFER_SECS: i64 = 5;

/// Authorization info needed to access a user's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserToken {
    /// Bearer credential for the data endpoints
    pub access_token: String,
    /// Credential for obtaining the next access token
    #[serde(default)]
    pub refresh_token: String,
    /// Lifetime of the access token in seconds, as reported by the server
    pub expires_in: i64,
    /// Token type (normally "Bearer")
    #[serde(default)]
    pub token_type: String,
    /// Derived at receipt time; never read from or written to the wire.
    #[serde(skip)]
    pub expire_time: Option<DateTime<Utc>>,
}

impl UserToken {
    /// Stamp `expire_time` as `received_at + expires_in - 5s`.
    pub fn stamp_expiry(&mut self, received_at: DateTime<Utc>) {
        let lifetime = self.expires_in.saturating_sub(EXPIRY_BUFFER_SECS);
        self.expire_time =
            Duration::try_seconds(lifetime).and_then(|d| received_at.checked_add_signed(d));
    }

    /// True once `now` reaches the stamped expiry, or if none was stamped.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expire_time {
            Some(expire_time) => now >= expire_time,
            None => true,
        }
    }
}
