// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Estimated glucose values from `GET /v1/users/self/egvs`.
//!
//! `status`, `trend` and `trend_rate` may be omitted or sent as `null`. They
//! are modelled as `Option<Option<T>>`:
//! - `None`: field absent
//! - `Some(None)`: field present and `null`
//! - `Some(Some(v))`: field present with a value

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EGVResponse {
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub rate_unit: String,
    #[serde(default)]
    pub egvs: Vec<EGV>,
}

/// A single glucose reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EGV {
    pub system_time: String,
    pub display_time: String,
    pub value: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub trend: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub trend_rate: Option<Option<f64>>,
}

impl EGV {
    /// Trend, if present with a value.
    pub fn trend(&self) -> Option<&str> {
        self.trend.as_ref().and_then(|t| t.as_deref())
    }

    /// Trend rate, if present with a value.
    pub fn trend_rate(&self) -> Option<f64> {
        self.trend_rate.flatten()
    }
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
