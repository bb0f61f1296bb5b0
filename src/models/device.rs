// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Devices and alert settings from `GET /v1/users/self/devices`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// A monitoring device and its alert configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    pub model: String,
    /// Opaque timestamp string, as sent by the API; `None` before first upload
    pub last_upload_date: Option<String>,
    pub alert_settings: Vec<AlertSetting>,
}

/// Settings for a single alert on a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertSetting {
    pub alert_name: String,
    /// Threshold value in `unit`
    pub value: f64,
    pub unit: String,
    /// Snooze in minutes
    pub snooze: i64,
    /// Delay in minutes
    pub delay: i64,
    pub enabled: bool,
    pub system_time: String,
    pub display_time: String,
}
