// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User events from `GET /v1/users/self/events`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A logged user event (exercise, carbs, insulin, ...).
///
/// Missing fields decode to their defaults. Carb and health events send
/// `eventSubType` (and sometimes `unit`) as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub system_time: String,
    pub display_time: String,
    pub event_type: String,
    pub event_sub_type: Option<String>,
    pub value: f64,
    pub unit: Option<String>,
}
