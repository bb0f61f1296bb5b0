// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the Dexcom API.

pub mod device;
pub mod egv;
pub mod event;
pub mod stats;
pub mod token;

pub use device::{AlertSetting, Device, DeviceResponse};
pub use egv::{EGVResponse, EGV};
pub use event::{Event, EventResponse};
pub use stats::{MinMax, StatRequest, Statistics};
pub use token::UserToken;
