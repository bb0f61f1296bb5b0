// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dexcom: client for the Dexcom glucose-monitoring web API
//!
//! This crate performs the OAuth2 token exchanges and the devices, glucose
//! readings, events and statistics calls, mapping responses into typed
//! records and failures into [`DexcomError`] categories.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::{ConfigError, DexcomConfig};
pub use error::DexcomError;
pub use services::{DexcomClient, Environment};
