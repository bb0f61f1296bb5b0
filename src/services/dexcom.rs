// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dexcom API client.
//!
//! Handles:
//! - Authorization-code and refresh-token exchange
//! - Devices, glucose readings, events and statistics over a date window
//!
//! Every operation builds its request, sends it through the [`Transport`],
//! and runs the result through [`interpret`].

use crate::config::DexcomConfig;
use crate::error::DexcomError;
use crate::models::{
    DeviceResponse, EGVResponse, EventResponse, StatRequest, Statistics, UserToken,
};
use crate::services::requests::{
    date_range_request, statistics_request, token_request, TokenGrant, DEVICES_PATH, EGVS_PATH,
    EVENTS_PATH,
};
use crate::services::response::interpret;
use crate::services::transport::{ApiRequest, ReqwestTransport, Transport};
use crate::time_utils::{Clock, SystemClock};
use chrono::{DateTime, TimeZone};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// Dexcom API client.
///
/// Holds only immutable configuration, so a single instance can be cloned or
/// shared across tasks. Dropping a returned future cancels the request.
#[derive(Clone)]
pub struct DexcomClient<T = ReqwestTransport> {
    transport: T,
    client_id: String,
    client_secret: String,
    clock: Arc<dyn Clock>,
}

impl DexcomClient<ReqwestTransport> {
    /// Create a client for the configured environment.
    pub fn new(config: DexcomConfig) -> Result<Self, DexcomError> {
        let transport = ReqwestTransport::new(config.environment.base_url(), config.timeout)?;

        tracing::info!(
            environment = ?config.environment,
            timeout_secs = config.timeout.as_secs(),
            "Initialized Dexcom client"
        );

        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> DexcomClient<T> {
    /// Create a client over an arbitrary transport.
    ///
    /// `config.environment` and `config.timeout` are the transport's concern
    /// and are ignored here.
    pub fn with_transport(config: DexcomConfig, transport: T) -> Self {
        Self {
            transport,
            client_id: config.client_id,
            client_secret: config.client_secret,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source used to stamp token expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ─── OAuth ───────────────────────────────────────────────────────────────

    /// Exchange an authorization code for tokens.
    pub async fn get_user(
        &self,
        authorization_code: &str,
        redirect_uri: &str,
    ) -> Result<UserToken, DexcomError> {
        self.exchange(authorization_code, "", redirect_uri).await
    }

    /// Exchange a refresh token for a fresh access token.
    pub async fn refresh_user(
        &self,
        refresh_token: &str,
        redirect_uri: &str,
    ) -> Result<UserToken, DexcomError> {
        self.exchange("", refresh_token, redirect_uri).await
    }

    async fn exchange(
        &self,
        authorization_code: &str,
        refresh_token: &str,
        redirect_uri: &str,
    ) -> Result<UserToken, DexcomError> {
        let grant = TokenGrant::from_parts(authorization_code, refresh_token)?;
        let request = token_request(&self.client_id, &self.client_secret, grant, redirect_uri);

        let mut token: UserToken = self.execute(request).await?;
        token.stamp_expiry(self.clock.now());

        tracing::info!(
            grant_type = grant.grant_type(),
            expires_in = token.expires_in,
            "Dexcom token exchange successful"
        );
        Ok(token)
    }

    // ─── Data ────────────────────────────────────────────────────────────────

    /// `GET /v1/users/self/devices`
    pub async fn get_devices<Tz: TimeZone>(
        &self,
        access_token: &str,
        start_date: &DateTime<Tz>,
        end_date: &DateTime<Tz>,
    ) -> Result<DeviceResponse, DexcomError> {
        let request = date_range_request(DEVICES_PATH, access_token, start_date, end_date);
        self.execute(request).await
    }

    /// `GET /v1/users/self/egvs`
    pub async fn get_glucose_readings<Tz: TimeZone>(
        &self,
        access_token: &str,
        start_date: &DateTime<Tz>,
        end_date: &DateTime<Tz>,
    ) -> Result<EGVResponse, DexcomError> {
        let request = date_range_request(EGVS_PATH, access_token, start_date, end_date);
        self.execute(request).await
    }

    /// `GET /v1/users/self/events`
    pub async fn get_events<Tz: TimeZone>(
        &self,
        access_token: &str,
        start_date: &DateTime<Tz>,
        end_date: &DateTime<Tz>,
    ) -> Result<EventResponse, DexcomError> {
        let request = date_range_request(EVENTS_PATH, access_token, start_date, end_date);
        self.execute(request).await
    }

    /// `POST /v1/users/self/statistics`
    ///
    /// `stat_requests` maps a group name to the statistics wanted for it.
    pub async fn get_statistics<Tz: TimeZone>(
        &self,
        access_token: &str,
        start_date: &DateTime<Tz>,
        end_date: &DateTime<Tz>,
        stat_requests: &HashMap<String, Vec<StatRequest>>,
    ) -> Result<Statistics, DexcomError> {
        let request = statistics_request(access_token, start_date, end_date, stat_requests)?;
        self.execute(request).await
    }

    /// Send a request and interpret the response as `R`.
    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, DexcomError> {
        tracing::debug!(method = %request.method, path = request.path, "Sending Dexcom request");

        let response = self.transport.send(request).await?;
        interpret(&response)
    }
}
