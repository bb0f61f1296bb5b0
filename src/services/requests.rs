// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire requests for each Dexcom operation.
//!
//! Builders are pure: they never touch the network, so everything they emit
//! can be asserted directly.

use crate::error::DexcomError;
use crate::models::StatRequest;
use crate::services::transport::ApiRequest;
use crate::time_utils::format_api_datetime;
use chrono::{DateTime, TimeZone};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Method;
use std::collections::HashMap;

pub const TOKEN_PATH: &str = "v1/oauth2/token";
pub const DEVICES_PATH: &str = "v1/users/self/devices";
pub const EGVS_PATH: &str = "v1/users/self/egvs";
pub const EVENTS_PATH: &str = "v1/users/self/events";
pub const STATISTICS_PATH: &str = "v1/users/self/statistics";

const PARAM_START_DATE: &str = "startDate";
const PARAM_END_DATE: &str = "endDate";

/// Credential presented to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGrant<'a> {
    AuthorizationCode(&'a str),
    RefreshToken(&'a str),
}

impl<'a> TokenGrant<'a> {
    /// Pick the grant from whichever credential is non-empty.
    ///
    /// The authorization code wins when both are given.
    pub fn from_parts(
        authorization_code: &'a str,
        refresh_token: &'a str,
    ) -> Result<Self, DexcomError> {
        if !authorization_code.is_empty() {
            Ok(TokenGrant::AuthorizationCode(authorization_code))
        } else if !refresh_token.is_empty() {
            Ok(TokenGrant::RefreshToken(refresh_token))
        } else {
            Err(DexcomError::MissingParam(
                "authorization_code or refresh_token is missing",
            ))
        }
    }

    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenGrant::AuthorizationCode(_) => "authorization_code",
            TokenGrant::RefreshToken(_) => "refresh_token",
        }
    }

    fn param(&self) -> (&'static str, &'a str) {
        match *self {
            TokenGrant::AuthorizationCode(code) => ("code", code),
            TokenGrant::RefreshToken(token) => ("refresh_token", token),
        }
    }
}

/// `POST v1/oauth2/token` with a form-encoded body.
pub fn token_request(
    client_id: &str,
    client_secret: &str,
    grant: TokenGrant<'_>,
    redirect_uri: &str,
) -> ApiRequest {
    let (credential_name, credential) = grant.param();
    let form = [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("redirect_uri", redirect_uri),
        (credential_name, credential),
        ("grant_type", grant.grant_type()),
    ];

    ApiRequest {
        method: Method::POST,
        path: TOKEN_PATH,
        query: Vec::new(),
        headers: vec![
            (CONTENT_TYPE, "application/x-www-form-urlencoded".to_string()),
            (CACHE_CONTROL, "no-cache".to_string()),
        ],
        body: Some(encode_form(&form)),
    }
}

/// Authenticated `GET` over a date window (devices, egvs, events).
pub fn date_range_request<Tz: TimeZone>(
    path: &'static str,
    access_token: &str,
    start_date: &DateTime<Tz>,
    end_date: &DateTime<Tz>,
) -> ApiRequest {
    ApiRequest {
        method: Method::GET,
        path,
        query: date_range_query(start_date, end_date),
        headers: vec![bearer(access_token)],
        body: None,
    }
}

/// `POST v1/users/self/statistics` with the grouped stat requests as JSON.
pub fn statistics_request<Tz: TimeZone>(
    access_token: &str,
    start_date: &DateTime<Tz>,
    end_date: &DateTime<Tz>,
    stat_requests: &HashMap<String, Vec<StatRequest>>,
) -> Result<ApiRequest, DexcomError> {
    let body =
        serde_json::to_string(stat_requests).map_err(|e| DexcomError::Encode(e.to_string()))?;

    Ok(ApiRequest {
        method: Method::POST,
        path: STATISTICS_PATH,
        query: date_range_query(start_date, end_date),
        headers: vec![
            bearer(access_token),
            (CONTENT_TYPE, "application/json".to_string()),
        ],
        body: Some(body),
    })
}

fn date_range_query<Tz: TimeZone>(
    start_date: &DateTime<Tz>,
    end_date: &DateTime<Tz>,
) -> Vec<(&'static str, String)> {
    vec![
        (PARAM_START_DATE, format_api_datetime(start_date)),
        (PARAM_END_DATE, format_api_datetime(end_date)),
    ]
}

fn bearer(access_token: &str) -> (reqwest::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", access_token))
}

fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
