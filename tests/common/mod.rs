// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use dexcom_client::services::{ApiRequest, ApiResponse, Transport, TransportError};
use dexcom_client::time_utils::FixedClock;
use dexcom_client::{DexcomClient, DexcomConfig};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub const CLIENT_ID: &str = "123";
#[allow(dead_code)]
pub const CLIENT_SECRET: &str = "abc";

/// Transport double that records every request and replays canned results.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no canned response".to_string())))
    }
}

#[allow(dead_code)]
pub fn test_config() -> DexcomConfig {
    DexcomConfig::new(CLIENT_ID, CLIENT_SECRET)
}

/// Instant used by the fixed clock in [`test_client`].
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 6, 16, 15, 40, 0).unwrap()
}

/// Client over `transport` with a clock pinned to [`fixed_now`].
#[allow(dead_code)]
pub fn test_client(transport: RecordingTransport) -> DexcomClient<RecordingTransport> {
    DexcomClient::with_transport(test_config(), transport)
        .with_clock(Arc::new(FixedClock(fixed_now())))
}

/// Client over the real reqwest transport pointed at `base_url`.
#[allow(dead_code)]
pub fn http_client(base_url: &str, timeout: std::time::Duration) -> DexcomClient {
    let transport = dexcom_client::services::ReqwestTransport::new(base_url, timeout)
        .expect("Failed to build transport");
    DexcomClient::with_transport(test_config().with_timeout(timeout), transport)
}

#[allow(dead_code)]
pub const TOKEN_BODY: &str = r#"{"access_token":"access", "expires_in":600, "token_type":"Bearer", "refresh_token":"refresh"}"#;

#[allow(dead_code)]
pub const DEVICES_BODY: &str = r#"{"devices": [{"model": "G5 Mobile App","lastUploadDate": "2016-08-15T00:00:00","alertSettings": [{"alertName": "high","value": 200,"unit": "mg/dL","snooze": 30,"delay": 0,"enabled": true,"systemTime": "2016-08-15T00:00:00","displayTime": "2016-08-15T00:00:00"}]}]}"#;

#[allow(dead_code)]
pub const EGVS_BODY: &str = r#"{"unit": "mg/dL","rateUnit": "mg/dL/min","egvs": [{"systemTime": "2017-06-16T15:40:00","displayTime": "2017-06-16T07:40:00","value": 119,"status": null,"trend": "fortyFiveDown","trendRate": -1.3}]}"#;

#[allow(dead_code)]
pub const EVENTS_BODY: &str = r#"{"events": [{"systemTime": "2017-06-16T19:45:00","displayTime": "2017-06-16T11:45:00","eventType": "exercise","eventSubType": "medium","value": 42,"unit": "minutes"}]}"#;

#[allow(dead_code)]
pub const STATISTICS_BODY: &str = r#"{"hypoglycemiaRisk": "minimal","min": 39,"max": 287,"mean": 131.20452051788453,"median": 121,"variance": 1836.660387728187,"stdDev": 42.85627594329898,"sum": 597899,"q1": 100,"q2": 121,"q3": 155,"utilizationPercent": 98.89322916666666,"meanDailyCalibrations": 2,"nDays": 16,"nValues": 4557,"nBelowRange": 185,"nWithinRange": 3605,"nAboveRange": 767,"percentBelowRange": 4.0596883914856265,"percentWithinRange": 79.10906298003071,"percentAboveRange": 16.831248628483653}"#;
