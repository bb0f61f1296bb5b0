// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics request and response for `POST /v1/users/self/statistics`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One statistic to compute over a glucose range and time window.
///
/// Sent grouped by name: `{ "<group>": [StatRequest, ...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRequest {
    pub name: String,
    /// RFC 3339 on the wire
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "egvrange")]
    pub egv_range: MinMax,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

/// Distribution summary over the requested window.
///
/// Values the API omits decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    // ─── Distribution ────────────────────────────────────────────
    pub hypoglycemia_risk: Option<String>,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub sum: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,

    // ─── Usage ───────────────────────────────────────────────────
    pub utilization_percent: f64,
    pub mean_daily_calibrations: f64,
    pub n_days: i64,
    pub n_values: i64,

    // ─── Range membership ────────────────────────────────────────
    pub n_below_range: i64,
    pub n_within_range: i64,
    pub n_above_range: i64,
    pub percent_below_range: f64,
    pub percent_within_range: f64,
    pub percent_above_range: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stat_request_wire_names() {
        let request = StatRequest {
            name: "overnight".to_string(),
            start_time: Utc.with_ymd_and_hms(2017, 6, 16, 0, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2017, 6, 16, 6, 0, 0).unwrap(),
            egv_range: MinMax {
                min: 70.0,
                max: 180.0,
            },
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["name"], "overnight");
        assert_eq!(encoded["startTime"], "2017-06-16T00:00:00Z");
        assert_eq!(encoded["endTime"], "2017-06-16T06:00:00Z");
        assert_eq!(encoded["egvrange"]["min"], 70.0);
        assert_eq!(encoded["egvrange"]["max"], 180.0);
    }

    #[test]
    fn test_statistics_counts_are_integers() {
        let json = r#"{"hypoglycemiaRisk":"minimal","min":39,"max":287,"mean":131.5,"median":121,"variance":1.5,"stdDev":1.2,"sum":597899,"q1":100,"q2":121,"q3":155,"utilizationPercent":98.8,"meanDailyCalibrations":2,"nDays":16,"nValues":4557,"nBelowRange":185,"nWithinRange":3605,"nAboveRange":767,"percentBelowRange":4.05,"percentWithinRange":79.1,"percentAboveRange":16.8}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.n_values, 4557);
        assert_eq!(stats.n_within_range, 3605);

        let fractional = json.replace(r#""nDays":16"#, r#""nDays":16.5"#);
        assert!(serde_json::from_str::<Statistics>(&fractional).is_err());
    }

    #[test]
    fn test_statistics_null_risk() {
        let json = r#"{"hypoglycemiaRisk":null,"nValues":0,"utilizationPercent":0}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.hypoglycemia_risk, None);
        assert_eq!(stats.n_values, 0);
    }

    #[test]
    fn test_statistics_absent_fields() {
        let json = r#"{"hypoglycemiaRisk":"minimal","mean":131.5,"nValues":4557}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.hypoglycemia_risk.as_deref(), Some("minimal"));
        assert_eq!(stats.mean, 131.5);
        assert_eq!(stats.n_values, 4557);
        assert_eq!(stats.q1, 0.0);
        assert_eq!(stats.n_days, 0);
    }
}
