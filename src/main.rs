// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dexcom glucose fetcher
//!
//! Refreshes a user's token and prints the last 24 hours of glucose readings
//! as JSON. Driven entirely by environment variables (see `DexcomConfig`),
//! plus `DEXCOM_REFRESH_TOKEN` and `DEXCOM_REDIRECT_URI`.

use anyhow::Context;
use chrono::{Duration, Utc};
use dexcom_client::{DexcomClient, DexcomConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = DexcomConfig::from_env().context("Failed to load configuration")?;
    let refresh_token =
        std::env::var("DEXCOM_REFRESH_TOKEN").context("DEXCOM_REFRESH_TOKEN is not set")?;
    let redirect_uri =
        std::env::var("DEXCOM_REDIRECT_URI").context("DEXCOM_REDIRECT_URI is not set")?;

    let client = DexcomClient::new(config).context("Failed to build Dexcom client")?;

    let token = client
        .refresh_user(refresh_token.trim(), &redirect_uri)
        .await
        .context("Token refresh failed")?;

    // The old refresh token is now spent.
    tracing::warn!(
        refresh_token = %token.refresh_token,
        "Store this refresh token in DEXCOM_REFRESH_TOKEN for the next run"
    );

    let end = Utc::now();
    let start = end - Duration::hours(24);
    let readings = client
        .get_glucose_readings(&token.access_token, &start, &end)
        .await
        .context("Fetching glucose readings failed")?;

    tracing::info!(count = readings.egvs.len(), "Fetched glucose readings");
    println!("{}", serde_json::to_string_pretty(&readings)?);

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("dexcom_client=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();

    Ok(())
}
