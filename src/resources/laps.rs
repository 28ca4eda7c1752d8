// ABOUTME: Lap lookups
// ABOUTME: Read-only; laps come from imported telemetry, reached via laps_uri
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumLap, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// Fetch the lap at `endpoint`.
pub async fn get_lap(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumLap> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "lap")
}

/// List laps at `endpoint`, e.g. an event-device's `laps_uri`.
pub async fn list_laps(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumLap>> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "laps")
}
