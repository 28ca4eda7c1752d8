// ABOUTME: Venue lookups
// ABOUTME: Read-only; venues are maintained server-side and referenced by events
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumToken, PodiumVenue};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// Fetch the venue at `endpoint`, e.g. an event's `venue_uri`.
pub async fn get_venue(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumVenue> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "venue")
}

/// List venues. Defaults to `/api/v1/venues`; pass a user's `venues_uri`
/// or a page's `next_uri` to walk a narrower collection.
pub async fn list_venues(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumVenue>> {
    let endpoint = endpoint.map_or_else(|| client.api_url("venues"), str::to_owned);
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "venues")
}
