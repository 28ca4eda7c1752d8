// ABOUTME: Event-device operations, including the live streams listing
// ABOUTME: Nested under events; the list endpoint is derived from an event id
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

use crate::client::PodiumClient;
use crate::errors::{Error, Result};
use crate::models::{PodiumEventDevice, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// List the devices attached to an event.
///
/// Provide either an explicit `endpoint` or the `event_id` to derive
/// `/api/v1/events/{id}/devices` from; with neither this fails fast with
/// [`Error::MissingEndpointOrIds`] before any request is made.
pub async fn list_eventdevices(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: Option<&str>,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumEventDevice>> {
    let endpoint = match (endpoint, event_id) {
        (Some(endpoint), _) => endpoint.to_owned(),
        (None, Some(event_id)) => client.api_url(&format!("events/{event_id}/devices")),
        (None, None) => return Err(Error::MissingEndpointOrIds),
    };
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "eventdevices")
}

/// List event-devices currently streaming live telemetry.
///
/// Defaults to `/api/v1/livestreams`.
pub async fn list_livestreams(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumEventDevice>> {
    let endpoint = endpoint.map_or_else(|| client.api_url("livestreams"), str::to_owned);
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "eventdevices")
}

/// Fetch the event-device at `eventdevice_uri`.
pub async fn get_eventdevice(
    client: &PodiumClient,
    token: &PodiumToken,
    eventdevice_uri: &str,
    options: &FetchOptions,
) -> Result<PodiumEventDevice> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, eventdevice_uri, &options.query(), headers).await?;
    request::single(value, "eventdevice")
}

/// Attach a device to an event under the given name.
pub async fn create_eventdevice(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: &str,
    device_id: &str,
    name: &str,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url(&format!("events/{event_id}/devices"));
    let form = [
        ("eventdevice[device_id]", device_id.to_owned()),
        ("eventdevice[name]", name.to_owned()),
    ];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "eventdevice").await
}

/// Rename the event-device at `eventdevice_uri`.
pub async fn update_eventdevice(
    client: &PodiumClient,
    token: &PodiumToken,
    eventdevice_uri: &str,
    name: Option<&str>,
) -> Result<(Value, String)> {
    let mut form = Vec::new();
    if let Some(name) = name {
        form.push(("eventdevice[name]", name.to_owned()));
    }
    let headers = client.token_headers(token)?;
    request::update(client, eventdevice_uri, &form, headers).await
}

/// Detach the event-device at `eventdevice_uri`, resolving to the deleted
/// URI.
pub async fn delete_eventdevice(
    client: &PodiumClient,
    token: &PodiumToken,
    eventdevice_uri: &str,
) -> Result<String> {
    let headers = client.token_headers(token)?;
    request::delete(client, eventdevice_uri, headers).await
}
