// ABOUTME: Alert message operations
// ABOUTME: Nested under an event's device; list/create derive that endpoint from ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::{Error, Result};
use crate::models::{PodiumAlertMessage, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// Fetch the alert message at `endpoint`.
pub async fn get_alertmessage(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumAlertMessage> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "alertmessage")
}

/// List the alert messages for a device at an event.
///
/// Provide either an explicit `endpoint` or both ids to derive
/// `/api/v1/events/{event}/devices/{device}/alertmessages`; anything less
/// fails fast with [`Error::MissingEndpointOrIds`] before any request.
pub async fn list_alertmessages(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: Option<&str>,
    device_id: Option<&str>,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumAlertMessage>> {
    let endpoint = match (endpoint, event_id, device_id) {
        (Some(endpoint), _, _) => endpoint.to_owned(),
        (None, Some(event_id), Some(device_id)) => {
            client.api_url(&format!("events/{event_id}/devices/{device_id}/alertmessages"))
        }
        _ => return Err(Error::MissingEndpointOrIds),
    };
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "alertmessages")
}

/// Send an alert message to a device at an event.
pub async fn create_alertmessage(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: &str,
    device_id: &str,
    message: &str,
    priority: i64,
) -> Result<PodiumRedirect> {
    let endpoint =
        client.api_url(&format!("events/{event_id}/devices/{device_id}/alertmessages"));
    let form = [
        ("alertmessage[message]", message.to_owned()),
        ("alertmessage[priority]", priority.to_string()),
    ];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "alertmessage").await
}
