// ABOUTME: Device CRUD operations
// ABOUTME: Devices are listed through URIs handed out by accounts and events
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumDevice, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// List devices at `endpoint`, e.g. an account's `devices_uri`.
pub async fn list_devices(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumDevice>> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "devices")
}

/// Fetch the device at `device_uri`.
pub async fn get_device(
    client: &PodiumClient,
    token: &PodiumToken,
    device_uri: &str,
    options: &FetchOptions,
) -> Result<PodiumDevice> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, device_uri, &options.query(), headers).await?;
    request::single(value, "device")
}

/// Register a device, resolving to the redirect pointing at it.
pub async fn create_device(
    client: &PodiumClient,
    token: &PodiumToken,
    name: &str,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url("devices");
    let form = [("device[name]", name.to_owned())];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "device").await
}

/// Rename the device at `device_uri`.
pub async fn update_device(
    client: &PodiumClient,
    token: &PodiumToken,
    device_uri: &str,
    name: Option<&str>,
) -> Result<(Value, String)> {
    let mut form = Vec::new();
    if let Some(name) = name {
        form.push(("device[name]", name.to_owned()));
    }
    let headers = client.token_headers(token)?;
    request::update(client, device_uri, &form, headers).await
}

/// Delete the device at `device_uri`, resolving to the deleted URI.
pub async fn delete_device(
    client: &PodiumClient,
    token: &PodiumToken,
    device_uri: &str,
) -> Result<String> {
    let headers = client.token_headers(token)?;
    request::delete(client, device_uri, headers).await
}
