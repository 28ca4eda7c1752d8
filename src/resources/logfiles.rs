// ABOUTME: Logfile operations for the telemetry upload-and-import pipeline
// ABOUTME: new_logfile reserves an upload slot, create_logfile queues the import
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumLogfile, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// Reserve an upload slot for a new logfile.
///
/// The returned record carries the `upload_url` to PUT the raw file to and
/// the `file_key` to pass to [`create_logfile`] afterwards.
pub async fn new_logfile(
    client: &PodiumClient,
    token: &PodiumToken,
    device_id: &str,
    event_id: Option<&str>,
) -> Result<PodiumLogfile> {
    let endpoint = client.api_url("logfiles/new");
    let mut query = vec![("device_id", device_id.to_owned())];
    if let Some(event_id) = event_id {
        query.push(("event_id", event_id.to_owned()));
    }
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &query, headers).await?;
    request::single(value, "logfile")
}

/// List the account's logfiles.
pub async fn list_logfiles(
    client: &PodiumClient,
    token: &PodiumToken,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumLogfile>> {
    let endpoint = client.api_url("logfiles");
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "logfiles")
}

/// Fetch the logfile at `logfile_uri`.
pub async fn get_logfile(
    client: &PodiumClient,
    token: &PodiumToken,
    logfile_uri: &str,
    options: &FetchOptions,
) -> Result<PodiumLogfile> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, logfile_uri, &options.query(), headers).await?;
    request::single(value, "logfile")
}

/// Queue the uploaded file behind `file_key` for import.
pub async fn create_logfile(
    client: &PodiumClient,
    token: &PodiumToken,
    file_key: &str,
    eventdevice_id: i64,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url("logfiles");
    let form = [
        ("logfile[file_key]", file_key.to_owned()),
        ("logfile[eventdevice_id]", eventdevice_id.to_string()),
    ];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "logfile").await
}
