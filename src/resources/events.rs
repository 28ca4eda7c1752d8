// ABOUTME: Event CRUD operations
// ABOUTME: List/get/create/update/delete against the events collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumEvent, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// List events, one page at a time.
///
/// With no `endpoint` the default collection at `/api/v1/events` is used;
/// pass a page's `next_uri` (or an account's `events_uri`) to walk other
/// pages.
pub async fn list_events(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumEvent>> {
    let endpoint = endpoint.map_or_else(|| client.api_url("events"), str::to_owned);
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "events")
}

/// Fetch the event at `event_uri`.
pub async fn get_event(
    client: &PodiumClient,
    token: &PodiumToken,
    event_uri: &str,
    options: &FetchOptions,
) -> Result<PodiumEvent> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, event_uri, &options.query(), headers).await?;
    request::single(value, "event")
}

/// Create an event. Times are ISO 8601 strings.
///
/// Resolves to the [`PodiumRedirect`] pointing at the new event.
pub async fn create_event(
    client: &PodiumClient,
    token: &PodiumToken,
    title: &str,
    start_time: &str,
    end_time: &str,
    venue_id: Option<&str>,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url("events");
    let mut form = vec![
        ("event[title]", title.to_owned()),
        ("event[start_time]", start_time.to_owned()),
        ("event[end_time]", end_time.to_owned()),
    ];
    if let Some(venue_id) = venue_id {
        form.push(("event[venue_id]", venue_id.to_owned()));
    }
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "event").await
}

/// Fields of an event that can be changed.
///
/// Only fields set to `Some` are sent; everything else is left untouched on
/// the server.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    /// New title.
    pub title: Option<String>,
    /// New start time, ISO 8601 format.
    pub start_time: Option<String>,
    /// New end time, ISO 8601 format.
    pub end_time: Option<String>,
    /// New venue id.
    pub venue_id: Option<String>,
}

impl EventUpdate {
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = Vec::new();
        if let Some(title) = &self.title {
            form.push(("event[title]", title.clone()));
        }
        if let Some(start_time) = &self.start_time {
            form.push(("event[start_time]", start_time.clone()));
        }
        if let Some(end_time) = &self.end_time {
            form.push(("event[end_time]", end_time.clone()));
        }
        if let Some(venue_id) = &self.venue_id {
            form.push(("event[venue_id]", venue_id.clone()));
        }
        form
    }
}

/// Update the event at `event_uri`, resolving to the raw server result and
/// the updated URI.
pub async fn update_event(
    client: &PodiumClient,
    token: &PodiumToken,
    event_uri: &str,
    update: &EventUpdate,
) -> Result<(Value, String)> {
    let headers = client.token_headers(token)?;
    request::update(client, event_uri, &update.form(), headers).await
}

/// Delete the event at `event_uri`, resolving to the deleted URI.
pub async fn delete_event(
    client: &PodiumClient,
    token: &PodiumToken,
    event_uri: &str,
) -> Result<String> {
    let headers = client.token_headers(token)?;
    request::delete(client, event_uri, headers).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_form_omits_unset_fields() {
        let update = EventUpdate {
            title: Some("new title".to_owned()),
            ..EventUpdate::default()
        };
        assert_eq!(update.form(), vec![("event[title]", "new title".to_owned())]);
        assert!(EventUpdate::default().form().is_empty());
    }
}
