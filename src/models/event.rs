// ABOUTME: Event model
// ABOUTME: A timed occasion devices record telemetry at, usually tied to a venue
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A Podium event.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumEvent {
    /// Unique id for the event.
    #[serde(rename = "id")]
    pub event_id: String,
    /// Endpoint for accessing full event information.
    #[serde(rename = "URI")]
    pub uri: String,
    /// Endpoint for the devices that attended the event.
    #[serde(default)]
    pub devices_uri: Option<String>,
    /// Title of the event.
    #[serde(default)]
    pub title: Option<String>,
    /// Start time, ISO 8601 format.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time, ISO 8601 format.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Endpoint for the event's venue.
    #[serde(default)]
    pub venue_uri: Option<String>,
    /// Whether the event is only viewable by its creator.
    #[serde(default)]
    pub private: Option<bool>,
    /// Endpoint for the event's owning user.
    #[serde(default)]
    pub user_uri: Option<String>,
    /// Avatar URL of the owning user.
    #[serde(default)]
    pub user_avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_server_record_with_renames() {
        let event: PodiumEvent = serde_json::from_value(serde_json::json!({
            "id": "test",
            "URI": "test/events/test",
            "devices_uri": "test/devices",
            "title": "test title",
            "start_time": "test_time",
            "end_time": "test_end",
            "venue_uri": "test/venue",
            "private": false,
        }))
        .unwrap();
        assert_eq!(event.event_id, "test");
        assert_eq!(event.uri, "test/events/test");
        assert_eq!(event.title.as_deref(), Some("test title"));
        assert_eq!(event.private, Some(false));
        assert_eq!(event.user_uri, None);
    }
}
