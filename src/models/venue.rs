// ABOUTME: Venue model
// ABOUTME: A track with its map geometry and timing points
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_json::Value;

/// A racing venue.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumVenue {
    /// Venue id.
    #[serde(rename = "id")]
    pub venue_id: i64,
    /// URI for the venue.
    #[serde(rename = "URI")]
    pub uri: String,
    /// URI to events held at this venue.
    pub events_uri: String,
    /// Date the venue was updated, ISO 8601 format.
    pub updated: String,
    /// Date the venue was created, ISO 8601 format.
    pub created: String,
    /// The venue's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Centerpoint coordinates of the venue.
    #[serde(default)]
    pub centerpoint: Value,
    /// ISO country code.
    #[serde(default)]
    pub country_code: Option<String>,
    /// Track configuration name.
    #[serde(default)]
    pub configuration: Option<String>,
    /// Coordinate array describing the track map.
    #[serde(default)]
    pub track_map_array: Value,
    /// Start/finish line coordinates.
    #[serde(default)]
    pub start_finish: Value,
    /// Separate finish line coordinates, for point-to-point courses.
    #[serde(default)]
    pub finish: Value,
    /// Sector timing point coordinates.
    #[serde(default)]
    pub sector_points: Value,
    /// Track length.
    #[serde(default)]
    pub length: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_minimal_record() {
        let venue: PodiumVenue = serde_json::from_value(serde_json::json!({
            "id": 9,
            "URI": "test/venues/9",
            "events_uri": "test/venues/9/events",
            "updated": "2016-01-01T00:00:00Z",
            "created": "2015-01-01T00:00:00Z",
            "name": "Test Ring",
        }))
        .unwrap();
        assert_eq!(venue.venue_id, 9);
        assert_eq!(venue.name.as_deref(), Some("Test Ring"));
        assert!(venue.track_map_array.is_null());
        assert_eq!(venue.length, None);
    }
}
