// ABOUTME: Lap model
// ABOUTME: One timed lap with its channel aggregates and raw-data pointer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_json::Value;

/// A recorded lap.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumLap {
    /// Endpoint for accessing the lap.
    #[serde(rename = "URI")]
    pub uri: String,
    /// URI for the logged raw data.
    pub raw_data_uri: String,
    /// Number of the lap within its session.
    pub lap_number: i64,
    /// Time the lap ended.
    pub end_time: String,
    /// Min/max/avg values per channel.
    #[serde(default)]
    pub aggregates: Value,
    /// Lap time in minutes.
    pub lap_time: f64,
}
