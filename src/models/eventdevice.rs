// ABOUTME: Event-device model
// ABOUTME: One device's participation in one event, including its data channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_json::Value;

/// A device at an event.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumEventDevice {
    /// Unique id for this device at this event.
    #[serde(rename = "id")]
    pub eventdevice_id: String,
    /// URI for this device at this event.
    #[serde(rename = "URI")]
    pub uri: String,
    /// Channels of data recorded: sensors or other sources.
    #[serde(default)]
    pub channels: Value,
    /// Name at this event; not always the device's own name.
    #[serde(default)]
    pub name: Option<String>,
    /// URI of the underlying device.
    #[serde(default)]
    pub device_uri: Option<String>,
    /// URI of the lap data.
    #[serde(default)]
    pub laps_uri: Option<String>,
}
