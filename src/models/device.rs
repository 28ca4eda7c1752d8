// ABOUTME: Device model
// ABOUTME: A RaceCapture unit registered to an account
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A telemetry device.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumDevice {
    /// Unique id for the device.
    #[serde(rename = "id")]
    pub device_id: String,
    /// Endpoint for accessing full device information.
    #[serde(rename = "URI")]
    pub uri: String,
    /// Serial RaceCapture devices use to identify themselves.
    #[serde(default)]
    pub serial: Option<String>,
    /// Name of the device.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the device is only viewable by its owner.
    #[serde(default)]
    pub private: Option<bool>,
}
