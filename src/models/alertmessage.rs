// ABOUTME: Alert message model
// ABOUTME: A prioritized pit-to-car message tied to a device at an event
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// An alert message.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumAlertMessage {
    /// Id of the alert message.
    #[serde(rename = "id")]
    pub alertmessage_id: i64,
    /// URI for this alert message.
    #[serde(rename = "URI")]
    pub uri: String,
    /// Time the message was sent, ISO 8601 format.
    pub send_time: String,
    /// Time the message was acknowledged, ISO 8601 format.
    #[serde(default)]
    pub ack_time: Option<String>,
    /// Message text of the alert.
    pub message: String,
    /// Priority level of the message.
    pub priority: i64,
    /// Id of the sender.
    pub sender_id: i64,
    /// URI of the event-device this message belongs to.
    pub eventdevice_uri: String,
    /// URI of the device this message belongs to.
    pub device_uri: String,
    /// URI of the user this message belongs to.
    pub user_uri: String,
}
