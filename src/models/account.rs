// ABOUTME: Account model for the authenticated user
// ABOUTME: Carries the cross-reference URIs the rest of the API is navigated from
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// The authenticated user's account.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumAccount {
    /// Unique id for the account.
    #[serde(rename = "id")]
    pub account_id: String,
    /// The user's username.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// URI to the account's devices.
    pub devices_uri: String,
    /// URI to the account's telemetry exports.
    pub exports_uri: String,
    /// URI to the account's current live streams.
    pub streams_uri: String,
    /// URI to the user associated with this account.
    pub user_uri: String,
    /// URI to the account's events.
    pub events_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_server_record() {
        let account: PodiumAccount = serde_json::from_value(serde_json::json!({
            "id": "test",
            "username": "driver",
            "email": "driver@example.com",
            "devices_uri": "test/devices",
            "exports_uri": "test/exports",
            "streams_uri": "test/streams",
            "user_uri": "test/user",
            "events_uri": "test/events",
        }))
        .unwrap();
        assert_eq!(account.account_id, "test");
        assert_eq!(account.username, "driver");
        assert_eq!(account.events_uri, "test/events");
    }
}
