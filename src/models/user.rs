// ABOUTME: User profile model
// ABOUTME: Public profile with social cross-reference URIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_json::Value;

/// A Podium user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumUser {
    /// User id.
    #[serde(rename = "id")]
    pub user_id: i64,
    /// URI for this user.
    #[serde(rename = "URI")]
    pub uri: String,
    /// The user's username.
    pub username: String,
    /// The user's profile description.
    pub description: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile image URL.
    pub profile_image_url: Option<String>,
    /// Third-party links for the user.
    #[serde(default)]
    pub links: Value,
    /// URI to the user's friends list.
    pub friendships_uri: String,
    /// URI to the user's followers list.
    pub followers_uri: String,
    /// Present when the requesting user has friended this user.
    #[serde(default)]
    pub friendship_uri: Option<String>,
    /// URI to events for this user.
    pub events_uri: String,
    /// URI to venues this user participated at.
    pub venues_uri: String,
}
