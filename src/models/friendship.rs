// ABOUTME: Friendship model
// ABOUTME: A follow relationship between two users
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A friendship between two users.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumFriendship {
    /// Id of the friendship.
    #[serde(rename = "id")]
    pub friendship_id: i64,
    /// Id of the user following the friend.
    pub user_id: i64,
    /// URI to the user following the friend.
    pub user_uri: String,
    /// Id of the user being followed.
    pub friend_id: i64,
    /// URI to the user being followed.
    pub friend_uri: String,
}
