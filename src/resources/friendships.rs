// ABOUTME: Friendship operations
// ABOUTME: The list endpoint pages users, not friendship records
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumFriendship, PodiumRedirect, PodiumToken, PodiumUser};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// Fetch the friendship at `endpoint`, e.g. a user's `friendship_uri`.
pub async fn get_friendship(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumFriendship> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "friendship")
}

/// List the users behind a friendships or followers endpoint.
///
/// The server pages the related users themselves under `users`, not the
/// friendship records.
pub async fn list_friendships(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumUser>> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    PagedResponse::from_value(value, "users")
}

/// Follow the user with id `friend_id`.
pub async fn create_friendship(
    client: &PodiumClient,
    token: &PodiumToken,
    friend_id: i64,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url("friendships");
    let form = [("friendship[user_id]", friend_id.to_string())];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "friendship").await
}

/// Unfollow by deleting the friendship at `friendship_uri`, resolving to
/// the deleted URI.
pub async fn delete_friendship(
    client: &PodiumClient,
    token: &PodiumToken,
    friendship_uri: &str,
) -> Result<String> {
    let headers = client.token_headers(token)?;
    request::delete(client, friendship_uri, headers).await
}
