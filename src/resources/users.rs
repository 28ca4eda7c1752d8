// ABOUTME: User profile lookup
// ABOUTME: Users are reached through URIs other resources hand out
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumToken, PodiumUser};
use crate::request::{self, FetchOptions};

/// Fetch the user found at `endpoint`.
///
/// The endpoint is typically a `user_uri` taken from an account, event, or
/// friendship record.
pub async fn get_user(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumUser> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "user")
}
