// ABOUTME: Account operation for the authenticated user
// ABOUTME: Fetches the account record the session token belongs to
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumAccount, PodiumToken};
use crate::request::{self, FetchOptions};

/// Fetch the account for the session token.
///
/// Hits `/api/v1/account`. Unlike most lookups the server defaults this one
/// to `expand=false`; pass [`FetchOptions::collapsed`] to match.
pub async fn get_account(
    client: &PodiumClient,
    token: &PodiumToken,
    options: &FetchOptions,
) -> Result<PodiumAccount> {
    let endpoint = client.api_url("account");
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &options.query(), headers).await?;
    request::single(value, "account")
}
