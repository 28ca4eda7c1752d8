// ABOUTME: Login operation against the OAuth token endpoint
// ABOUTME: Exchanges user credentials for a session token using the application header
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use reqwest::Method;
use tracing::debug;

use crate::client::PodiumClient;
use crate::errors::{Error, Result};
use crate::models::PodiumToken;
use crate::request;

/// Log a user in with the password grant.
///
/// POSTs to `/oauth/token` with the application-credential header; every
/// other operation takes the returned [`PodiumToken`]. There is no refresh
/// handling: when a token stops working, log in again.
pub async fn login(client: &PodiumClient, username: &str, password: &str) -> Result<PodiumToken> {
    let endpoint = format!("{}/oauth/token", client.config().base_url);
    let form = [
        ("grant_type", "password".to_owned()),
        ("username", username.to_owned()),
        ("password", password.to_owned()),
    ];
    let headers = client.app_headers()?;
    let outcome =
        request::dispatch(client, Method::POST, &endpoint, &[], Some(&form), headers).await?;
    let value = outcome.into_success()?;
    let token: PodiumToken = serde_json::from_value(value).map_err(|source| Error::Decode {
        context: "token",
        source,
    })?;
    debug!(token_type = %token.token_type, "logged in");
    Ok(token)
}
