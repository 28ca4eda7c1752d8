// ABOUTME: Rating creation for rateable resources
// ABOUTME: The endpoint is derived from the rateable type and id
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumRedirect, PodiumToken};
use crate::request;

/// Rate a rateable resource, e.g. `create_rating(.., "presets", "7", 5, None)`.
///
/// An optional `report` flags the resource for review alongside the rating.
pub async fn create_rating(
    client: &PodiumClient,
    token: &PodiumToken,
    rateable_type: &str,
    rateable_id: &str,
    rating: i64,
    report: Option<&str>,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url(&format!(
        "{}/{rateable_id}/ratings",
        rateable_type.to_lowercase()
    ));
    let mut form = vec![("rating[rating]", rating.to_string())];
    if let Some(report) = report {
        form.push(("rating[report]", report.to_owned()));
    }
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "rating").await
}
