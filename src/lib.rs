// ABOUTME: Async client library for the Podium motorsports telemetry REST API
// ABOUTME: Request dispatch, auth headers, typed models, and per-resource operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # podium-client
//!
//! Async client for the [Podium](https://podium.live) motorsports telemetry
//! REST API: accounts, events, devices, laps, presets, race statistics,
//! alert messages, and the rest of the `/api/v1` surface.
//!
//! Construct a [`PodiumClient`] once, log in to obtain a [`PodiumToken`],
//! and pass both to the operations under [`resources`]:
//!
//! ```no_run
//! use podium_client::resources::{auth, events};
//! use podium_client::{ListOptions, PodiumClient, PodiumConfig};
//!
//! # async fn run() -> podium_client::Result<()> {
//! let client = PodiumClient::new(PodiumConfig::new("app-id", "app-secret"))?;
//! let token = auth::login(&client, "driver@example.com", "hunter2").await?;
//!
//! let mut page = events::list_events(&client, &token, None, &ListOptions::default()).await?;
//! while let Some(next) = page.next_uri.take() {
//!     page = events::list_events(&client, &token, Some(&next), &ListOptions::default()).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every operation issues exactly one HTTP request and resolves to a
//! [`Result`]: server-reported failures, transport errors, and unexpected
//! redirects each surface as their own [`Error`] variant, and creation
//! endpoints succeed only through the redirect that locates the new
//! resource. The library performs no retries, token persistence, or
//! auto-pagination; those policies belong to the caller.

/// Client configuration, construction, and auth header building
pub mod client;
/// Error and result types
pub mod errors;
/// Entity models mapped from server JSON records
pub mod models;
/// Paged responses and list-query options
pub mod pagination;
/// The request dispatcher and shared fetch options
pub mod request;
/// Per-resource API operations
pub mod resources;

pub use client::{PodiumClient, PodiumConfig, ProgressFn, DEFAULT_BASE_URL};
pub use errors::{Error, Result};
pub use models::{
    PodiumAccount, PodiumAlertMessage, PodiumDevice, PodiumEvent, PodiumEventDevice,
    PodiumFriendship, PodiumLap, PodiumLogfile, PodiumPreset, PodiumRacestat, PodiumRating,
    PodiumRedirect, PodiumToken, PodiumUser, PodiumVenue,
};
pub use pagination::{ListOptions, PagedResponse, MAX_PER_PAGE};
pub use request::FetchOptions;
