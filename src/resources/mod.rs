// ABOUTME: Resource modules, one per Podium API resource type
// ABOUTME: Each composes the dispatcher and header builders into typed operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-resource API operations.
//!
//! Every module follows the same shape: build the endpoint URL and form
//! body, dispatch one request, and map the response. Get-one operations
//! resolve to the entity, lists to a [`PagedResponse`], creates to a
//! [`PodiumRedirect`] (the redirect outcome is the only success path),
//! updates to `(raw result, updated_uri)`, and deletes to the deleted URI.
//!
//! [`PagedResponse`]: crate::pagination::PagedResponse
//! [`PodiumRedirect`]: crate::models::PodiumRedirect

/// Account lookup for the authenticated user.
pub mod account;
/// Alert messages for a device at an event.
pub mod alertmessages;
/// Login against the OAuth token endpoint.
pub mod auth;
/// Device registration and lookup.
pub mod devices;
/// Devices attached to events, plus live streams.
pub mod eventdevices;
/// Event CRUD.
pub mod events;
/// Follow relationships between users.
pub mod friendships;
/// Recorded laps.
pub mod laps;
/// Telemetry logfile upload and import.
pub mod logfiles;
/// Shareable configuration presets.
pub mod presets;
/// Timing-and-scoring race statistics.
pub mod racestats;
/// Ratings on rateable resources.
pub mod ratings;
/// User profiles.
pub mod users;
/// Venues and their track data.
pub mod venues;
