// ABOUTME: Rating model
// ABOUTME: A user-submitted score for a rateable resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A rating attached to a rateable resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumRating {
    /// The score given.
    pub rating: f64,
}
