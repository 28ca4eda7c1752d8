// ABOUTME: Redirect model returned by creation endpoints
// ABOUTME: Wraps the Location header a "created at this location" response points to
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// The "resource created at this location" result of a create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodiumRedirect {
    /// URI of the newly created object.
    pub location: String,
    /// Type of object created, e.g. `event`, `device`, `eventdevice`.
    pub object_type: &'static str,
}

impl PodiumRedirect {
    pub(crate) fn new(location: String, object_type: &'static str) -> Self {
        Self {
            location,
            object_type,
        }
    }
}
