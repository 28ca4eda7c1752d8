// ABOUTME: Paged response wrapper and list-query options for collection endpoints
// ABOUTME: Parses the {name: [...], total, nextURI, prevURI} envelope and clamps per_page
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Error, Result};

/// Largest page size the server accepts; bigger requests are clamped.
pub const MAX_PER_PAGE: u32 = 100;

/// One page of a list endpoint's results.
///
/// Callers wanting more than one page reissue the same list call against
/// [`next_uri`](Self::next_uri) until it comes back `None`; the library does
/// no pagination on its own.
#[derive(Debug, Clone)]
pub struct PagedResponse<T> {
    /// The decoded items for this page.
    pub payload: Vec<T>,
    /// Total number of matching items on the server.
    pub total: u64,
    /// URI of the next page, absent on the last page.
    pub next_uri: Option<String>,
    /// URI of the previous page, absent on the first page.
    pub prev_uri: Option<String>,
    /// JSON key the payload was read from, mirroring the web API.
    pub payload_name: &'static str,
}

impl<T> PagedResponse<T> {
    /// Number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether this page came back empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl<T: DeserializeOwned> PagedResponse<T> {
    /// Parse a paged envelope, reading the item array from `payload_name`.
    pub(crate) fn from_value(mut value: Value, payload_name: &'static str) -> Result<Self> {
        let items = match value.get_mut(payload_name).map(Value::take) {
            None | Some(Value::Null) => return Err(Error::MissingPayload { field: payload_name }),
            Some(items) => items,
        };
        let payload: Vec<T> = serde_json::from_value(items).map_err(|source| Error::Decode {
            context: payload_name,
            source,
        })?;
        let total = value
            .get("total")
            .and_then(Value::as_u64)
            .ok_or(Error::MissingPayload { field: "total" })?;
        Ok(Self {
            payload,
            total,
            next_uri: take_uri(&mut value, "nextURI"),
            prev_uri: take_uri(&mut value, "prevURI"),
            payload_name,
        })
    }
}

fn take_uri(value: &mut Value, key: &str) -> Option<String> {
    match value.get_mut(key).map(Value::take) {
        Some(Value::String(uri)) => Some(uri),
        _ => None,
    }
}

/// Paging window and query flags for list operations.
///
/// As with [`FetchOptions`](crate::request::FetchOptions), `None` omits a
/// parameter from the request.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Zero-based index of the first item to return.
    pub start: Option<u32>,
    /// Page size; values above [`MAX_PER_PAGE`] are silently clamped.
    pub per_page: Option<u32>,
    /// Expand nested objects in the response.
    pub expand: Option<bool>,
    /// Suppress the HTML endpoint description in the server's layout.
    pub quiet: Option<bool>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            start: None,
            per_page: None,
            expand: Some(true),
            quiet: None,
        }
    }
}

impl ListOptions {
    /// Options selecting a window without touching the default flags.
    #[must_use]
    pub fn window(start: u32, per_page: u32) -> Self {
        Self {
            start: Some(start),
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(expand) = self.expand {
            query.push(("expand", expand.to_string()));
        }
        if let Some(quiet) = self.quiet {
            query.push(("quiet", quiet.to_string()));
        }
        if let Some(start) = self.start {
            query.push(("start", start.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.min(MAX_PER_PAGE).to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn per_page_is_clamped_to_the_server_maximum() {
        let query = ListOptions::window(0, 150).query();
        assert!(query.contains(&("per_page", "100".to_owned())));
        assert!(query.contains(&("start", "0".to_owned())));
    }

    #[test]
    fn per_page_below_the_cap_is_untouched() {
        let query = ListOptions::window(20, 20).query();
        assert!(query.contains(&("per_page", "20".to_owned())));
    }

    #[test]
    fn paged_envelope_parses_items_and_cursors() {
        let value = json!({
            "events": [{"id": "1", "URI": "test/events/1"}],
            "total": 7,
            "nextURI": "test/events?start=1",
        });
        let page: PagedResponse<Value> = PagedResponse::from_value(value, "events").unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.total, 7);
        assert_eq!(page.next_uri.as_deref(), Some("test/events?start=1"));
        assert_eq!(page.prev_uri, None);
        assert_eq!(page.payload_name, "events");
    }

    #[test]
    fn missing_payload_key_is_reported() {
        let value = json!({ "total": 0 });
        let page: Result<PagedResponse<Value>> = PagedResponse::from_value(value, "events");
        assert!(matches!(page, Err(Error::MissingPayload { field: "events" })));
    }
}
