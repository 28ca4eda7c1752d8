// ABOUTME: Error types for the Podium API client
// ABOUTME: Covers the failure/error/redirect outcome arms plus local fail-fast conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by Podium API operations.
///
/// The first three variants are the non-success arms of the dispatch
/// contract: an application-level `Failure` reported by the server, a
/// `Transport` error from the connection layer, and a `Redirect` received by
/// an operation that does not treat redirects as success. Everything else is
/// raised locally, before or after the network call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error("podium request failed: HTTP {status}")]
    Failure {
        /// HTTP status code reported by the server.
        status: u16,
        /// Decoded response body, or the raw text as a JSON string.
        body: Value,
    },

    /// The request never completed at the transport level.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The server redirected an operation that expects a body.
    #[error("unexpected redirect")]
    Redirect {
        /// Target of the redirect, when the server sent one.
        location: Option<String>,
    },

    /// A create operation completed without a `Location` header.
    ///
    /// Creation endpoints signal success exclusively through the redirect
    /// outcome; a plain 2xx is not a usable result.
    #[error("created resource response carried no Location header")]
    MissingLocation,

    /// The response did not contain the named resource payload.
    #[error("response was missing the `{field}` payload")]
    MissingPayload {
        /// JSON key the payload was expected under.
        field: &'static str,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {context}")]
    Decode {
        /// What was being decoded when the error occurred.
        context: &'static str,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint argument was not a valid URL.
    #[error("invalid endpoint url")]
    InvalidUrl(#[from] url::ParseError),

    /// A credential could not be encoded into a request header.
    #[error("credential is not a valid header value")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),

    /// Neither an explicit endpoint nor the ids needed to derive one were
    /// supplied to a nested-resource call.
    #[error("no endpoint or ids provided to derive one")]
    MissingEndpointOrIds,
}
