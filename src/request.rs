// ABOUTME: Request dispatcher shared by every resource operation
// ABOUTME: Normalizes HTTP completion into the success/failure/error/redirect contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures_util::StreamExt;
use reqwest::header::LOCATION;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::client::{PodiumClient, ProgressFn};
use crate::errors::{Error, Result};
use crate::models::PodiumRedirect;

/// Typed `None` for bodiless dispatch calls.
const NO_FORM: Option<&[(&'static str, String)]> = None;

/// Query flags shared by get-one operations.
///
/// `None` is the omit sentinel: the parameter is left off the request
/// entirely. Anything else is sent as `true`/`false`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Expand nested objects in the response.
    pub expand: Option<bool>,
    /// Suppress the HTML endpoint description in the server's layout.
    pub quiet: Option<bool>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            expand: Some(true),
            quiet: None,
        }
    }
}

impl FetchOptions {
    /// Options with `expand=false`, the default for account and race-stat
    /// lookups.
    #[must_use]
    pub fn collapsed() -> Self {
        Self {
            expand: Some(false),
            quiet: None,
        }
    }

    /// Options that omit every flag.
    #[must_use]
    pub fn omitted() -> Self {
        Self {
            expand: None,
            quiet: None,
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
        query
    }
}

/// Terminal outcome of a dispatched request, before resource-specific
/// interpretation. Failure and transport errors have already been folded
/// into `Err` by the time a `Dispatch` exists.
#[derive(Debug)]
pub(crate) enum Dispatch {
    /// 2xx response with its decoded JSON body (null when empty).
    Success(Value),
    /// 3xx response and the `Location` header it carried, if any.
    Redirect { location: Option<String> },
}

impl Dispatch {
    /// Interpret the outcome for an operation that expects a body.
    pub(crate) fn into_success(self) -> Result<Value> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Redirect { location } => Err(Error::Redirect { location }),
        }
    }

    /// Interpret the outcome for a create operation, where only a redirect
    /// with a location counts as success.
    pub(crate) fn into_location(self) -> Result<String> {
        match self {
            Self::Redirect {
                location: Some(location),
            } => Ok(location),
            Self::Redirect { location: None } | Self::Success(_) => Err(Error::MissingLocation),
        }
    }
}

/// Issue one HTTP request and normalize its completion.
///
/// `query` pairs are merged into any query string already present on the
/// endpoint. A form body, when given, is sent URL-encoded. The response body
/// streams through the client's progress hook before decoding.
pub(crate) async fn dispatch<F>(
    client: &PodiumClient,
    method: Method,
    endpoint: &str,
    query: &[(&'static str, String)],
    form: Option<&F>,
    headers: reqwest::header::HeaderMap,
) -> Result<Dispatch>
where
    F: serde::Serialize + ?Sized,
{
    let url = merge_query(endpoint, query)?;
    debug!(%method, %url, "dispatching podium request");

    let mut request = client.http().request(method, url).headers(headers);
    if let Some(fields) = form {
        request = request.form(fields);
    }

    let response = request.send().await?;
    let status = response.status();

    if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        debug!(%status, ?location, "podium redirect");
        return Ok(Dispatch::Redirect { location });
    }

    let body = collect_body(response, client.progress()).await?;
    let decoded: std::result::Result<Value, _> = if body.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(&body)
    };

    if !status.is_success() {
        warn!(%status, "podium request failed");
        let body = decoded
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
        return Err(Error::Failure {
            status: status.as_u16(),
            body,
        });
    }

    let value = decoded.map_err(|source| Error::Decode {
        context: "response body",
        source,
    })?;
    Ok(Dispatch::Success(value))
}

/// Extract and decode the single named payload of a get-one response.
///
/// A missing or null payload is an error; the server reports lookups that
/// matched nothing this way even with a 2xx status.
pub(crate) fn single<T: DeserializeOwned>(mut value: Value, field: &'static str) -> Result<T> {
    match value.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => Err(Error::MissingPayload { field }),
        Some(payload) => serde_json::from_value(payload).map_err(|source| Error::Decode {
            context: field,
            source,
        }),
    }
}

/// Run a GET and hand back the decoded body.
pub(crate) async fn fetch(
    client: &PodiumClient,
    endpoint: &str,
    query: &[(&'static str, String)],
    headers: reqwest::header::HeaderMap,
) -> Result<Value> {
    let outcome = dispatch(client, Method::GET, endpoint, query, NO_FORM, headers).await?;
    outcome.into_success()
}

/// Run a create operation: POST the form and convert the redirect into a
/// [`PodiumRedirect`] tagged with the resource type.
pub(crate) async fn create(
    client: &PodiumClient,
    endpoint: &str,
    form: &[(&'static str, String)],
    headers: reqwest::header::HeaderMap,
    object_type: &'static str,
) -> Result<PodiumRedirect> {
    let outcome = dispatch(client, Method::POST, endpoint, &[], Some(form), headers).await?;
    let location = outcome.into_location()?;
    Ok(PodiumRedirect::new(location, object_type))
}

/// [`create`] for form bodies whose keys are built at runtime, e.g. the
/// indexed racestat batch fields.
pub(crate) async fn create_owned(
    client: &PodiumClient,
    endpoint: &str,
    form: &[(String, String)],
    headers: reqwest::header::HeaderMap,
    object_type: &'static str,
) -> Result<PodiumRedirect> {
    let outcome = dispatch(client, Method::POST, endpoint, &[], Some(form), headers).await?;
    let location = outcome.into_location()?;
    Ok(PodiumRedirect::new(location, object_type))
}

/// Run an update operation: PUT the supplied fields and hand back the raw
/// server result together with the updated URI.
pub(crate) async fn update(
    client: &PodiumClient,
    uri: &str,
    form: &[(&'static str, String)],
    headers: reqwest::header::HeaderMap,
) -> Result<(Value, String)> {
    let outcome = dispatch(client, Method::PUT, uri, &[], Some(form), headers).await?;
    Ok((outcome.into_success()?, uri.to_owned()))
}

/// Run a delete operation, resolving to the URI that was deleted rather
/// than the server's response body.
pub(crate) async fn delete(
    client: &PodiumClient,
    uri: &str,
    headers: reqwest::header::HeaderMap,
) -> Result<String> {
    let outcome = dispatch(client, Method::DELETE, uri, &[], NO_FORM, headers).await?;
    outcome.into_success()?;
    Ok(uri.to_owned())
}

async fn collect_body(response: Response, progress: Option<&ProgressFn>) -> Result<Vec<u8>> {
    let total = response.content_length();
    let mut stream = response.bytes_stream();
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        if let Some(hook) = progress {
            hook(body.len() as u64, total);
        }
    }
    Ok(body)
}

fn merge_query(endpoint: &str, query: &[(&'static str, String)]) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
        drop(pairs);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_query_appends_to_existing_query() {
        let url = merge_query(
            "https://podium.live/api/v1/events?start=20",
            &[("per_page", "10".to_owned())],
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://podium.live/api/v1/events?start=20&per_page=10");
    }

    #[test]
    fn merge_query_leaves_bare_endpoint_untouched() {
        let url = merge_query("https://podium.live/api/v1/events", &[]).unwrap();
        assert_eq!(url.as_str(), "https://podium.live/api/v1/events");
    }

    #[test]
    fn merge_query_rejects_relative_endpoints() {
        assert!(matches!(
            merge_query("api/v1/events", &[]),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn fetch_options_honor_the_omit_sentinel() {
        assert_eq!(
            FetchOptions::default().query(),
            vec![("expand", "true".to_owned())]
        );
        assert!(FetchOptions::omitted().query().is_empty());
        let noisy = FetchOptions {
            expand: Some(false),
            quiet: Some(true),
        };
        assert_eq!(
            noisy.query(),
            vec![("expand", "false".to_owned()), ("quiet", "true".to_owned())]
        );
    }

    #[test]
    fn single_rejects_null_payloads() {
        let value = serde_json::json!({ "account": null });
        let result: Result<serde_json::Value> = single(value, "account");
        assert!(matches!(result, Err(Error::MissingPayload { field: "account" })));
    }

    #[test]
    fn redirect_outcome_is_an_error_for_body_operations() {
        let outcome = Dispatch::Redirect {
            location: Some("https://podium.live/api/v1/events/1".to_owned()),
        };
        assert!(matches!(outcome.into_success(), Err(Error::Redirect { .. })));
    }

    #[test]
    fn success_outcome_is_an_error_for_create_operations() {
        let outcome = Dispatch::Success(Value::Null);
        assert!(matches!(outcome.into_location(), Err(Error::MissingLocation)));
    }
}
