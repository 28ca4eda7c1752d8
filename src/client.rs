// ABOUTME: Client configuration and construction for the Podium API
// ABOUTME: Holds the pooled HTTP client, application credentials, and auth header builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect;

use crate::errors::Result;
use crate::models::PodiumToken;

/// Base URL used when the configuration does not override it.
pub const DEFAULT_BASE_URL: &str = "https://podium.live";

/// Request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Progress observer invoked while a response body streams in, with the
/// bytes received so far and the total size when the server reported one.
pub type ProgressFn = Arc<dyn Fn(u64, Option<u64>) + Send + Sync>;

/// Registered application credentials and the server to talk to.
#[derive(Debug, Clone)]
pub struct PodiumConfig {
    /// Application id as registered with Podium.
    pub app_id: String,
    /// Application secret as registered with Podium.
    pub app_secret: String,
    /// Server base URL, without a trailing slash.
    pub base_url: String,
}

impl PodiumConfig {
    /// Create a configuration pointing at the default Podium server.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the server base URL, e.g. for a staging instance.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

/// Handle for issuing Podium API requests.
///
/// Constructed once from a [`PodiumConfig`] and passed to every operation,
/// replacing any notion of process-global registration. Cloning is cheap;
/// clones share the underlying connection pool.
#[derive(Clone)]
pub struct PodiumClient {
    http: reqwest::Client,
    config: Arc<PodiumConfig>,
    progress: Option<ProgressFn>,
}

impl PodiumClient {
    /// Build a client with pooled connections and default timeouts.
    ///
    /// Redirect following is disabled on purpose: creation endpoints report
    /// success through a redirect response, which the dispatcher must see.
    pub fn new(config: PodiumConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
            progress: None,
        })
    }

    /// Return a handle whose requests report download progress to `hook`.
    #[must_use]
    pub fn with_progress(&self, hook: ProgressFn) -> Self {
        let mut client = self.clone();
        client.progress = Some(hook);
        client
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &PodiumConfig {
        &self.config
    }

    /// Absolute URL for a versioned API path, e.g. `api_url("events")`.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", self.config.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn progress(&self) -> Option<&ProgressFn> {
        self.progress.as_ref()
    }

    /// Header map for the login call, authenticated with the application
    /// credentials. The server expects the raw `Basic id:secret` pair.
    pub(crate) fn app_headers(&self) -> Result<HeaderMap> {
        let auth = format!("Basic {}:{}", self.config.app_id, self.config.app_secret);
        base_headers(HeaderValue::from_str(&auth)?)
    }

    /// Header map for an authenticated call using the session token.
    pub(crate) fn token_headers(&self, token: &PodiumToken) -> Result<HeaderMap> {
        let auth = format!("Bearer {}", token.token);
        base_headers(HeaderValue::from_str(&auth)?)
    }
}

impl fmt::Debug for PodiumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PodiumClient")
            .field("config", &self.config)
            .field("progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

fn base_headers(auth: HeaderValue) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_public_server() {
        let config = PodiumConfig::new("app", "secret");
        assert_eq!(config.base_url, "https://podium.live");
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let config = PodiumConfig::new("app", "secret").with_base_url("https://staging.test/");
        assert_eq!(config.base_url, "https://staging.test");
    }

    #[test]
    fn api_url_is_versioned() {
        let client = PodiumClient::new(PodiumConfig::new("app", "secret")).unwrap();
        assert_eq!(client.api_url("events"), "https://podium.live/api/v1/events");
    }

    #[test]
    fn app_header_carries_raw_credential_pair() {
        let client = PodiumClient::new(PodiumConfig::new("app", "secret")).unwrap();
        let headers = client.app_headers().unwrap();
        assert_eq!(headers[AUTHORIZATION.as_str()], "Basic app:secret");
        assert_eq!(
            headers[CONTENT_TYPE.as_str()],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(headers[ACCEPT.as_str()], "application/json");
    }
}
