// ABOUTME: Demo workflow for the podium-client library
// ABOUTME: Login, fetch account, page events, then create/update/get/delete one event
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks the full lifecycle against a live (or staging) Podium server:
//!
//! ```bash
//! podium-demo --app-id <id> --app-secret <secret> \
//!     --username driver@example.com --password hunter2
//! ```
//!
//! A previously obtained token is reused from the platform data dir when
//! present, mirroring how an application would keep its session in a
//! keystore between runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use podium_client::resources::{account, auth, events};
use podium_client::{
    Error, FetchOptions, ListOptions, PodiumClient, PodiumConfig, PodiumToken, DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(
    name = "podium-demo",
    about = "Demonstrates the podium-client login and event workflow"
)]
struct Cli {
    /// Application id registered with Podium
    #[arg(long)]
    app_id: String,

    /// Application secret registered with Podium
    #[arg(long)]
    app_secret: String,

    /// Username to log in with
    #[arg(long)]
    username: String,

    /// Password for the user
    #[arg(long)]
    password: String,

    /// Server base URL override
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Ignore any stored token and log in fresh
    #[arg(long)]
    fresh_login: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = PodiumConfig::new(&cli.app_id, &cli.app_secret).with_base_url(&cli.base_url);
    let client = PodiumClient::new(config)?;

    let token = obtain_token(&client, &cli).await?;

    let account = account::get_account(&client, &token, &FetchOptions::collapsed()).await?;
    info!(username = %account.username, email = %account.email, "fetched account");

    page_through_events(&client, &token, &account.events_uri).await?;
    if let Err(error) = event_lifecycle(&client, &token).await {
        if let Some(api_error) = error.downcast_ref::<Error>() {
            warn!(outcome = describe_failure(api_error), "event lifecycle failed");
        }
        return Err(error);
    }

    Ok(())
}

/// Reuse a stored session token when one exists, otherwise log in and
/// persist the new one.
async fn obtain_token(client: &PodiumClient, cli: &Cli) -> Result<PodiumToken> {
    if !cli.fresh_login {
        if let Some(token) = load_token()? {
            info!("reusing stored session token");
            return Ok(token);
        }
    }

    let token = auth::login(client, &cli.username, &cli.password)
        .await
        .context("login failed")?;
    info!(token_type = %token.token_type, "logged in");
    if let Err(error) = store_token(&token) {
        warn!(%error, "could not persist session token");
    }
    Ok(token)
}

/// Walk the account's events collection one page at a time.
async fn page_through_events(
    client: &PodiumClient,
    token: &PodiumToken,
    events_uri: &str,
) -> Result<()> {
    let mut page =
        events::list_events(client, token, Some(events_uri), &ListOptions::window(0, 20)).await?;
    let mut seen = page.len();
    info!(total = page.total, "listing events");
    for event in &page.payload {
        info!(title = event.title.as_deref().unwrap_or("<untitled>"), uri = %event.uri, "event");
    }
    // next_uri already carries the paging query, so follow it without
    // adding parameters of our own.
    let follow = ListOptions {
        start: None,
        per_page: None,
        expand: None,
        quiet: None,
    };
    while let Some(next) = page.next_uri.take() {
        page = events::list_events(client, token, Some(&next), &follow).await?;
        seen += page.len();
        debug!(seen, "fetched next page");
    }
    Ok(())
}

/// Create an event, rename it, read it back, and delete it.
async fn event_lifecycle(client: &PodiumClient, token: &PodiumToken) -> Result<()> {
    let start = Utc::now();
    let end = start + Duration::hours(4);
    let redirect = events::create_event(
        client,
        token,
        "podium-client demo event",
        &start.to_rfc3339(),
        &end.to_rfc3339(),
        None,
    )
    .await
    .context("event creation failed")?;
    info!(location = %redirect.location, "created event");

    let update = events::EventUpdate {
        title: Some("podium-client demo event (renamed)".to_owned()),
        ..events::EventUpdate::default()
    };
    let (_, updated_uri) = events::update_event(client, token, &redirect.location, &update).await?;
    info!(%updated_uri, "updated event");

    let event = events::get_event(client, token, &updated_uri, &FetchOptions::default()).await?;
    info!(title = event.title.as_deref().unwrap_or("<untitled>"), "read event back");

    let deleted_uri = events::delete_event(client, token, &event.uri).await?;
    info!(%deleted_uri, "deleted event");
    Ok(())
}

fn token_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("podium-client").join("token.json"))
}

fn load_token() -> Result<Option<PodiumToken>> {
    let Some(path) = token_path() else {
        return Ok(None);
    };
    match fs::read(&path) {
        Ok(bytes) => {
            let token = serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt token store at {}", path.display()))?;
            Ok(Some(token))
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error.into()),
    }
}

fn store_token(token: &PodiumToken) -> Result<()> {
    let path = token_path().context("no platform data dir")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_vec_pretty(token)?)?;
    debug!(path = %path.display(), "stored session token");
    Ok(())
}

// The demo treats every outcome other than success as fatal, but labels it
// the way the API reports it.
fn describe_failure(error: &Error) -> &'static str {
    match error {
        Error::Failure { .. } => "failure",
        Error::Transport(_) => "error",
        Error::Redirect { .. } => "redirect",
        _ => "local",
    }
}
