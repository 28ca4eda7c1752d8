// ABOUTME: Race statistic operations
// ABOUTME: Uploads timing-and-scoring snapshots, singly or batched per event
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumRacestat, PodiumRedirect, PodiumToken};
use crate::request::{self, FetchOptions};

/// Fetch the racestat at `endpoint`.
///
/// As with accounts, the server defaults this lookup to `expand=false`;
/// pass [`FetchOptions::collapsed`] to match.
pub async fn get_racestat(
    client: &PodiumClient,
    token: &PodiumToken,
    endpoint: &str,
    options: &FetchOptions,
) -> Result<PodiumRacestat> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, endpoint, &options.query(), headers).await?;
    request::single(value, "racestat")
}

/// One competitor's timing-and-scoring snapshot.
#[derive(Debug, Clone)]
pub struct RacestatFields {
    /// Competitor number assigned for the race.
    pub comp_number: String,
    /// Competitor class assigned for the race.
    pub comp_class: String,
    /// Total laps according to timing and scoring.
    pub total_laps: i64,
    /// Last lap time according to timing and scoring.
    pub last_lap_time: f64,
    /// Overall race position.
    pub position_overall: i64,
    /// Position in class.
    pub position_in_class: i64,
    /// Competitor number of the competitor ahead.
    pub comp_number_ahead: String,
    /// Competitor number of the competitor behind.
    pub comp_number_behind: String,
    /// Time gap to the competitor ahead.
    pub gap_to_ahead: f64,
    /// Time gap to the competitor behind.
    pub gap_to_behind: f64,
    /// Laps to the competitor ahead.
    pub laps_to_ahead: i64,
    /// Laps to the competitor behind.
    pub laps_to_behind: i64,
    /// Full-course flag status.
    pub fc_flag: i64,
    /// Competitor flag status.
    pub comp_flag: i64,
}

impl RacestatFields {
    /// Form pairs under `prefix`, e.g. `racestat` or `racestat[0]`.
    fn form(&self, prefix: &str) -> Vec<(String, String)> {
        vec![
            (format!("{prefix}[comp_number]"), self.comp_number.clone()),
            (format!("{prefix}[comp_class]"), self.comp_class.clone()),
            (format!("{prefix}[total_laps]"), self.total_laps.to_string()),
            (
                format!("{prefix}[last_lap_time]"),
                self.last_lap_time.to_string(),
            ),
            (
                format!("{prefix}[position_overall]"),
                self.position_overall.to_string(),
            ),
            (
                format!("{prefix}[position_in_class]"),
                self.position_in_class.to_string(),
            ),
            (
                format!("{prefix}[comp_number_ahead]"),
                self.comp_number_ahead.clone(),
            ),
            (
                format!("{prefix}[comp_number_behind]"),
                self.comp_number_behind.clone(),
            ),
            (
                format!("{prefix}[gap_to_ahead]"),
                self.gap_to_ahead.to_string(),
            ),
            (
                format!("{prefix}[gap_to_behind]"),
                self.gap_to_behind.to_string(),
            ),
            (
                format!("{prefix}[laps_to_ahead]"),
                self.laps_to_ahead.to_string(),
            ),
            (
                format!("{prefix}[laps_to_behind]"),
                self.laps_to_behind.to_string(),
            ),
            (format!("{prefix}[fc_flag]"), self.fc_flag.to_string()),
            (format!("{prefix}[comp_flag]"), self.comp_flag.to_string()),
        ]
    }
}

/// A batch entry pairing a device with its snapshot.
#[derive(Debug, Clone)]
pub struct RacestatEntry {
    /// Id of the device the snapshot belongs to.
    pub device_id: String,
    /// The snapshot itself.
    pub stats: RacestatFields,
}

/// Upload one racestat for a device at an event.
pub async fn create_racestat(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: &str,
    device_id: &str,
    stats: &RacestatFields,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url(&format!("events/{event_id}/devices/{device_id}/racestat"));
    let form = stats.form("racestat");
    let headers = client.token_headers(token)?;
    request::create_owned(client, &endpoint, &form, headers, "racestat").await
}

/// Upload a batch of racestats for an event in one request, indexed as
/// `racestat[{i}][field]`.
pub async fn create_racestats(
    client: &PodiumClient,
    token: &PodiumToken,
    event_id: &str,
    entries: &[RacestatEntry],
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url(&format!("events/{event_id}/racestats"));
    let form = batch_form(entries);
    let headers = client.token_headers(token)?;
    request::create_owned(client, &endpoint, &form, headers, "racestat").await
}

fn batch_form(entries: &[RacestatEntry]) -> Vec<(String, String)> {
    let mut form = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let prefix = format!("racestat[{index}]");
        form.push((format!("{prefix}[device_id]"), entry.device_id.clone()));
        form.extend(entry.stats.form(&prefix));
    }
    form
}
