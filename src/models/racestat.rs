// ABOUTME: Race statistic model
// ABOUTME: A timing-and-scoring snapshot for one competitor
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A race statistic snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumRacestat {
    /// Unique id for this racestat.
    #[serde(rename = "id")]
    pub racestat_id: String,
    /// URI for this racestat.
    #[serde(rename = "URI")]
    pub uri: String,
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
    /// URI of the event-device this racestat belongs to.
    pub eventdevice_uri: String,
    /// URI of the device this racestat belongs to.
    pub device_uri: String,
    /// URI of the user this racestat belongs to.
    pub user_uri: String,
}
