// ABOUTME: Logfile model for the telemetry upload-and-import pipeline
// ABOUTME: Tracks the upload URL, file key, and import status of one log file
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;

/// A telemetry logfile upload.
///
/// Created through `logfiles::new_logfile`, which hands back the upload URL
/// and file key; once the file is uploaded, `logfiles::create_logfile`
/// queues the import and `status` tracks its progress through the
/// `STATUS_*` states.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumLogfile {
    /// Key of the logfile, used to start the import after upload.
    pub file_key: String,
    /// Id of the event-device this upload belongs to.
    pub eventdevice_id: i64,
    /// Import state, one of the `STATUS_*` constants.
    pub status: i32,
    /// Unique id, present once the logfile record exists.
    #[serde(default)]
    pub id: Option<i64>,
    /// URI for the logfile record.
    #[serde(rename = "URI", default)]
    pub uri: Option<String>,
    /// URL the raw file is uploaded to.
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Id of the associated event.
    #[serde(default)]
    pub event_id: Option<i64>,
    /// URL of the associated event.
    #[serde(default)]
    pub event_url: Option<String>,
    /// Title of the associated event.
    #[serde(default)]
    pub event_title: Option<String>,
    /// Id of the associated device.
    #[serde(default)]
    pub device_id: Option<i64>,
    /// URL of the associated device.
    #[serde(default)]
    pub device_url: Option<String>,
    /// Name of the associated device.
    #[serde(default)]
    pub device_name: Option<String>,
    /// Creation time of the record.
    #[serde(default)]
    pub created: Option<String>,
}

impl PodiumLogfile {
    /// Upload created but not yet queued for import.
    pub const STATUS_UNQUEUED: i32 = -1;
    /// Import failed.
    pub const STATUS_ERROR: i32 = 0;
    /// Import queued.
    pub const STATUS_QUEUED: i32 = 1;
    /// Import in progress.
    pub const STATUS_PROCESSING: i32 = 2;
    /// Import finished.
    pub const STATUS_COMPLETED: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_a_fresh_upload_record() {
        let logfile: PodiumLogfile = serde_json::from_value(serde_json::json!({
            "upload_url": "test/upload/url",
            "file_key": "12345",
            "eventdevice_id": 123,
            "status": -1,
        }))
        .unwrap();
        assert_eq!(logfile.file_key, "12345");
        assert_eq!(logfile.eventdevice_id, 123);
        assert_eq!(logfile.status, PodiumLogfile::STATUS_UNQUEUED);
        assert_eq!(logfile.upload_url.as_deref(), Some("test/upload/url"));
        assert_eq!(logfile.id, None);
    }
}
