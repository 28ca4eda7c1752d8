// ABOUTME: Preset model
// ABOUTME: A shareable dashboard/channel-mapping configuration blob
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_json::Value;

/// A configuration preset.
#[derive(Debug, Clone, Deserialize)]
pub struct PodiumPreset {
    /// Unique id for the preset.
    #[serde(rename = "id")]
    pub preset_id: i64,
    /// Endpoint for accessing full preset information.
    #[serde(rename = "URI")]
    pub uri: String,
    /// Name of the preset.
    #[serde(default)]
    pub name: Option<String>,
    /// Notes for this preset.
    #[serde(default)]
    pub notes: Option<String>,
    /// JSON data for the preset.
    #[serde(default)]
    pub preset: Value,
    /// Id of the mapping type.
    #[serde(default)]
    pub mapping_type_id: Option<i64>,
    /// String key of the mapping type.
    #[serde(default)]
    pub mapping_type: Option<String>,
    /// Date the preset was updated, ISO 8601 format.
    #[serde(default)]
    pub updated: Option<String>,
    /// Date the preset was created, ISO 8601 format.
    #[serde(default)]
    pub created: Option<String>,
}
