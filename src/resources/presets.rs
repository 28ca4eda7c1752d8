// ABOUTME: Preset CRUD operations
// ABOUTME: The list endpoint filters by mapping type and free-text search
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::Value;

use crate::client::PodiumClient;
use crate::errors::Result;
use crate::models::{PodiumPreset, PodiumRedirect, PodiumToken};
use crate::pagination::{ListOptions, PagedResponse};
use crate::request::{self, FetchOptions};

/// List presets of the given mapping type, optionally filtered by a search
/// string. Defaults to `/api/v1/presets` unless `endpoint` overrides it.
pub async fn list_presets(
    client: &PodiumClient,
    token: &PodiumToken,
    preset_type: &str,
    search: Option<&str>,
    endpoint: Option<&str>,
    options: &ListOptions,
) -> Result<PagedResponse<PodiumPreset>> {
    let endpoint = endpoint.map_or_else(|| client.api_url("presets"), str::to_owned);
    let mut query = vec![("type", preset_type.to_owned())];
    if let Some(search) = search {
        query.push(("search", search.to_owned()));
    }
    query.extend(options.query());
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, &endpoint, &query, headers).await?;
    PagedResponse::from_value(value, "presets")
}

/// Fetch the preset at `preset_uri`.
pub async fn get_preset(
    client: &PodiumClient,
    token: &PodiumToken,
    preset_uri: &str,
    options: &FetchOptions,
) -> Result<PodiumPreset> {
    let headers = client.token_headers(token)?;
    let value = request::fetch(client, preset_uri, &options.query(), headers).await?;
    request::single(value, "preset")
}

/// Everything the server requires to create a preset.
#[derive(Debug, Clone)]
pub struct NewPreset {
    /// Name of the preset.
    pub name: String,
    /// Notes shown alongside the preset.
    pub notes: String,
    /// JSON payload of the preset itself.
    pub preset_data: String,
    /// Mapping type key.
    pub preset_type: String,
    /// Whether the preset is only visible to its creator.
    pub private: bool,
    /// File name of the preview image.
    pub preview_image_name: String,
    /// Encoded preview image data.
    pub preview_image_data: String,
}

/// Create a preset, resolving to the redirect pointing at it.
pub async fn create_preset(
    client: &PodiumClient,
    token: &PodiumToken,
    preset: &NewPreset,
) -> Result<PodiumRedirect> {
    let endpoint = client.api_url("presets");
    let form = [
        ("preset[name]", preset.name.clone()),
        ("preset[notes]", preset.notes.clone()),
        ("preset[preset_data]", preset.preset_data.clone()),
        ("preset[type]", preset.preset_type.clone()),
        ("preset[private]", i32::from(preset.private).to_string()),
        ("preset[preview_image_name]", preset.preview_image_name.clone()),
        ("preset[preview_image_data]", preset.preview_image_data.clone()),
    ];
    let headers = client.token_headers(token)?;
    request::create(client, &endpoint, &form, headers, "preset").await
}

/// Fields of a preset that can be changed; unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct PresetUpdate {
    /// New name.
    pub name: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New preset payload.
    pub preset_data: Option<String>,
    /// New visibility.
    pub private: Option<bool>,
    /// New preview image file name.
    pub preview_image_name: Option<String>,
    /// New preview image data.
    pub preview_image_data: Option<String>,
}

impl PresetUpdate {
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = Vec::new();
        if let Some(name) = &self.name {
            form.push(("preset[name]", name.clone()));
        }
        if let Some(notes) = &self.notes {
            form.push(("preset[notes]", notes.clone()));
        }
        if let Some(preset_data) = &self.preset_data {
            form.push(("preset[preset_data]", preset_data.clone()));
        }
        if let Some(private) = self.private {
            form.push(("preset[private]", i32::from(private).to_string()));
        }
        if let Some(preview_image_name) = &self.preview_image_name {
            form.push(("preset[preview_image_name]", preview_image_name.clone()));
        }
        if let Some(preview_image_data) = &self.preview_image_data {
            form.push(("preset[preview_image_data]", preview_image_data.clone()));
        }
        form
    }
}

/// Update the preset at `preset_uri`.
pub async fn update_preset(
    client: &PodiumClient,
    token: &PodiumToken,
    preset_uri: &str,
    update: &PresetUpdate,
) -> Result<(Value, String)> {
    let headers = client.token_headers(token)?;
    request::update(client, preset_uri, &update.form(), headers).await
}

/// Delete the preset at `preset_uri`, resolving to the deleted URI.
pub async fn delete_preset(
    client: &PodiumClient,
    token: &PodiumToken,
    preset_uri: &str,
) -> Result<String> {
    let headers = client.token_headers(token)?;
    request::delete(client, preset_uri, headers).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_flag_is_sent_as_an_integer() {
        let update = PresetUpdate {
            private: Some(true),
            ..PresetUpdate::default()
        };
        assert_eq!(update.form(), vec![("preset[private]", "1".to_owned())]);
    }
}
