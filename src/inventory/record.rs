// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::storage::ObjectAttrs;
use crate::util::fmt::human_size;

/// One inventory row per storage object.
///
/// Every record carries the same 26 fields in the same order regardless of
/// which attributes the source object actually has; absent attributes render
/// as empty strings. Field order here is the CSV column order and matches the
/// destination table schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObjectRecord {
    pub bucket_name: String,
    pub blob_name: String,
    pub gcs_object_name: String,
    pub gcs_path: String,
    pub storage_class: String,
    pub id: String,
    pub size: String,
    pub updated: String,
    pub generation: i64,
    pub metageneration: i64,
    pub etag: String,
    pub owner: String,
    pub component_count: String,
    pub crc32c: String,
    pub md5_hash: String,
    pub cache_control: String,
    pub content_type: String,
    pub content_disposition: String,
    pub content_encoding: String,
    pub content_language: String,
    pub metadata: String,
    pub media_link: String,
    pub custom_time: String,
    pub temporary_hold: String,
    pub event_based_hold: String,
    pub retention_expiration_time: String,
}

impl ObjectRecord {
    /// Column names in serialization order.
    pub const COLUMNS: [&'static str; 26] = [
        "bucket_name",
        "blob_name",
        "gcs_object_name",
        "gcs_path",
        "storage_class",
        "id",
        "size",
        "updated",
        "generation",
        "metageneration",
        "etag",
        "owner",
        "component_count",
        "crc32c",
        "md5_hash",
        "cache_control",
        "content_type",
        "content_disposition",
        "content_encoding",
        "content_language",
        "metadata",
        "media_link",
        "custom_time",
        "temporary_hold",
        "event_based_hold",
        "retention_expiration_time",
    ];

    /// Build a record from one object's attributes.
    ///
    /// Derivations:
    /// - `gcs_object_name` is the last `/`-segment of the object name
    /// - `id` is the last `/`-segment of the composite id
    /// - `size` is a binary-prefixed human string, not a raw byte count
    /// - hold flags render as the literal `"enabled"`/`"disabled"`
    pub fn from_attrs(attrs: &ObjectAttrs) -> Self {
        Self {
            bucket_name: attrs.bucket.clone(),
            blob_name: attrs.name.clone(),
            gcs_object_name: last_segment(&attrs.name).to_string(),
            gcs_path: format!("gs://{}/{}", attrs.bucket, attrs.name),
            storage_class: attrs.storage_class.clone(),
            id: last_segment(&attrs.id).to_string(),
            size: human_size(attrs.size),
            updated: fmt_timestamp(attrs.updated.as_ref()),
            generation: attrs.generation,
            metageneration: attrs.metageneration,
            etag: attrs.etag.clone(),
            owner: attrs.owner.clone().unwrap_or_default(),
            component_count: attrs
                .component_count
                .map(|c| c.to_string())
                .unwrap_or_default(),
            crc32c: attrs.crc32c.clone().unwrap_or_default(),
            md5_hash: attrs.md5_hash.clone().unwrap_or_default(),
            cache_control: attrs.cache_control.clone().unwrap_or_default(),
            content_type: attrs.content_type.clone().unwrap_or_default(),
            content_disposition: attrs.content_disposition.clone().unwrap_or_default(),
            content_encoding: attrs.content_encoding.clone().unwrap_or_default(),
            content_language: attrs.content_language.clone().unwrap_or_default(),
            metadata: attrs
                .metadata
                .as_ref()
                .map(|m| serde_json::to_string(m).unwrap_or_default())
                .unwrap_or_default(),
            media_link: attrs.media_link.clone(),
            custom_time: fmt_timestamp(attrs.custom_time.as_ref()),
            temporary_hold: hold_flag(attrs.temporary_hold),
            event_based_hold: hold_flag(attrs.event_based_hold),
            retention_expiration_time: fmt_timestamp(attrs.retention_expiration_time.as_ref()),
        }
    }
}

/// Substring after the last path separator, or the whole string if none.
fn last_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

fn hold_flag(enabled: bool) -> String {
    if enabled { "enabled" } else { "disabled" }.to_string()
}

fn fmt_timestamp(value: Option<&OffsetDateTime>) -> String {
    value
        .and_then(|ts| ts.format(&Rfc3339).ok())
        .unwrap_or_default()
}
