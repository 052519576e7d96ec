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

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use time::OffsetDateTime;

use super::error::StorageResult;

/// Descriptive attributes of a single storage object.
///
/// Missing attributes are modeled as `None`/`false`, never omitted, so every
/// object yields the same attribute set regardless of what the service
/// actually stored for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectAttrs {
    /// Bucket the object lives in
    pub bucket: String,

    /// Full object name, including any pseudo-directory prefix
    pub name: String,

    /// Service-assigned composite id (`<bucket>/<name>/<generation>`)
    pub id: String,

    /// Storage class (STANDARD, NEARLINE, ...)
    pub storage_class: String,

    /// Object size in bytes
    pub size: u64,

    /// Last metadata/content update time
    pub updated: Option<OffsetDateTime>,

    /// Content version counter
    pub generation: i64,

    /// Metadata version counter
    pub metageneration: i64,

    /// HTTP entity tag
    pub etag: String,

    /// Owner entity, when the service exposes one
    pub owner: Option<String>,

    /// Number of source components for composite objects
    pub component_count: Option<i32>,

    /// Base64 CRC32C checksum
    pub crc32c: Option<String>,

    /// Base64 MD5 checksum
    pub md5_hash: Option<String>,

    pub cache_control: Option<String>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub content_encoding: Option<String>,
    pub content_language: Option<String>,

    /// Free-form user metadata, keyed deterministically
    pub metadata: Option<BTreeMap<String, String>>,

    /// Direct download link
    pub media_link: String,

    /// User-set custom timestamp
    pub custom_time: Option<OffsetDateTime>,

    /// Temporary hold flag
    pub temporary_hold: bool,

    /// Event-based hold flag
    pub event_based_hold: bool,

    /// Retention expiry, absent when no retention policy applies
    pub retention_expiration_time: Option<OffsetDateTime>,
}

/// Generic trait for bucket-scoped storage providers.
///
/// Implementations are bound to a single bucket at construction time and
/// expose the three operations the inventory pipeline needs: enumerate object
/// names, fetch one object's attributes, and upload a local file.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Name of the bucket this provider is bound to.
    fn bucket(&self) -> &str;

    /// List the names of all objects in the bucket.
    ///
    /// Returns every object name the service reports, in listing order,
    /// paginating internally until the listing is exhausted. Pseudo-directory
    /// markers (names ending in `/`) are included; filtering them is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket does not exist or the listing call
    /// fails for network or permission reasons.
    async fn list_objects(&self) -> StorageResult<Vec<String>>;

    /// Fetch the full attribute set for one object.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the object no longer exists (for
    /// example, deleted between listing and fetch), or another variant for
    /// network/permission failures.
    async fn object_attrs(&self, name: &str) -> StorageResult<ObjectAttrs>;

    /// Upload a local file to the bucket at `destination`, overwriting any
    /// existing object with that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the local file cannot be read or the upload call
    /// fails.
    async fn upload_file(&self, local: &Path, destination: &str) -> StorageResult<()>;
}
