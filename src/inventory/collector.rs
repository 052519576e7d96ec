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

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::record::ObjectRecord;
use crate::storage::{StorageProvider, StorageResult};

/// Result of the enumeration stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Object names to inventory, in listing order
    pub names: Vec<String>,

    /// Number of pseudo-directory markers dropped from the listing
    pub skipped: usize,
}

/// Enumerate all objects in the provider's bucket.
///
/// Names ending in `/` are pseudo-directory placeholders, not real objects;
/// they are dropped here and never fetched.
pub async fn list_object_names(provider: &dyn StorageProvider) -> StorageResult<Listing> {
    let all = provider.list_objects().await?;
    let total = all.len();

    let names: Vec<String> = all
        .into_iter()
        .filter(|name| !name.ends_with('/'))
        .collect();
    let skipped = total - names.len();

    info!(
        "Listed objects, bucket={}, count={}, skipped_markers={}",
        provider.bucket(),
        names.len(),
        skipped
    );
    Ok(Listing { names, skipped })
}

/// Fetch attributes for each listed name and map them to records.
///
/// Fetches run with bounded parallelism but record order always matches
/// listing order. A `NotFound` for any name (e.g. an object deleted between
/// listing and fetch) aborts the whole collection.
pub async fn collect_records(
    provider: &dyn StorageProvider,
    names: &[String],
    parallelism: usize,
) -> StorageResult<Vec<ObjectRecord>> {
    let parallelism = parallelism.max(1);

    let records = stream::iter(names.iter())
        .map(|name| async move {
            let attrs = provider.object_attrs(name).await?;
            debug!("Collected metadata, object={}", name);
            Ok::<_, crate::storage::StorageError>(ObjectRecord::from_attrs(&attrs))
        })
        .buffered(parallelism)
        .try_collect::<Vec<_>>()
        .await?;

    Ok(records)
}
