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

//! Cloud storage abstraction layer
//!
//! This module provides the bucket-scoped storage interface the inventory
//! pipeline runs against: a `StorageProvider` trait with the listing, metadata
//! fetch, and upload operations, plus the Google Cloud Storage implementation
//! built on the `google-cloud-storage` crate.

pub mod error;
pub mod gcs;
pub mod provider;

// Public exports
pub use error::{StorageError, StorageResult};
pub use gcs::GcsProvider;
pub use provider::{ObjectAttrs, StorageProvider};
