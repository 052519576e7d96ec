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

//! # GCS Inventory
//!
//! A Rust library and CLI for inventorying a Google Cloud Storage bucket's
//! object metadata into a BigQuery external table.
//!
//! The pipeline runs strictly forward: every object in the bucket is listed
//! (pseudo-directory markers are skipped), a fixed 26-field metadata record
//! is collected per object, the records are written to a local CSV, the CSV
//! is uploaded back into the bucket, and an external table over the uploaded
//! file is registered in a BigQuery dataset.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gcs_inventory::{Inventory, InventoryConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = InventoryConfig::new(
//!     "data-platform-foundation-001",
//!     "my-project",
//!     "gcs_duplication_test",
//!     "test_obj",
//! );
//!
//! let inventory = Inventory::builder(config)
//!     .with_fetch_parallelism(8)
//!     .build()
//!     .await?;
//!
//! let summary = inventory.run().await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Run configuration and CLI arguments
//! - [`inventory`] - The pipeline stages and orchestrator
//! - [`storage`] - Cloud storage abstraction layer
//! - [`warehouse`] - External table registration
//! - [`util`] - Utility functions and helpers

pub mod config;
pub mod inventory;
pub mod storage;
pub mod util;
pub mod warehouse;

// Re-export commonly used types
pub use config::InventoryConfig;
pub use inventory::{Inventory, ObjectRecord, RunSummary};
pub use storage::{ObjectAttrs, StorageProvider};
