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

//! Warehouse integration
//!
//! Registers the uploaded inventory CSV as an externally-backed BigQuery
//! table. The table definition carries the fixed inventory schema and reads
//! the CSV on demand; nothing is ingested into managed storage.

pub mod bigquery;
pub mod error;

// Public exports
pub use bigquery::{BigQueryPublisher, Warehouse};
pub use error::{WarehouseError, WarehouseResult};
