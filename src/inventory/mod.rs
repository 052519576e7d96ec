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

//! Inventory pipeline
//!
//! The four pipeline stages over a bucket: enumerate object names, collect
//! one metadata record per object, serialize the records to CSV, and hand the
//! result to the publisher. Enumeration and collection are separate stages so
//! each can be tested independently and collection can fan out.

pub mod collector;
pub mod inventory;
pub mod record;
pub mod writer;

// Public exports
pub use collector::{collect_records, list_object_names, Listing};
pub use inventory::{Inventory, InventoryBuilder, RunSummary};
pub use record::ObjectRecord;
