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

use gcp_bigquery_client::error::BQError;
use thiserror::Error;

/// Errors that can occur during warehouse operations
#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("Credentials error: {0}")]
    CredentialsError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Table already exists: {0}")]
    AlreadyExists(String),

    #[error("BigQuery error: {0}")]
    BigQueryError(#[from] BQError),
}

/// Result type for warehouse operations
pub type WarehouseResult<T> = Result<T, WarehouseError>;
