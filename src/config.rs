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

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_csv_path() -> PathBuf {
    PathBuf::from("all_object_info.csv")
}

fn default_destination_object() -> String {
    "all_obj_info/all_object_info.csv".to_string()
}

fn default_fetch_parallelism() -> usize {
    1
}

/// Configuration for one inventory run.
///
/// All pipeline parameters live here rather than as process-wide constants:
/// the source bucket, the BigQuery destination, the local/remote CSV paths,
/// and the credential source shared by both GCP clients.
///
/// # Examples
///
/// ```
/// use gcs_inventory::config::InventoryConfig;
///
/// let config = InventoryConfig::new("my-bucket", "my-project", "inventory", "objects");
/// assert_eq!(config.source_uri(), "gs://my-bucket/all_obj_info/all_object_info.csv");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Bucket to inventory (also receives the uploaded CSV)
    pub bucket: String,

    /// GCP project owning the BigQuery dataset
    pub project_id: String,

    /// BigQuery dataset the external table is registered in
    pub dataset: String,

    /// Name of the external table to create
    pub table: String,

    /// Local path the CSV is written to before upload
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Object name the CSV is uploaded to inside the bucket
    #[serde(default = "default_destination_object")]
    pub destination_object: String,

    /// Path to a service account key file
    ///
    /// When neither this nor `credentials_json` is set, Application Default
    /// Credentials are used.
    #[serde(default)]
    pub credentials_file: Option<String>,

    /// Service account key as an inline JSON string
    ///
    /// Useful when credentials come from a secrets manager. Takes precedence
    /// over `credentials_file`.
    #[serde(default)]
    pub credentials_json: Option<String>,

    /// Number of concurrent per-object metadata fetches
    ///
    /// 1 keeps the fetch stage fully sequential.
    #[serde(default = "default_fetch_parallelism")]
    pub fetch_parallelism: usize,
}

impl InventoryConfig {
    /// Create a configuration with default paths and sequential fetch.
    pub fn new(
        bucket: impl Into<String>,
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            project_id: project_id.into(),
            dataset: dataset.into(),
            table: table.into(),
            csv_path: default_csv_path(),
            destination_object: default_destination_object(),
            credentials_file: None,
            credentials_json: None,
            fetch_parallelism: default_fetch_parallelism(),
        }
    }

    /// Fully qualified storage locator of the uploaded CSV.
    pub fn source_uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.destination_object)
    }

    /// Fully qualified id of the destination table.
    pub fn table_id(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset, self.table)
    }
}

/// Command-line arguments, with environment variable fallback.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inventory a GCS bucket's object metadata into a BigQuery external table"
)]
pub struct Args {
    /// Bucket to inventory
    #[arg(long, env = "GCS_INVENTORY_BUCKET")]
    pub bucket: String,

    /// GCP project owning the BigQuery dataset
    #[arg(long, env = "GCS_INVENTORY_PROJECT")]
    pub project_id: String,

    /// BigQuery dataset to register the external table in
    #[arg(long, env = "GCS_INVENTORY_DATASET")]
    pub dataset: String,

    /// Name of the external table to create
    #[arg(long, env = "GCS_INVENTORY_TABLE")]
    pub table: String,

    /// Local path for the generated CSV
    #[arg(long, default_value = "all_object_info.csv")]
    pub csv_path: PathBuf,

    /// Object name the CSV is uploaded to inside the bucket
    #[arg(long, default_value = "all_obj_info/all_object_info.csv")]
    pub destination_object: String,

    /// Path to a service account key file (defaults to ADC)
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_file: Option<String>,

    /// Number of concurrent per-object metadata fetches
    #[arg(long, default_value_t = 1)]
    pub fetch_parallelism: usize,
}

impl From<Args> for InventoryConfig {
    fn from(args: Args) -> Self {
        Self {
            bucket: args.bucket,
            project_id: args.project_id,
            dataset: args.dataset,
            table: args.table,
            csv_path: args.csv_path,
            destination_object: args.destination_object,
            credentials_file: args.credentials_file,
            credentials_json: None,
            fetch_parallelism: args.fetch_parallelism,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = InventoryConfig::new("b", "p", "d", "t");
        assert_eq!(config.csv_path, PathBuf::from("all_object_info.csv"));
        assert_eq!(config.destination_object, "all_obj_info/all_object_info.csv");
        assert_eq!(config.fetch_parallelism, 1);
        assert!(config.credentials_file.is_none());
        assert!(config.credentials_json.is_none());
    }

    #[test]
    fn test_source_uri() {
        let mut config = InventoryConfig::new("data-platform", "p", "d", "t");
        config.destination_object = "inventory/objects.csv".to_string();
        assert_eq!(config.source_uri(), "gs://data-platform/inventory/objects.csv");
    }

    #[test]
    fn test_table_id() {
        let config = InventoryConfig::new("b", "proj", "gcs_duplication_test", "test_obj");
        assert_eq!(config.table_id(), "proj.gcs_duplication_test.test_obj");
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = r#"{"bucket":"b","project_id":"p","dataset":"d","table":"t"}"#;
        let config: InventoryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.bucket, "b");
        assert_eq!(config.csv_path, PathBuf::from("all_object_info.csv"));
        assert_eq!(config.fetch_parallelism, 1);
    }

    #[test]
    fn test_deserialization_overrides() {
        let json = r#"{
            "bucket":"b","project_id":"p","dataset":"d","table":"t",
            "csv_path":"/tmp/out.csv",
            "destination_object":"reports/out.csv",
            "fetch_parallelism":8
        }"#;
        let config: InventoryConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.csv_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.destination_object, "reports/out.csv");
        assert_eq!(config.fetch_parallelism, 8);
    }

    #[test]
    fn test_args_conversion() {
        let args = Args::parse_from([
            "gcs-inventory",
            "--bucket",
            "data-platform-foundation-001",
            "--project-id",
            "my-project",
            "--dataset",
            "gcs_duplication_test",
            "--table",
            "test_obj",
        ]);
        let config: InventoryConfig = args.into();

        assert_eq!(config.bucket, "data-platform-foundation-001");
        assert_eq!(config.dataset, "gcs_duplication_test");
        assert_eq!(config.table, "test_obj");
        assert_eq!(config.fetch_parallelism, 1);
    }
}
