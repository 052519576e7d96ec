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

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::{collector, writer};
use crate::config::InventoryConfig;
use crate::storage::{GcsProvider, StorageProvider};
use crate::warehouse::{BigQueryPublisher, Warehouse};

/// Builder for constructing an `Inventory` instance.
///
/// By default `build()` wires up the GCS storage provider and the BigQuery
/// publisher from the configuration; both seams can be overridden, which is
/// how the pipeline is tested without live services.
///
/// # Examples
///
/// ```no_run
/// use gcs_inventory::{Inventory, InventoryConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let config = InventoryConfig::new("my-bucket", "my-project", "inventory", "objects");
///
/// let inventory = Inventory::builder(config)
///     .with_fetch_parallelism(8)
///     .build()
///     .await?;
/// let summary = inventory.run().await?;
/// println!("{}", summary);
/// # Ok(())
/// # }
/// ```
pub struct InventoryBuilder {
    config: InventoryConfig,
    fetch_parallelism: Option<usize>,
    storage: Option<Arc<dyn StorageProvider>>,
    warehouse: Option<Arc<dyn Warehouse>>,
}

impl InventoryBuilder {
    /// Creates a new `InventoryBuilder` with the given configuration.
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            config,
            fetch_parallelism: None,
            storage: None,
            warehouse: None,
        }
    }

    /// Override the configured number of concurrent metadata fetches.
    pub fn with_fetch_parallelism(mut self, parallelism: usize) -> Self {
        self.fetch_parallelism = Some(parallelism);
        self
    }

    /// Use a custom storage provider instead of the GCS one.
    pub fn with_storage(mut self, storage: Arc<dyn StorageProvider>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Use a custom warehouse instead of the BigQuery publisher.
    pub fn with_warehouse(mut self, warehouse: Arc<dyn Warehouse>) -> Self {
        self.warehouse = Some(warehouse);
        self
    }

    /// Builds the `Inventory` instance.
    ///
    /// Performs the async client construction for any seam that was not
    /// overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if either GCP client cannot be authenticated.
    pub async fn build(self) -> Result<Inventory, Box<dyn Error + Send + Sync>> {
        let storage: Arc<dyn StorageProvider> = match self.storage {
            Some(storage) => storage,
            None => Arc::new(GcsProvider::new(&self.config).await?),
        };
        let warehouse: Arc<dyn Warehouse> = match self.warehouse {
            Some(warehouse) => warehouse,
            None => Arc::new(BigQueryPublisher::new(&self.config).await?),
        };
        let fetch_parallelism = self
            .fetch_parallelism
            .unwrap_or(self.config.fetch_parallelism);

        Ok(Inventory {
            config: self.config,
            storage,
            warehouse,
            fetch_parallelism,
        })
    }
}

/// Outcome of one inventory run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of objects inventoried
    pub objects: usize,

    /// Number of pseudo-directory markers skipped during listing
    pub skipped_markers: usize,

    /// Local path of the generated CSV
    pub csv_path: PathBuf,

    /// Storage locator the CSV was uploaded to
    pub source_uri: String,

    /// Fully qualified id of the registered table
    pub table_id: String,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "objects={}, skipped_markers={}, csv={}, source={}, table={}",
            self.objects,
            self.skipped_markers,
            self.csv_path.display(),
            self.source_uri,
            self.table_id
        )
    }
}

/// The inventory pipeline.
///
/// Four stages, strictly forward: list the bucket, collect one record per
/// object, write the CSV, then publish (upload the CSV and register the
/// external table). Any failure aborts the run at that point; nothing already
/// uploaded is rolled back.
pub struct Inventory {
    config: InventoryConfig,
    storage: Arc<dyn StorageProvider>,
    warehouse: Arc<dyn Warehouse>,
    fetch_parallelism: usize,
}

impl Inventory {
    /// Creates a new `InventoryBuilder` for constructing an `Inventory`.
    pub fn builder(config: InventoryConfig) -> InventoryBuilder {
        InventoryBuilder::new(config)
    }

    /// Run the full pipeline and return a run summary.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The bucket cannot be listed
    /// * Any object's metadata fetch fails (including NotFound for objects
    ///   deleted after listing)
    /// * The CSV cannot be written or uploaded
    /// * The external table cannot be registered (including AlreadyExists)
    pub async fn run(&self) -> Result<RunSummary, Box<dyn Error + Send + Sync>> {
        info!(
            "Starting inventory, bucket={}, table={}",
            self.config.bucket,
            self.config.table_id()
        );

        let listing = collector::list_object_names(self.storage.as_ref()).await?;
        let records = collector::collect_records(
            self.storage.as_ref(),
            &listing.names,
            self.fetch_parallelism,
        )
        .await?;

        writer::write_csv(&self.config.csv_path, &records)?;

        self.storage
            .upload_file(&self.config.csv_path, &self.config.destination_object)
            .await?;

        let source_uri = self.config.source_uri();
        self.warehouse
            .register_external_table(&self.config.dataset, &self.config.table, &source_uri)
            .await?;

        let summary = RunSummary {
            objects: records.len(),
            skipped_markers: listing.skipped,
            csv_path: self.config.csv_path.clone(),
            source_uri,
            table_id: self.config.table_id(),
        };
        info!("Inventory complete, {}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ObjectAttrs, StorageError, StorageResult};
    use crate::warehouse::{WarehouseError, WarehouseResult};
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct FakeStorage {
        names: Vec<String>,
        uploads: Mutex<Vec<(PathBuf, String)>>,
    }

    impl FakeStorage {
        fn new(names: &[&str]) -> Self {
            Self {
                names: names.iter().map(|n| n.to_string()).collect(),
                uploads: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StorageProvider for FakeStorage {
        fn bucket(&self) -> &str {
            "fake-bucket"
        }

        async fn list_objects(&self) -> StorageResult<Vec<String>> {
            Ok(self.names.clone())
        }

        async fn object_attrs(&self, name: &str) -> StorageResult<ObjectAttrs> {
            Ok(ObjectAttrs {
                bucket: "fake-bucket".to_string(),
                name: name.to_string(),
                id: format!("fake-bucket/{}/7", name),
                size: 1024,
                generation: 7,
                metageneration: 1,
                ..ObjectAttrs::default()
            })
        }

        async fn upload_file(&self, local: &Path, destination: &str) -> StorageResult<()> {
            if !local.exists() {
                return Err(StorageError::NotFound(local.display().to_string()));
            }
            self.uploads
                .lock()
                .unwrap()
                .push((local.to_path_buf(), destination.to_string()));
            Ok(())
        }
    }

    struct FakeWarehouse {
        registrations: Mutex<Vec<(String, String, String)>>,
        fail_already_exists: bool,
    }

    impl FakeWarehouse {
        fn new() -> Self {
            Self {
                registrations: Mutex::new(Vec::new()),
                fail_already_exists: false,
            }
        }
    }

    #[async_trait]
    impl Warehouse for FakeWarehouse {
        async fn register_external_table(
            &self,
            dataset: &str,
            table: &str,
            source_uri: &str,
        ) -> WarehouseResult<()> {
            if self.fail_already_exists {
                return Err(WarehouseError::AlreadyExists(format!(
                    "{}.{}",
                    dataset, table
                )));
            }
            self.registrations.lock().unwrap().push((
                dataset.to_string(),
                table.to_string(),
                source_uri.to_string(),
            ));
            Ok(())
        }
    }

    fn test_config(dir: &Path) -> InventoryConfig {
        let mut config = InventoryConfig::new("fake-bucket", "proj", "dataset", "objects");
        config.csv_path = dir.join("inventory.csv");
        config
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FakeStorage::new(&["archive/", "folder/file.txt", "root.txt"]));
        let warehouse = Arc::new(FakeWarehouse::new());

        let inventory = Inventory::builder(test_config(dir.path()))
            .with_storage(storage.clone())
            .with_warehouse(warehouse.clone())
            .build()
            .await
            .unwrap();
        let summary = inventory.run().await.unwrap();

        assert_eq!(summary.objects, 2);
        assert_eq!(summary.skipped_markers, 1);
        assert_eq!(summary.source_uri, "gs://fake-bucket/all_obj_info/all_object_info.csv");
        assert_eq!(summary.table_id, "proj.dataset.objects");

        // CSV exists with header + 2 rows
        let content = std::fs::read_to_string(&summary.csv_path).unwrap();
        assert_eq!(content.lines().count(), 3);

        // Upload went to the configured destination
        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].1, "all_obj_info/all_object_info.csv");

        // Table was registered against the uploaded file
        let registrations = warehouse.registrations.lock().unwrap();
        assert_eq!(
            registrations[0],
            (
                "dataset".to_string(),
                "objects".to_string(),
                "gs://fake-bucket/all_obj_info/all_object_info.csv".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_already_exists_propagates() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FakeStorage::new(&["a.txt"]));
        let mut warehouse = FakeWarehouse::new();
        warehouse.fail_already_exists = true;
        let warehouse = Arc::new(warehouse);

        let inventory = Inventory::builder(test_config(dir.path()))
            .with_storage(storage.clone())
            .with_warehouse(warehouse.clone())
            .build()
            .await
            .unwrap();
        let result = inventory.run().await;

        assert!(result.is_err());
        // Registration failed cleanly, nothing recorded
        assert!(warehouse.registrations.lock().unwrap().is_empty());
        // Earlier stages completed and are not rolled back
        assert_eq!(storage.uploads.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summary_display() {
        let summary = RunSummary {
            objects: 5,
            skipped_markers: 2,
            csv_path: PathBuf::from("out.csv"),
            source_uri: "gs://b/out.csv".to_string(),
            table_id: "p.d.t".to_string(),
        };
        let rendered = summary.to_string();
        assert!(rendered.contains("objects=5"));
        assert!(rendered.contains("skipped_markers=2"));
        assert!(rendered.contains("table=p.d.t"));
    }
}
