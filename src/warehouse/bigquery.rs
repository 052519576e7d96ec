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
use gcp_bigquery_client::error::BQError;
use gcp_bigquery_client::model::csv_options::CsvOptions;
use gcp_bigquery_client::model::external_data_configuration::ExternalDataConfiguration;
use gcp_bigquery_client::model::table::Table;
use gcp_bigquery_client::model::table_field_schema::TableFieldSchema;
use gcp_bigquery_client::model::table_schema::TableSchema;
use gcp_bigquery_client::Client;
use tracing::info;

use super::error::{WarehouseError, WarehouseResult};
use crate::config::InventoryConfig;

/// Trait for the warehouse side of the pipeline.
///
/// One operation: bind an already-uploaded delimited file to a new external
/// table definition. Kept as a trait so the pipeline can run against a test
/// double without a live warehouse.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Register an external table reading from `source_uri`.
    ///
    /// The declared schema mirrors the inventory record fields and the first
    /// row of the source file (the CSV header) is skipped.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::AlreadyExists` if a table with that name is
    /// already registered in the dataset, `WarehouseError::NotFound` if the
    /// dataset does not exist. Neither case leaves a partially created table.
    async fn register_external_table(
        &self,
        dataset: &str,
        table: &str,
        source_uri: &str,
    ) -> WarehouseResult<()>;
}

/// BigQuery-backed warehouse publisher.
///
/// Credentials resolve in order: inline service account JSON, service account
/// key file, Application Default Credentials.
pub struct BigQueryPublisher {
    client: Client,
    project_id: String,
}

impl BigQueryPublisher {
    /// Create a publisher for the project named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns `WarehouseError::CredentialsError` if the credential source
    /// cannot be read or the client cannot be authenticated.
    pub async fn new(config: &InventoryConfig) -> WarehouseResult<Self> {
        let client = Self::create_client(config).await?;
        Ok(Self {
            client,
            project_id: config.project_id.clone(),
        })
    }

    async fn create_client(config: &InventoryConfig) -> WarehouseResult<Client> {
        let client = if let Some(json) = &config.credentials_json {
            let sa_key = serde_json::from_str(json).map_err(|e| {
                WarehouseError::CredentialsError(format!("Invalid credentials JSON: {}", e))
            })?;
            Client::from_service_account_key(sa_key, false)
                .await
                .map_err(|e| {
                    WarehouseError::CredentialsError(format!(
                        "Failed to create BigQuery client from credentials: {}",
                        e
                    ))
                })?
        } else if let Some(file_path) = &config.credentials_file {
            let sa_key = gcp_bigquery_client::yup_oauth2::read_service_account_key(file_path)
                .await
                .map_err(|e| {
                    WarehouseError::CredentialsError(format!(
                        "Failed to read credentials from '{}': {}",
                        file_path, e
                    ))
                })?;
            Client::from_service_account_key(sa_key, false)
                .await
                .map_err(|e| {
                    WarehouseError::CredentialsError(format!(
                        "Failed to create BigQuery client from file: {}",
                        e
                    ))
                })?
        } else {
            // Application Default Credentials
            Client::from_application_default_credentials()
                .await
                .map_err(|e| {
                    WarehouseError::CredentialsError(format!(
                        "Failed to create BigQuery client with ADC: {}",
                        e
                    ))
                })?
        };

        Ok(client)
    }

    /// Declared schema of the inventory table.
    ///
    /// Field order matches the CSV column order. Everything is STRING except
    /// `updated` (TIMESTAMP) and the generation counters (INTEGER).
    pub fn inventory_schema() -> Vec<TableFieldSchema> {
        vec![
            TableFieldSchema::string("bucket_name"),
            TableFieldSchema::string("blob_name"),
            TableFieldSchema::string("gcs_object_name"),
            TableFieldSchema::string("gcs_path"),
            TableFieldSchema::string("storage_class"),
            TableFieldSchema::string("id"),
            TableFieldSchema::string("size"),
            TableFieldSchema::timestamp("updated"),
            TableFieldSchema::integer("generation"),
            TableFieldSchema::integer("metageneration"),
            TableFieldSchema::string("etag"),
            TableFieldSchema::string("owner"),
            TableFieldSchema::string("component_count"),
            TableFieldSchema::string("crc32c"),
            TableFieldSchema::string("md5_hash"),
            TableFieldSchema::string("cache_control"),
            TableFieldSchema::string("content_type"),
            TableFieldSchema::string("content_disposition"),
            TableFieldSchema::string("content_encoding"),
            TableFieldSchema::string("content_language"),
            TableFieldSchema::string("metadata"),
            TableFieldSchema::string("media_link"),
            TableFieldSchema::string("custom_time"),
            TableFieldSchema::string("temporary_hold"),
            TableFieldSchema::string("event_based_hold"),
            TableFieldSchema::string("retention_expiration_time"),
        ]
    }
}

/// Map BigQuery API errors onto the failure classes callers act on.
fn classify(table_id: &str, err: BQError) -> WarehouseError {
    if let BQError::ResponseError { error } = &err {
        match error.error.code {
            404 => {
                return WarehouseError::NotFound(format!("{}: {}", table_id, error.error.message));
            }
            409 => {
                return WarehouseError::AlreadyExists(format!(
                    "{}: {}",
                    table_id, error.error.message
                ));
            }
            _ => {}
        }
    }
    WarehouseError::BigQueryError(err)
}

#[async_trait]
impl Warehouse for BigQueryPublisher {
    async fn register_external_table(
        &self,
        dataset: &str,
        table: &str,
        source_uri: &str,
    ) -> WarehouseResult<()> {
        let schema = TableSchema::new(Self::inventory_schema());
        let mut table_def = Table::new(&self.project_id, dataset, table, schema);
        table_def.external_data_configuration = Some(ExternalDataConfiguration {
            source_uris: vec![source_uri.to_string()],
            source_format: "CSV".to_string(),
            csv_options: Some(CsvOptions {
                skip_leading_rows: Some("1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let table_id = format!("{}.{}.{}", self.project_id, dataset, table);
        self.client
            .table()
            .create(table_def)
            .await
            .map_err(|e| classify(&table_id, e))?;

        info!(
            "Registered external table, table={}, source={}",
            table_id, source_uri
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::record::ObjectRecord;
    use gcp_bigquery_client::model::field_type::FieldType;

    #[test]
    fn test_schema_field_names_match_csv_columns() {
        let schema = BigQueryPublisher::inventory_schema();
        let names: Vec<&str> = schema.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ObjectRecord::COLUMNS);
    }

    #[test]
    fn test_schema_declared_types() {
        let schema = BigQueryPublisher::inventory_schema();
        assert_eq!(schema.len(), 26);

        for field in &schema {
            match field.name.as_str() {
                "updated" => assert!(matches!(field.r#type, FieldType::Timestamp)),
                "generation" | "metageneration" => {
                    assert!(matches!(field.r#type, FieldType::Integer))
                }
                _ => assert!(
                    matches!(field.r#type, FieldType::String),
                    "field {} should be STRING",
                    field.name
                ),
            }
        }
    }
}
