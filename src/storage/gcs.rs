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
use google_cloud_storage::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::get::GetObjectRequest;
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use google_cloud_storage::http::objects::Object;
use google_cloud_storage::http::Error as GcsHttpError;
use std::path::Path;
use tracing::{debug, info};

use super::error::{StorageError, StorageResult};
use super::provider::{ObjectAttrs, StorageProvider};
use crate::config::InventoryConfig;

/// Storage provider backed by Google Cloud Storage.
///
/// Bound to a single bucket. Credentials resolve in order: inline service
/// account JSON, service account key file, Application Default Credentials.
pub struct GcsProvider {
    client: Client,
    bucket: String,
}

impl GcsProvider {
    /// Create a provider for the bucket named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CredentialsError` if the credential source
    /// cannot be read or the client cannot be authenticated.
    pub async fn new(config: &InventoryConfig) -> StorageResult<Self> {
        let client_config = Self::client_config(config).await?;
        Ok(Self {
            client: Client::new(client_config),
            bucket: config.bucket.clone(),
        })
    }

    async fn client_config(config: &InventoryConfig) -> StorageResult<ClientConfig> {
        if let Some(json) = &config.credentials_json {
            let creds: CredentialsFile = serde_json::from_str(json).map_err(|e| {
                StorageError::CredentialsError(format!("Invalid credentials JSON: {}", e))
            })?;
            ClientConfig::default()
                .with_credentials(creds)
                .await
                .map_err(|e| {
                    StorageError::CredentialsError(format!("Failed to load credentials: {}", e))
                })
        } else if let Some(file_path) = &config.credentials_file {
            let creds = CredentialsFile::new_from_file(file_path.to_string())
                .await
                .map_err(|e| {
                    StorageError::CredentialsError(format!(
                        "Failed to load credentials from '{}': {}",
                        file_path, e
                    ))
                })?;
            ClientConfig::default()
                .with_credentials(creds)
                .await
                .map_err(|e| {
                    StorageError::CredentialsError(format!(
                        "Failed to configure credentials: {}",
                        e
                    ))
                })
        } else {
            // Application Default Credentials
            ClientConfig::default().with_auth().await.map_err(|e| {
                StorageError::CredentialsError(format!(
                    "Failed to initialize GCS client with ADC: {}",
                    e
                ))
            })
        }
    }
}

fn is_not_found(err: &GcsHttpError) -> bool {
    matches!(err, GcsHttpError::Response(response) if response.code == 404)
}

impl From<Object> for ObjectAttrs {
    fn from(object: Object) -> Self {
        Self {
            bucket: object.bucket,
            name: object.name,
            id: object.id,
            storage_class: object.storage_class.unwrap_or_default(),
            size: object.size as u64,
            updated: object.updated,
            generation: object.generation,
            metageneration: object.metageneration,
            etag: object.etag,
            owner: object.owner.map(|o| o.entity),
            // Not exposed by google-cloud-storage 0.24's Object type.
            component_count: None,
            crc32c: object.crc32c,
            md5_hash: object.md5_hash,
            cache_control: object.cache_control,
            content_type: object.content_type,
            content_disposition: object.content_disposition,
            content_encoding: object.content_encoding,
            content_language: object.content_language,
            metadata: object.metadata.map(|m| m.into_iter().collect()),
            media_link: object.media_link,
            custom_time: object.custom_time,
            temporary_hold: object.temporary_hold.unwrap_or(false),
            event_based_hold: object.event_based_hold.unwrap_or(false),
            retention_expiration_time: object.retention_expiration_time,
        }
    }
}

#[async_trait]
impl StorageProvider for GcsProvider {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn list_objects(&self) -> StorageResult<Vec<String>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_objects(&ListObjectsRequest {
                    bucket: self.bucket.clone(),
                    page_token: page_token.clone(),
                    ..Default::default()
                })
                .await?;

            if let Some(items) = response.items {
                debug!("Listed page, count={}", items.len());
                names.extend(items.into_iter().map(|object| object.name));
            }

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(names)
    }

    async fn object_attrs(&self, name: &str) -> StorageResult<ObjectAttrs> {
        let object = self
            .client
            .get_object(&GetObjectRequest {
                bucket: self.bucket.clone(),
                object: name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    StorageError::NotFound(format!("gs://{}/{}", self.bucket, name))
                } else {
                    StorageError::GcsError(e)
                }
            })?;

        Ok(object.into())
    }

    async fn upload_file(&self, local: &Path, destination: &str) -> StorageResult<()> {
        let data = tokio::fs::read(local).await?;
        let byte_count = data.len();

        let mut media = Media::new(destination.to_string());
        media.content_type = "text/csv".into();
        let upload_type = UploadType::Simple(media);

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await?;

        info!(
            "Uploaded {} ({} bytes) to gs://{}/{}",
            local.display(),
            byte_count,
            self.bucket,
            destination
        );
        Ok(())
    }
}
