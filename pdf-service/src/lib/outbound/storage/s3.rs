use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::AwsConfig;
use crate::document::errors::StorageError;
use crate::outbound::load_aws_config;

/// S3-backed store for rendered documents.
#[derive(Debug, Clone)]
pub struct S3DocumentStore {
    client: Client,
    bucket: String,
}

impl S3DocumentStore {
    /// Connect to S3 and ensure the target bucket exists.
    ///
    /// Path-style addressing is enabled when an explicit endpoint is
    /// configured, since virtual-hosted addressing does not work against
    /// local development endpoints.
    ///
    /// # Errors
    /// * `ConnectionFailed` - The bucket could not be created or verified
    pub async fn connect(config: &AwsConfig) -> Result<Self, StorageError> {
        let sdk_config = load_aws_config(config).await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();
        let client = Client::from_conf(s3_config);

        let store = Self {
            client,
            bucket: config.bucket_name.clone(),
        };
        store.ensure_bucket().await?;

        tracing::info!(bucket = %store.bucket, "Connected to document store");

        Ok(store)
    }

    async fn ensure_bucket(&self) -> Result<(), StorageError> {
        if self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok()
        {
            return Ok(());
        }

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Ok(())
    }

    /// Upload a rendered PDF under the given key.
    ///
    /// # Errors
    /// * `PutFailed` - The upload did not complete
    pub async fn put_pdf(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/pdf")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::PutFailed(e.to_string()))?;

        Ok(())
    }
}
