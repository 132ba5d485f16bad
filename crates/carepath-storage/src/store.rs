use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;

/// A flat key → bytes document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document. Missing keys return [`StorageError::NotFound`].
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Keys under `prefix`, sorted.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// Documents kept as objects in a single S3 bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for S3Store {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        tracing::debug!(bucket = %self.bucket, key, "s3 get");
        objects::get_object(&self.client, &self.bucket, key).await
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        tracing::debug!(bucket = %self.bucket, key, size = body.len(), "s3 put");
        objects::put_object(&self.client, &self.bucket, key, body, content_type).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        tracing::debug!(bucket = %self.bucket, key, "s3 delete");
        objects::delete_object(&self.client, &self.bucket, key).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = objects::list_objects(&self.client, &self.bucket, prefix).await?;
        keys.sort();
        Ok(keys)
    }
}
