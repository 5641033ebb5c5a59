//! S3-backed object store.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::config::S3Config;
use crate::{public_url, validate_key, ObjectStore, StorageError, StoredObject};

/// Provider name attached to credentials read from the environment.
const ENV_CREDENTIALS_PROVIDER: &str = "reclip-env";

/// HTTP status S3 returns when a conditional write finds the key taken.
const PRECONDITION_FAILED: u16 = 412;

/// Writes blobs to a single bucket.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build an SDK client from the config.
    ///
    /// Static credentials win when both halves are set; otherwise the default
    /// provider chain (env, profile, IMDS) applies.
    pub async fn connect(config: &S3Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key_id.clone(),
                secret.clone(),
                None,
                None,
                ENV_CREDENTIALS_PROVIDER,
            ));
        }

        let sdk_config = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = ?config.endpoint,
            "S3 object store configured"
        );

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        validate_key(key)?;
        let stored = StoredObject::describe(key, public_url(&self.public_base_url, key), &bytes);

        // `If-None-Match: *` makes the write conditional on the key being free.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .if_none_match("*")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                let status = e.raw_response().map(|r| r.status().as_u16());
                if status == Some(PRECONDITION_FAILED) {
                    StorageError::AlreadyExists(key.to_string())
                } else {
                    StorageError::Backend(DisplayErrorContext(e).to_string())
                }
            })?;

        tracing::debug!(
            bucket = %self.bucket,
            key,
            size = stored.size_bytes,
            "Stored object in S3"
        );
        Ok(stored)
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}
