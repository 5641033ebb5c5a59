use std::path::PathBuf;

/// Object store backend selection, loaded from the environment.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Local(LocalConfig),
    S3(S3Config),
}

/// Filesystem backend settings.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    /// Directory blobs are written under.
    pub root: PathBuf,
    /// URL prefix the API serves `root` from.
    pub public_base_url: String,
}

/// S3 backend settings.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible stores (MinIO, R2). Enables path-style addressing.
    pub endpoint: Option<String>,
    /// Static credentials; when absent the default AWS provider chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Public URL prefix objects are reachable at (bucket website or CDN).
    pub public_base_url: String,
}

/// Default directory for the local backend.
const DEFAULT_LOCAL_DIR: &str = "storage";

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var                 | Required      | Default                        |
    /// |-------------------------|---------------|--------------------------------|
    /// | `STORAGE_BACKEND`       | no            | `local`                        |
    /// | `LOCAL_STORAGE_DIR`     | no            | `storage`                      |
    /// | `S3_BUCKET`             | s3 only       | --                             |
    /// | `S3_REGION`             | no            | `us-east-1`                    |
    /// | `S3_ENDPOINT`           | no            | --                             |
    /// | `S3_ACCESS_KEY_ID`      | no            | --                             |
    /// | `S3_SECRET_ACCESS_KEY`  | no            | --                             |
    /// | `S3_PUBLIC_BASE_URL`    | no            | `https://<bucket>.s3.<region>.amazonaws.com` |
    ///
    /// `media_base_url` is the URL the API serves the local directory from.
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend name or when `S3_BUCKET` is missing for
    /// the s3 backend.
    pub fn from_env(media_base_url: &str) -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());

        match backend.as_str() {
            "local" => Self::Local(LocalConfig {
                root: std::env::var("LOCAL_STORAGE_DIR")
                    .unwrap_or_else(|_| DEFAULT_LOCAL_DIR.into())
                    .into(),
                public_base_url: media_base_url.to_string(),
            }),
            "s3" => {
                let bucket = std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3");
                let region = std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into());
                let public_base_url = std::env::var("S3_PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| format!("https://{bucket}.s3.{region}.amazonaws.com"));
                Self::S3(S3Config {
                    bucket,
                    region,
                    endpoint: std::env::var("S3_ENDPOINT").ok(),
                    access_key_id: std::env::var("S3_ACCESS_KEY_ID").ok(),
                    secret_access_key: std::env::var("S3_SECRET_ACCESS_KEY").ok(),
                    public_base_url,
                })
            }
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Must be one of: local, s3"),
        }
    }

    /// Directory the API should serve under its media route, if any.
    pub fn served_dir(&self) -> Option<&PathBuf> {
        match self {
            Self::Local(local) => Some(&local.root),
            Self::S3(_) => None,
        }
    }
}
