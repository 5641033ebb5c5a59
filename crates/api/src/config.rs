use reclip_core::access::GEOFENCE_RADIUS_METERS;
use reclip_storage::StorageConfig;

use crate::auth::jwt::JwtConfig;

/// Route prefix the local object store directory is served under.
pub const MEDIA_ROUTE: &str = "/media";

/// Default upload limit (100 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Externally visible base URL, used for share links and local media URLs.
    pub public_base_url: String,
    /// Geofence radius for playback, in meters (default: `20`).
    pub geofence_radius_m: f64,
    /// Maximum accepted upload body in bytes.
    pub max_upload_bytes: usize,
    /// Bearer token verification settings.
    pub jwt: JwtConfig,
    /// Object store backend.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `PUBLIC_BASE_URL`        | `http://localhost:<PORT>`  |
    /// | `GEOFENCE_RADIUS_METERS` | `20`                       |
    /// | `MAX_UPLOAD_BYTES`       | `104857600`                |
    ///
    /// JWT and storage settings are documented on [`JwtConfig::from_env`] and
    /// [`StorageConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let geofence_radius_m: f64 = std::env::var("GEOFENCE_RADIUS_METERS")
            .map(|v| v.parse().expect("GEOFENCE_RADIUS_METERS must be a number"))
            .unwrap_or(GEOFENCE_RADIUS_METERS);
        assert!(
            geofence_radius_m.is_finite() && geofence_radius_m >= 0.0,
            "GEOFENCE_RADIUS_METERS must be a non-negative number"
        );

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let jwt = JwtConfig::from_env();
        let storage = StorageConfig::from_env(&media_base_url(&public_base_url));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            geofence_radius_m,
            max_upload_bytes,
            jwt,
            storage,
        }
    }
}

/// URL under which locally stored media is served.
pub fn media_base_url(public_base_url: &str) -> String {
    format!("{}{MEDIA_ROUTE}", public_base_url.trim_end_matches('/'))
}
