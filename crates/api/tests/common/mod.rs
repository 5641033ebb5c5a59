#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reclip_api::auth::jwt::{generate_access_token, JwtConfig};
use reclip_api::config::{media_base_url, ServerConfig};
use reclip_api::router::build_app_router;
use reclip_api::state::AppState;
use reclip_storage::config::LocalConfig;
use reclip_storage::StorageConfig;

pub const PUBLIC_BASE_URL: &str = "http://reclip.test";

/// Build a test `ServerConfig` with safe defaults and a local object store
/// rooted at `media_root`.
pub fn test_config(media_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: PUBLIC_BASE_URL.to_string(),
        geofence_radius_m: 20.0,
        max_upload_bytes: 1024 * 1024,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
        storage: StorageConfig::Local(LocalConfig {
            root: media_root,
            public_base_url: media_base_url(PUBLIC_BASE_URL),
        }),
    }
}

/// Build the full application router, storing uploads under `media_root`.
pub async fn build_test_app_with_media(pool: PgPool, media_root: PathBuf) -> Router {
    let config = test_config(media_root);
    let object_store = reclip_storage::build_object_store(&config.storage).await;
    let state = AppState::new(pool, Arc::new(config.clone()), object_store);
    build_app_router(state, &config)
}

/// Build the full application router with a throwaway media directory.
pub async fn build_test_app(pool: PgPool) -> Router {
    let media_root = std::env::temp_dir().join(format!("reclip-test-{}", uuid::Uuid::new_v4()));
    build_test_app_with_media(pool, media_root).await
}

/// Mint a bearer token for `principal_id` signed with the test secret.
pub fn bearer(principal_id: &str) -> String {
    let config = test_config(PathBuf::new());
    let token = generate_access_token(principal_id, &config.jwt).unwrap();
    format!("Bearer {token}")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, principal_id: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", bearer(principal_id))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    principal_id: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", bearer(principal_id))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "reclip-test-boundary";

/// Encode `(name, content_type, bytes)` parts as a multipart/form-data body.
/// A `None` content type produces a plain text field.
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match content_type {
            Some(ct) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}.bin\"\r\n\
                     Content-Type: {ct}\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    principal_id: Option<&str>,
    body: Vec<u8>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri).header(
        "content-type",
        format!("multipart/form-data; boundary={BOUNDARY}"),
    );
    if let Some(principal_id) = principal_id {
        builder = builder.header("authorization", bearer(principal_id));
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
