//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the full
//! router, so tests exercise the same middleware stack production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use unipath_api::config::ServerConfig;
use unipath_api::metadata::MetadataCache;
use unipath_api::router::build_app_router;
use unipath_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        metadata_cache: MetadataCache::new(),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Percent-encode a query parameter value (the fixture data is Chinese).
#[allow(dead_code)]
pub fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

/// A school document in the seed format, with one main campus in `city`.
pub fn school_doc(
    id: &str,
    name: &str,
    school_type: &str,
    city: &str,
    departments: Vec<Value>,
) -> Value {
    json!({
        "school_id": id,
        "school_name": name,
        "school_type": school_type,
        "school_url": "https://example.edu.tw",
        "school_images": ["campus.jpg"],
        "campuses": [{
            "campus_id": format!("{id}-main"),
            "campus_name": "校本部",
            "is_main": true,
            "location": { "city": city, "district": "某區", "address": "某路1號" },
        }],
        "departments": departments,
    })
}

/// A department document with the given 114-year admission plans.
#[allow(dead_code)]
pub fn department_doc(id: &str, name: &str, group: &str, campus_id: &str, plans: Value) -> Value {
    json!({
        "department_id": id,
        "department_name": name,
        "college": "測試學院",
        "academic_group": group,
        "campus_ids": [campus_id],
        "admission_data": { "114": { "plans": plans } },
    })
}
