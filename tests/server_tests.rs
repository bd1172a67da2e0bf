//! HTTP surface integration tests
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`, injecting
//! the caller address the way `into_make_service_with_connect_info` would.

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::ConnectInfo;
use axum::http::{Request, StatusCode};
use codesmith::access::AccessGuard;
use codesmith::config::AppConfig;
use codesmith::generators::GeneratorRegistry;
use codesmith::server::{AppState, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

fn app(allowed_ips: &[&str]) -> Router {
    let state = AppState {
        registry: Arc::new(GeneratorRegistry::builtin().unwrap()),
        guard: Arc::new(AccessGuard::new(
            allowed_ips.iter().map(|s| s.to_string()).collect(),
        )),
        config: Arc::new(AppConfig::default()),
    };
    router(state)
}

async fn send(app: Router, caller_ip: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let addr = SocketAddr::new(caller_ip.parse().unwrap(), 54321);

    let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_loopback_caller_is_served() {
    let (status, body) = send(app(&["127.0.0.1", "::1"]), "127.0.0.1", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "codesmith");
    assert_eq!(body["generator_count"], 5);
}

#[tokio::test]
async fn test_remote_caller_gets_403() {
    let (status, body) = send(app(&["127.0.0.1", "::1"]), "10.0.0.5", "/generators").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You are not allowed to access this page.");
}

#[tokio::test]
async fn test_denied_caller_hits_no_handler() {
    // Even an unroutable path must produce the 403, not a 404
    let (status, body) = send(app(&["127.0.0.1"]), "10.0.0.5", "/no/such/path").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You are not allowed to access this page.");
}

#[tokio::test]
async fn test_ipv6_loopback_admitted() {
    let (status, _) = send(app(&["127.0.0.1", "::1"]), "::1", "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_segment_wildcard_admits_network() {
    let app_router = app(&["192.168.0.*"]);
    let (status, _) = send(app_router.clone(), "192.168.0.42", "/").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app_router, "192.168.1.1", "/").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_universal_wildcard_admits_remote_caller() {
    let (status, _) = send(app(&["*"]), "203.0.113.7", "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_generator_listing() {
    let (status, body) = send(app(&["127.0.0.1"]), "127.0.0.1", "/generators").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["controller", "crud", "form", "model", "module"]);

    assert_eq!(body[1]["title"], "CRUD Generator");
    assert!(body[1]["description"].as_str().unwrap().contains("CRUD"));
}

#[tokio::test]
async fn test_generator_detail() {
    let (status, body) = send(app(&["127.0.0.1"]), "127.0.0.1", "/generators/model").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "model");
    assert_eq!(body["title"], "Model Generator");
    assert_eq!(body["options"]["module_path"], "app::models");
    assert!(body["options_schema"]["properties"].get("table_name").is_some());
}

#[tokio::test]
async fn test_allowed_caller_unknown_route_404() {
    let (status, body) = send(app(&["127.0.0.1"]), "127.0.0.1", "/no/such/path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No such route: /no/such/path");
}

#[tokio::test]
async fn test_unknown_generator_404() {
    let (status, body) = send(app(&["127.0.0.1"]), "127.0.0.1", "/generators/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown generator: nope");
}
