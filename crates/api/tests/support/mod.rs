#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use profilegate_api::{router, AppContext, IDENTITY_HEADER};
use profilegate_domain::{AppConfig, Identity};
use profilegate_infra::InMemoryIdentityRepository;
use tower::ServiceExt;

/// Router wired to an in-memory store the test can inspect directly.
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryIdentityRepository>,
}

/// Create a test app seeded with `identities`.
pub fn setup_test_app(identities: impl IntoIterator<Item = Identity>) -> TestApp {
    let repository = Arc::new(InMemoryIdentityRepository::with_identities(identities));
    let ctx = AppContext::with_repository(AppConfig::default(), repository.clone());
    TestApp { router: router(Arc::new(ctx)), repository }
}

pub fn regular(id: i64, name: &str, phone: &str) -> Identity {
    Identity::new(id, name, phone)
}

pub fn admin(id: i64, name: &str, phone: &str) -> Identity {
    Identity::new(id, name, phone).with_admin(true)
}

/// Send one request through the router and collect the response.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    acting_id: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(acting_id) = acting_id {
        builder = builder.header(IDENTITY_HEADER, acting_id);
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("request builds");

    let response = router.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body collects");
    (status, bytes)
}

pub fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("response body is JSON")
}
