//! Shared test harness for E2E integration tests.
//!
//! Drives the real router through `tower::oneshot`, or serves it on a local
//! port so the health-check probe can reach it over TCP.

#![allow(dead_code)]

use std::future::IntoFuture;
use std::net::SocketAddr;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use items_api::routes::build_router;
use items_api::state::AppState;
use items_api::store::{ItemStore, MemoryItemStore, StoreError};
use items_protocol::{Item, NewItem};

/// End-to-end harness around the API router.
pub struct TestHarness {
    /// Backing store when the harness runs in memory (for direct assertions).
    pub store: Option<MemoryItemStore>,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
}

impl TestHarness {
    /// Harness over an empty in-memory store.
    pub fn new() -> Self {
        Self::with_memory_store(MemoryItemStore::new())
    }

    /// Harness over a given in-memory store.
    pub fn with_memory_store(store: MemoryItemStore) -> Self {
        Self {
            router: build_router(AppState::new(store.clone())),
            store: Some(store),
        }
    }

    /// Harness over an arbitrary store.
    pub fn with_store(store: impl ItemStore + 'static) -> Self {
        Self {
            router: build_router(AppState::new(store)),
            store: None,
        }
    }

    /// Send a request and return (status, JSON body).
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// GET /status.
    pub async fn status(&self) -> (StatusCode, serde_json::Value) {
        self.request(Request::get("/status").body(Body::empty()).unwrap())
            .await
    }

    /// GET /items.
    pub async fn list(&self) -> (StatusCode, serde_json::Value) {
        self.request(Request::get("/items").body(Body::empty()).unwrap())
            .await
    }

    /// POST /items with a JSON body.
    pub async fn create(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.request(
            Request::post("/items")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// DELETE /items/{id}.
    pub async fn delete(&self, id: impl std::fmt::Display) -> (StatusCode, serde_json::Value) {
        self.request(
            Request::delete(format!("/items/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Ids returned by GET /items, in response order.
    pub async fn listed_ids(&self) -> Vec<i64> {
        let (status, json) = self.list().await;
        assert_eq!(status, StatusCode::OK);
        json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_i64().unwrap())
            .collect()
    }

    /// `count` field of GET /items.
    pub async fn count(&self) -> u64 {
        let (status, json) = self.list().await;
        assert_eq!(status, StatusCode::OK);
        json["count"].as_u64().unwrap()
    }
}

/// Serve `router` on an ephemeral localhost port. The server task runs until
/// the test runtime shuts down.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(axum::serve(listener, router).into_future());
    addr
}

/// Store that fails every operation the way an unreachable database would.
pub struct UnavailableStore;

#[async_trait]
impl ItemStore for UnavailableStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Err(StoreError::Connect(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _item: NewItem) -> Result<Item, StoreError> {
        Err(StoreError::Connect(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Connect(sqlx::Error::PoolTimedOut))
    }

    fn backend_name(&self) -> &str {
        "unavailable"
    }
}
