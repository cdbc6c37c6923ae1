//! Integration Tests for API Endpoints
//!
//! Drives the full request/response cycle against a fake news API served
//! over real HTTP on a loopback port.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use top_news::api::create_router;
use top_news::cache::{CacheKey, CacheStore, ManualClock};
use top_news::news::HackerNewsClient;
use top_news::AppState;

// == Fake Upstream ==

#[derive(Default)]
struct Upstream {
    ranking: Vec<u64>,
    ranking_status: Option<StatusCode>,
    failing_items: HashSet<u64>,
    null_items: HashSet<u64>,
    garbled_items: HashSet<u64>,
    list_calls: AtomicUsize,
    item_calls: AtomicUsize,
}

impl Upstream {
    fn with_ranking(ranking: Vec<u64>) -> Self {
        Self {
            ranking,
            ..Default::default()
        }
    }

    fn total_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.item_calls.load(Ordering::SeqCst)
    }
}

async fn top_stories(State(upstream): State<Arc<Upstream>>) -> Response {
    upstream.list_calls.fetch_add(1, Ordering::SeqCst);
    match upstream.ranking_status {
        Some(status) => (status, "unavailable").into_response(),
        None => Json(upstream.ranking.clone()).into_response(),
    }
}

async fn item(State(upstream): State<Arc<Upstream>>, Path(file): Path<String>) -> Response {
    upstream.item_calls.fetch_add(1, Ordering::SeqCst);
    let Some(id) = file.strip_suffix(".json").and_then(|s| s.parse::<u64>().ok()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if upstream.failing_items.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if upstream.null_items.contains(&id) {
        return Json(Value::Null).into_response();
    }
    if upstream.garbled_items.contains(&id) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    Json(json!({ "id": id, "type": "story", "title": format!("Story {}", id) })).into_response()
}

async fn spawn_upstream(upstream: Arc<Upstream>) -> SocketAddr {
    let app = Router::new()
        .route("/v0/topstories.json", get(top_stories))
        .route("/v0/item/:file", get(item))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

// == Helper Functions ==

struct TestService {
    state: AppState,
    upstream: Arc<Upstream>,
    clock: Arc<ManualClock>,
}

impl TestService {
    fn app(&self) -> Router {
        create_router(self.state.clone())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

async fn create_service(upstream: Upstream, max_entries: usize) -> TestService {
    let upstream = Arc::new(upstream);
    let addr = spawn_upstream(upstream.clone()).await;

    let client =
        HackerNewsClient::new(format!("http://{}/v0", addr), Duration::from_secs(5)).unwrap();
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let store = CacheStore::with_clock(max_entries, 600, clock.clone());
    let state = AppState::with_source(Arc::new(client), store);

    TestService {
        state,
        upstream,
        clock,
    }
}

fn ids_of(body: &Value) -> Vec<u64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect()
}

// == TOP NEWS Endpoint Tests ==

#[tokio::test]
async fn test_top_news_default_count() {
    let service = create_service(Upstream::with_ranking((1..=50).collect()), 100).await;

    let (status, body) = service.get("/top-news/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body[0]["title"], "Story 1");
}

#[tokio::test]
async fn test_repeat_request_served_from_cache() {
    let service = create_service(Upstream::with_ranking((1..=50).collect()), 100).await;

    let (_, first) = service.get("/top-news/?num=5").await;
    let calls = service.upstream.total_calls();
    let (status, second) = service.get("/top-news/?num=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(calls, 6);
    assert_eq!(service.upstream.total_calls(), calls);
}

#[tokio::test]
async fn test_failed_item_dropped_from_result() {
    let mut upstream = Upstream::with_ranking((1..=20).collect());
    upstream.failing_items.insert(3);
    let service = create_service(upstream, 100).await;

    let (status, body) = service.get("/top-news/?num=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&body), vec![1, 2, 4, 5, 6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_null_item_kept_in_position() {
    let mut upstream = Upstream::with_ranking(vec![4, 5, 6]);
    upstream.null_items.insert(5);
    let service = create_service(upstream, 100).await;

    let (status, body) = service.get("/top-news/?num=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["id"], 4);
    assert!(body[1].is_null());
    assert_eq!(body[2]["id"], 6);
}

#[tokio::test]
async fn test_undecodable_item_returns_generic_500() {
    let mut upstream = Upstream::with_ranking(vec![1, 2, 3]);
    upstream.garbled_items.insert(2);
    let service = create_service(upstream, 100).await;

    let (status, body) = service.get("/top-news/?num=3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Error fetching top news" }));
    assert!(service.state.cache.read().await.is_empty());
}

#[tokio::test]
async fn test_ranking_failure_returns_generic_500() {
    let mut upstream = Upstream::with_ranking((1..=20).collect());
    upstream.ranking_status = Some(StatusCode::SERVICE_UNAVAILABLE);
    let service = create_service(upstream, 100).await;

    let (status, body) = service.get("/top-news/?num=10").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Error fetching top news" }));
    assert!(!service
        .state
        .cache
        .read()
        .await
        .contains_fresh(&CacheKey::new(10)));
    assert_eq!(service.upstream.item_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_request_larger_than_ranking() {
    let service = create_service(Upstream::with_ranking(vec![30, 10, 20]), 100).await;

    let (status, body) = service.get("/top-news/?num=25").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_of(&body), vec![30, 10, 20]);
}

#[tokio::test]
async fn test_expired_entry_refetched() {
    let service = create_service(Upstream::with_ranking((1..=5).collect()), 100).await;

    service.get("/top-news/?num=2").await;
    service.clock.advance(Duration::from_secs(601));
    service.get("/top-news/?num=2").await;

    assert_eq!(service.upstream.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_capacity_eviction_of_oldest() {
    let service = create_service(Upstream::with_ranking((1..=20).collect()), 2).await;

    for n in [5, 10, 15] {
        service.get(&format!("/top-news/?num={}", n)).await;
    }
    assert_eq!(service.upstream.list_calls.load(Ordering::SeqCst), 3);

    service.get("/top-news/?num=5").await;
    assert_eq!(service.upstream.list_calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_concurrent_cold_requests() {
    let service = create_service(Upstream::with_ranking((1..=20).collect()), 100).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let app = service.app();
        handles.push(tokio::spawn(async move {
            app.oneshot(
                Request::builder()
                    .uri("/top-news/?num=7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let cache = service.state.cache.read().await;
    assert_eq!(cache.len(), 1);
    assert!(cache.contains_fresh(&CacheKey::new(7)));
}

#[tokio::test]
async fn test_invalid_num_rejected() {
    let service = create_service(Upstream::with_ranking(vec![1]), 100).await;

    let (status, body) = service.get("/top-news/?num=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = service.get("/top-news/?num=-4").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(service.upstream.total_calls(), 0);
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_reflect_hits_and_misses() {
    let service = create_service(Upstream::with_ranking((1..=5).collect()), 100).await;

    service.get("/top-news/?num=3").await; // miss
    service.get("/top-news/?num=3").await; // hit

    let (status, body) = service.get("/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hits"], 1);
    assert_eq!(body["misses"], 1);
    assert_eq!(body["total_entries"], 1);
    assert_eq!(body["hit_rate"], 0.5);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let service = create_service(Upstream::default(), 100).await;

    let (status, body) = service.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}
