//! Tests for the pagination driver
//!
//! The driver is exercised against scripted transports and in-memory stores,
//! with tokio's paused clock standing in for the backoff sleeps.

use super::*;
use crate::error::Error;
use crate::transport::TransportOutput;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Test doubles
// ============================================================================

enum Scripted {
    /// The transport completed with this output
    Output(TransportOutput),
    /// The transport could not be invoked at all
    InvokeError(String),
}

/// Transport that replays a fixed script and records every endpoint asked of it
#[derive(Clone, Default)]
struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    endpoints: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    fn new(steps: Vec<Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(steps.into())),
            endpoints: Arc::default(),
        }
    }

    fn endpoints(&self) -> Vec<String> {
        self.endpoints.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, endpoint: &str) -> Result<TransportOutput> {
        self.endpoints.lock().unwrap().push(endpoint.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::InvokeError(message)) => Err(Error::transport(message)),
            None => panic!("transport script exhausted"),
        }
    }
}

/// Store that collects persisted pages in order
#[derive(Clone, Default)]
struct MemoryStore {
    pages: Arc<Mutex<Vec<(Cursor, Value)>>>,
}

impl MemoryStore {
    fn pages(&self) -> Vec<(Cursor, Value)> {
        self.pages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn persist(&self, cursor: &Cursor, page: &Value) -> Result<()> {
        self.pages.lock().unwrap().push((cursor.clone(), page.clone()));
        Ok(())
    }
}

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl Store for FailingStore {
    async fn persist(&self, _cursor: &Cursor, _page: &Value) -> Result<()> {
        Err(Error::store("disk full"))
    }
}

fn page_body(next_cursor: &str) -> Value {
    json!({
        "users": [{"id": 1, "screen_name": "alice"}],
        "next_cursor_str": next_cursor
    })
}

fn ok(body: &Value) -> Scripted {
    Scripted::Output(TransportOutput::ok(body.to_string()))
}

fn hard_failure(status: i32) -> Scripted {
    Scripted::Output(TransportOutput::new(status, ""))
}

fn driver_for(transport: &ScriptedTransport, store: &MemoryStore) -> PaginationDriver {
    PaginationDriver::new(Box::new(transport.clone()), Box::new(store.clone()))
}

// ============================================================================
// Endpoint construction
// ============================================================================

#[test]
fn test_endpoint_embeds_fixed_query_and_cursor() {
    assert_eq!(
        endpoint_for(&Cursor::start()),
        "/1.1/followers/list.json?skip_status=true&include_user_entities=false&count=200&cursor=-1"
    );
    assert_eq!(
        endpoint_for(&Cursor::new("173")),
        "/1.1/followers/list.json?skip_status=true&include_user_entities=false&count=200&cursor=173"
    );
}

// ============================================================================
// Success path
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_two_pages_then_terminal_without_sleeping() {
    let first = page_body("173");
    let second = page_body("0");
    let transport = ScriptedTransport::new(vec![ok(&first), ok(&second)]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store);

    let started = Instant::now();
    let stats = driver.run().await.unwrap();

    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(
        stats,
        RunStats {
            requests: 2,
            retries: 0,
            pages_persisted: 2
        }
    );
    assert_eq!(
        store.pages(),
        vec![(Cursor::new("-1"), first), (Cursor::new("173"), second)]
    );
    assert_eq!(
        transport.endpoints(),
        vec![
            endpoint_for(&Cursor::new("-1")),
            endpoint_for(&Cursor::new("173"))
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_one_page_persisted_per_cursor_visited() {
    let transport = ScriptedTransport::new(vec![
        ok(&page_body("a")),
        ok(&page_body("b")),
        ok(&page_body("0")),
    ]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store);

    let stats = driver.run().await.unwrap();

    assert_eq!(stats.pages_persisted, 3);
    let keys: Vec<String> = store
        .pages()
        .iter()
        .map(|(cursor, _)| cursor.as_str().to_string())
        .collect();
    assert_eq!(keys, vec!["-1", "a", "b"]);
}

#[tokio::test]
async fn test_seeded_start_cursor_is_used_verbatim() {
    let body = page_body("0");
    let transport = ScriptedTransport::new(vec![ok(&body)]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store)
        .with_config(DriverConfig::new().with_start_cursor(Cursor::new("500")));

    driver.run().await.unwrap();

    assert_eq!(transport.endpoints(), vec![endpoint_for(&Cursor::new("500"))]);
    assert_eq!(store.pages(), vec![(Cursor::new("500"), body)]);
}

#[tokio::test]
async fn test_terminal_start_cursor_makes_no_requests() {
    let transport = ScriptedTransport::new(vec![]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store)
        .with_config(DriverConfig::new().with_start_cursor(Cursor::new("0")));

    let stats = driver.run().await.unwrap();

    assert_eq!(stats, RunStats::new());
    assert!(transport.endpoints().is_empty());
    assert!(store.pages().is_empty());
}

// ============================================================================
// Recovery path
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_failures_retry_same_cursor_with_one_sleep_each() {
    let body = page_body("0");
    let transport = ScriptedTransport::new(vec![
        Scripted::InvokeError("helper not found".to_string()),
        hard_failure(1),
        ok(&body),
    ]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store);

    let started = Instant::now();
    let stats = driver.run().await.unwrap();

    assert_eq!(started.elapsed(), 2 * DEFAULT_BACKOFF);
    assert_eq!(
        stats,
        RunStats {
            requests: 3,
            retries: 2,
            pages_persisted: 1
        }
    );
    let start_endpoint = endpoint_for(&Cursor::start());
    assert_eq!(
        transport.endpoints(),
        vec![start_endpoint.clone(), start_endpoint.clone(), start_endpoint]
    );
    assert_eq!(store.pages(), vec![(Cursor::start(), body)]);
}

#[tokio::test(start_paused = true)]
async fn test_error_list_persists_nothing_for_that_attempt() {
    let error_body = json!({"errors": [{"message": "a"}, {"message": "b"}]});
    let good = page_body("0");
    let transport = ScriptedTransport::new(vec![ok(&error_body), ok(&good)]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store);

    let started = Instant::now();
    let stats = driver.run().await.unwrap();

    assert_eq!(started.elapsed(), DEFAULT_BACKOFF);
    assert_eq!(stats.retries, 1);
    assert_eq!(store.pages(), vec![(Cursor::start(), good)]);
}

#[tokio::test(start_paused = true)]
async fn test_unparseable_body_backs_off_and_retries() {
    let good = page_body("0");
    let transport = ScriptedTransport::new(vec![
        Scripted::Output(TransportOutput::ok("<html>Over capacity</html>")),
        ok(&good),
    ]);
    let store = MemoryStore::default();
    let mut driver = driver_for(&transport, &store);

    let stats = driver.run().await.unwrap();

    assert_eq!(stats.requests, 2);
    assert_eq!(stats.retries, 1);
    let endpoints = transport.endpoints();
    assert_eq!(endpoints[0], endpoints[1]);
}

#[tokio::test(start_paused = true)]
async fn test_configured_backoff_is_honored() {
    let backoff = Duration::from_secs(5);
    let transport = ScriptedTransport::new(vec![hard_failure(1), ok(&page_body("0"))]);
    let store = MemoryStore::default();
    let mut driver =
        driver_for(&transport, &store).with_config(DriverConfig::new().with_backoff(backoff));

    let started = Instant::now();
    driver.run().await.unwrap();

    assert_eq!(started.elapsed(), backoff);
}

// ============================================================================
// Store failures
// ============================================================================

#[tokio::test]
async fn test_store_failure_is_fatal() {
    let transport = ScriptedTransport::new(vec![ok(&page_body("0"))]);
    let mut driver = PaginationDriver::new(Box::new(transport.clone()), Box::new(FailingStore));

    let err = driver.run().await.unwrap_err();

    assert!(matches!(err, Error::Store { .. }));
    assert_eq!(transport.endpoints().len(), 1);
}
