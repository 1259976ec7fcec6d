//! Client tests against a real server on an ephemeral port

mod support;

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use taskhint::client::{DebouncedSuggester, SuggestionClient};
use taskhint::server::{router, AppState};
use taskhint_core::error::SuggestError;
use taskhint_core::service::SuggestionService;

use support::sample_tasks;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new(SuggestionService::default())).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> SuggestionClient {
    SuggestionClient::new(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap()
}

/// Address nothing is listening on
async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn tasks() -> Vec<Value> {
    sample_tasks().as_array().unwrap().clone()
}

#[tokio::test]
async fn test_fetch_similar() {
    let client = client_for(spawn_server().await);
    let outcome = client.fetch_similar("buy", "milk", &tasks()).await.unwrap();

    assert_eq!(outcome.suggestions[0].title, "Buy milk and eggs");
    assert!(outcome.suggestions[0].similarity_score > 0.0);
    assert_eq!(outcome.auto_category.as_deref(), Some("shopping"));
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    // No server needed: blank input never leaves the client
    let client = client_for(closed_port().await);
    let outcome = client.fetch_similar("  ", "", &tasks()).await.unwrap();
    assert!(outcome.suggestions.is_empty());
}

#[tokio::test]
async fn test_server_error_envelope_becomes_remote_error() {
    let client = client_for(spawn_server().await);
    let bad_tasks = vec![json!({"description": "no title"})];

    let err = client.fetch_similar("walk", "", &bad_tasks).await.unwrap_err();
    assert!(matches!(err, SuggestError::Remote(_)));
    assert!(err.to_string().contains("missing title"));

    // The lenient call degrades instead
    assert!(client.similar_tasks("walk", "", &bad_tasks).await.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_degrades_to_empty() {
    let client = client_for(closed_port().await);
    assert!(client.fetch_similar("walk", "", &tasks()).await.is_err());
    assert!(client.similar_tasks("walk", "", &tasks()).await.is_empty());
}

#[tokio::test]
async fn test_category() {
    let client = client_for(spawn_server().await);
    assert_eq!(
        client.suggested_category("Buy groceries", "").await,
        "shopping"
    );
}

#[tokio::test]
async fn test_category_falls_back_to_personal() {
    let client = client_for(closed_port().await);
    assert!(client.fetch_category("Finish project", "").await.is_err());
    assert_eq!(
        client.suggested_category("Finish project", "").await,
        "personal"
    );
}

#[tokio::test]
async fn test_debounced_suggester_over_http() {
    let client = client_for(spawn_server().await);
    let (suggester, mut results) = DebouncedSuggester::new(client, Duration::from_millis(20));

    suggester.input("rea", "", tasks());
    suggester.input("read a bo", "", tasks());
    suggester.input("read a book", "", tasks());
    suggester.settle().await;

    assert!(results.has_changed().unwrap());
    let latest = results.borrow_and_update().clone();
    assert_eq!(latest[0].title, "Read a book");
    assert_eq!(latest[0].similarity_score, 1.0);
}
