//! Context store unit tests

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use nimbus_bridge::account::client::AccountClient;
use nimbus_bridge::account::session::AccountSession;
use nimbus_bridge::config::AccountConfig;
use nimbus_bridge::context::ContextStore;
use nimbus_bridge::errors::ContextError;

use crate::support::FakeClient;

fn session() -> Arc<AccountSession> {
    let client: Arc<dyn AccountClient> = Arc::new(FakeClient::valid_with(Vec::new()));
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
    }))
    .unwrap();
    Arc::new(AccountSession::new(client, config))
}

#[tokio::test]
async fn test_get_before_put_rejected() {
    let store = ContextStore::new();

    let result = store.get().await;
    assert!(matches!(result, Err(ContextError::NotInitialized)));
}

#[tokio::test]
async fn test_get_returns_stored_session() {
    let store = ContextStore::new();
    let session = session();

    store.put(session.clone()).await.unwrap();

    let first = store.get().await.unwrap();
    let second = store.get().await.unwrap();
    assert!(Arc::ptr_eq(&first, &session));
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_double_put_rejected() {
    let store = ContextStore::new();

    store.put(session()).await.unwrap();
    let result = store.put(session()).await;

    assert!(matches!(result, Err(ContextError::AlreadyInitialized)));
}

#[tokio::test]
async fn test_session_exposes_account_details() {
    let client: Arc<dyn AccountClient> = Arc::new(FakeClient::valid_with(Vec::new()));
    let config = AccountConfig::validate(&json!({
        "username": "user@example.com",
        "password": "hunter2",
        "cameras": {
            "porch": { "username": "cam", "password": "stream-pw" },
        },
    }))
    .unwrap();

    let session = AccountSession::new(client.clone(), config);

    assert!(Arc::ptr_eq(session.client(), &client));
    assert_eq!(session.config().username, "user@example.com");
    assert!(session.config().cameras.contains_key("porch"));
    assert!(session.connected_at() <= Utc::now());
}
