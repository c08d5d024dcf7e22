//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use api::{ApiClient, Session};
use serde_json::{json, Value};
use store::MemoryTokenStore;
use wiremock::MockServer;

pub const TOKEN: &str = "T";

/// A client against `server`, plus a handle on its token store.
pub fn client(server: &MockServer, token: Option<&str>) -> (ApiClient, MemoryTokenStore) {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    let client = ApiClient::new(&server.uri(), Session::new(store.clone()))
        .expect("mock server uri is a valid base url");
    (client, store)
}

/// A client whose base URL refuses connections.
pub async fn unreachable_client(token: Option<&str>) -> (ApiClient, MemoryTokenStore) {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    let client = ApiClient::new(&uri, Session::new(store.clone())).expect("valid base url");
    (client, store)
}

pub fn user_json(id: i64, role: &str) -> Value {
    json!({
        "id": id,
        "email": format!("user{id}@x.com"),
        "role": role,
        "status": "active",
        "about": null,
        "tags": []
    })
}

pub fn project_json(id: i64, employer_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "Build something",
        "budget": 1000.0,
        "status": status,
        "employer_id": employer_id
    })
}

pub fn application_json(id: i64, project_id: i64, freelancer_id: i64) -> Value {
    json!({
        "id": id,
        "project_id": project_id,
        "freelancer_id": freelancer_id,
        "proposal_text": "I can do it",
        "proposed_price": 250.0,
        "status": "pending",
        "created_at": "2024-05-01T10:07:00"
    })
}

pub fn review_json(id: i64, reviewer_id: i64, target_id: i64, rating: u8) -> Value {
    json!({
        "id": id,
        "reviewer_id": reviewer_id,
        "target_user_id": target_id,
        "rating": rating,
        "comment": "Great work",
        "created_at": "2024-05-01T10:07:00Z"
    })
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
