//! End-to-end tests for the customer API
//!
//! The router runs over the in-memory store, so these tests cover the full
//! handler -> service -> gateway path without a database.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_customer::ports::mock::MockCustomerStore;
use domain_customer::{CustomerRecord, CustomerService};
use interface_api::create_router;
use test_utils::{customer_payload, random_customer_record, random_email, CustomerRecordBuilder};

fn server_over(store: MockCustomerStore) -> TestServer {
    let service = Arc::new(CustomerService::new(Arc::new(store)));
    TestServer::new(create_router(service)).expect("router should build")
}

async fn server_with(records: Vec<CustomerRecord>) -> TestServer {
    server_over(MockCustomerStore::with_customers(records).await)
}

#[tokio::test]
async fn test_list_customers_empty() {
    let server = server_with(vec![]).await;

    let response = server.get("/api/v1/customers").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_customers_returns_seeded_entries() {
    let server = server_with(vec![random_customer_record(), random_customer_record()]).await;

    let response = server.get("/api/v1/customers").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>().as_array().map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn test_create_then_get_roundtrip() {
    let server = server_with(vec![]).await;

    let response = server
        .post("/api/v1/customers")
        .json(&customer_payload("a@x.com"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    let id = created["id"].as_i64().expect("storage assigns an id");
    assert_eq!(created["email"], "a@x.com");
    assert!(created["address"]["id"].as_i64().is_some());

    let fetched = server.get(&format!("/api/v1/customers/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_missing_customer_is_404() {
    let server = server_with(vec![]).await;

    let response = server.get("/api/v1/customers/99").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_with_invalid_fields_returns_error_payload() {
    let server = server_with(vec![]).await;

    let response = server
        .post("/api/v1/customers")
        .json(&json!({
            "email": "not-an-email",
            "password": "password1",
            "first_name": "name1",
            "last_name": "",
            "address": {
                "phone": "12345678",
                "country": "Latvia",
                "city": "Riga",
                "postal_code": "1001"
            }
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "Validation failed");
    let path = body["path"].as_str().expect("path carries the field errors");
    assert!(path.starts_with('[') && path.ends_with(']'));
    assert!(path.contains("email"));
    assert!(path.contains("last_name"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_email_is_conflict() {
    let server = server_with(vec![CustomerRecordBuilder::new()
        .with_id(1)
        .with_email("taken@x.com")
        .build()])
    .await;

    let response = server
        .post("/api/v1/customers")
        .json(&customer_payload("taken@x.com"))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["status"], 409);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn test_update_ignores_body_identifiers() {
    let server = server_with(vec![CustomerRecordBuilder::new()
        .with_id(3)
        .with_email("a@x.com")
        .build()])
    .await;

    // Body claims unrelated ids; the path id wins
    let mut payload = customer_payload("a@x.com");
    payload["id"] = json!(77);
    payload["last_name"] = json!("Z");
    payload["address"]["id"] = json!(88);
    payload["address"]["city"] = json!("NewCity");

    let response = server.put("/api/v1/customers/3").json(&payload).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], 3);
    assert_eq!(body["last_name"], "Z");
    assert_eq!(body["address"]["id"], 3);
    assert_eq!(body["address"]["city"], "NewCity");
}

#[tokio::test]
async fn test_update_missing_customer_is_404() {
    let server = server_with(vec![]).await;

    let response = server
        .put("/api/v1/customers/42")
        .json(&customer_payload("a@x.com"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let server = server_with(vec![CustomerRecordBuilder::new().with_id(1).build()]).await;

    let first = server.delete("/api/v1/customers/1").await;
    first.assert_status(StatusCode::NO_CONTENT);

    let second = server.delete("/api/v1/customers/1").await;
    second.assert_status(StatusCode::NOT_FOUND);

    let gone = server.get("/api/v1/customers/1").await;
    gone.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let server = server_with(vec![]).await;

    // Empty store lists nothing
    assert_eq!(
        server.get("/api/v1/customers").await.json::<Value>(),
        json!([])
    );

    // Create
    let created: Value = server
        .post("/api/v1/customers")
        .json(&customer_payload("a@x.com"))
        .await
        .json();
    let id = created["id"].as_i64().expect("storage assigns an id");

    // Edit content fields
    let mut update = customer_payload("a@x.com");
    update["last_name"] = json!("Z");
    update["address"]["city"] = json!("NewCity");
    let edited: Value = server
        .put(&format!("/api/v1/customers/{id}"))
        .json(&update)
        .await
        .json();
    assert_eq!(edited["last_name"], "Z");
    assert_eq!(edited["address"]["city"], "NewCity");
    assert_eq!(edited["id"], id);

    // Delete, then the customer is gone
    server
        .delete(&format!("/api/v1/customers/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/v1/customers/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_generated_email() {
    let server = server_with(vec![]).await;
    let email = random_email();

    let response = server
        .post("/api/v1/customers")
        .json(&customer_payload(&email))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["email"], email.as_str());
}

#[tokio::test]
async fn test_health_probes() {
    let server = server_with(vec![]).await;

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>(), json!({ "status": "healthy" }));

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    assert_eq!(ready.json::<Value>(), json!({ "status": "ready" }));
}
