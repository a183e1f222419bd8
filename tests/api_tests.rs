//! HTTP-level tests for the invoice API
//!
//! Every request goes through the full router:
//! JSON → HTTP request → handler → InvoiceService → HTTP response → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use invoice_tracker::prelude::*;
use serde_json::{Value, json};

fn make_server() -> (InMemoryInvoiceStore, TestServer) {
    let store = InMemoryInvoiceStore::new();
    let router = ServerBuilder::new()
        .with_store(store.clone())
        .build()
        .unwrap();
    (store, TestServer::new(router))
}

async fn create(server: &TestServer, body: Value) -> Value {
    let response = server.post(API_PATH).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

async fn list(server: &TestServer) -> Vec<Value> {
    let response = server.get(API_PATH).await;
    response.assert_status_ok();
    response.json()
}

fn acme() -> Value {
    json!({ "customerName": "Acme", "amount": "250", "dueDate": "2024-01-01" })
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_starts_empty() {
    let (_, server) = make_server();

    let response = server.get(API_PATH).await;
    response.assert_status_ok();
    response.assert_header("content-type", "application/json");
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let (_, server) = make_server();
    for name in ["First", "Second", "Third"] {
        create(
            &server,
            json!({ "customerName": name, "amount": 1, "dueDate": "2024-01-01" }),
        )
        .await;
    }

    let names: Vec<String> = list(&server)
        .await
        .iter()
        .map(|i| i["customerName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_example_response() {
    let (_, server) = make_server();

    let body = create(&server, acme()).await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["customerName"], "Acme");
    assert_eq!(body["amount"], 250);
    assert_eq!(body["dueDate"], "2024-01-01");
    let created_at = body["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    // YYYY-MM-DDTHH:MM:SS.mmmZ
    assert_eq!(created_at.len(), 24);
    assert_eq!(&created_at[19..20], ".");
    assert!(created_at.ends_with('Z'));
    assert_eq!(body.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_sets_json_content_type() {
    let (_, server) = make_server();

    let response = server.post(API_PATH).json(&acme()).await;
    response.assert_status(StatusCode::CREATED);
    response.assert_header("content-type", "application/json");
}

#[tokio::test]
async fn test_create_ids_strictly_increase() {
    let (_, server) = make_server();

    let mut last = 0;
    for _ in 0..5 {
        let body = create(&server, acme()).await;
        let id = body["id"].as_u64().unwrap();
        assert!(id > last, "id {} should exceed {}", id, last);
        last = id;
    }
}

#[tokio::test]
async fn test_create_ids_increase_across_deletes() {
    let (_, server) = make_server();

    let first = create(&server, acme()).await;
    let second = create(&server, acme()).await;
    server
        .delete(API_PATH)
        .json(&json!({ "id": second["id"] }))
        .await
        .assert_status_ok();

    let third = create(&server, acme()).await;
    assert!(third["id"].as_u64() > second["id"].as_u64());
    assert!(third["id"].as_u64() > first["id"].as_u64());
}

#[tokio::test]
async fn test_create_missing_fields_is_400_and_changes_nothing() {
    let (store, server) = make_server();
    create(&server, acme()).await;

    let bad_bodies = [
        json!({ "amount": 10, "dueDate": "2024-01-01" }),
        json!({ "customerName": "", "amount": 10, "dueDate": "2024-01-01" }),
        json!({ "customerName": "Acme", "dueDate": "2024-01-01" }),
        json!({ "customerName": "Acme", "amount": 0, "dueDate": "2024-01-01" }),
        json!({ "customerName": "Acme", "amount": null, "dueDate": "2024-01-01" }),
        json!({ "customerName": "Acme", "amount": 10 }),
        json!({ "customerName": "Acme", "amount": 10, "dueDate": "" }),
        json!({}),
    ];

    for body in bad_bodies {
        let response = server.post(API_PATH).json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "All fields are required." }));
    }

    assert_eq!(store.len().unwrap(), 1);
    assert_eq!(list(&server).await.len(), 1);
}

#[tokio::test]
async fn test_create_non_numeric_amount_is_400() {
    let (store, server) = make_server();

    let response = server
        .post(API_PATH)
        .json(&json!({ "customerName": "Acme", "amount": "a lot", "dueDate": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Amount must be a number." }));
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_create_invalid_due_date_is_400() {
    let (store, server) = make_server();

    let response = server
        .post(API_PATH)
        .json(&json!({ "customerName": "Acme", "amount": 5, "dueDate": "next week" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Due date must be a date (YYYY-MM-DD)." }));
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_create_keeps_due_date_with_time_verbatim() {
    let (_, server) = make_server();

    for due_date in ["2024-01-01 10:00", "2024-01-01T10:00:00.000Z"] {
        let body = create(
            &server,
            json!({ "customerName": "Acme", "amount": 5, "dueDate": due_date }),
        )
        .await;
        assert_eq!(body["dueDate"], due_date);
    }
}

#[tokio::test]
async fn test_create_malformed_body_is_500() {
    let (store, server) = make_server();

    let response = server.post(API_PATH).text("{ not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while creating the invoice." }));
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_create_accepts_body_without_content_type() {
    let (_, server) = make_server();

    let response = server.post(API_PATH).text(acme().to_string()).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["customerName"], "Acme");
}

#[tokio::test]
async fn test_round_trip_create_then_list() {
    let (_, server) = make_server();
    create(
        &server,
        json!({ "customerName": "Other", "amount": 1, "dueDate": "2023-05-05" }),
    )
    .await;

    let payload = json!({ "customerName": "Initech", "amount": "99.5", "dueDate": "2024-03-31" });
    create(&server, payload.clone()).await;

    let invoices = list(&server).await;
    let matches: Vec<&Value> = invoices
        .iter()
        .filter(|i| {
            i["customerName"] == payload["customerName"]
                && i["amount"].as_f64() == Some(99.5)
                && i["dueDate"] == payload["dueDate"]
        })
        .collect();
    assert_eq!(matches.len(), 1);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_example_response() {
    let (_, server) = make_server();
    let created = create(&server, acme()).await;

    let response = server
        .put(API_PATH)
        .json(&json!({ "id": 1, "customerName": "Acme Co", "amount": 300, "dueDate": "2024-02-01" }))
        .await;

    response.assert_status_ok();
    response.assert_header("content-type", "application/json");
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["customerName"], "Acme Co");
    assert_eq!(body["amount"], 300);
    assert_eq!(body["dueDate"], "2024-02-01");
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_is_visible_in_list_at_same_position() {
    let (_, server) = make_server();
    create(&server, acme()).await;
    create(
        &server,
        json!({ "customerName": "Globex", "amount": 7, "dueDate": "2024-01-02" }),
    )
    .await;

    server
        .put(API_PATH)
        .json(&json!({ "id": "1", "customerName": "Acme Co", "amount": "300", "dueDate": "2024-02-01" }))
        .await
        .assert_status_ok();

    let invoices = list(&server).await;
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0]["id"], 1);
    assert_eq!(invoices[0]["customerName"], "Acme Co");
    assert_eq!(invoices[1]["customerName"], "Globex");
}

#[tokio::test]
async fn test_update_unknown_id_is_404_and_changes_nothing() {
    let (_, server) = make_server();
    create(&server, acme()).await;
    let before = list(&server).await;

    let response = server
        .put(API_PATH)
        .json(&json!({ "id": 42, "customerName": "Ghost", "amount": 1, "dueDate": "2024-01-01" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Invoice not found." }));
    assert_eq!(list(&server).await, before);
}

#[tokio::test]
async fn test_update_missing_field_is_400() {
    let (_, server) = make_server();
    create(&server, acme()).await;

    for body in [
        json!({ "customerName": "Acme Co", "amount": 300, "dueDate": "2024-02-01" }),
        json!({ "id": 1, "amount": 300, "dueDate": "2024-02-01" }),
        json!({ "id": 1, "customerName": "Acme Co", "dueDate": "2024-02-01" }),
        json!({ "id": 1, "customerName": "Acme Co", "amount": 300 }),
    ] {
        let response = server.put(API_PATH).json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "All fields are required." }));
    }

    assert_eq!(list(&server).await[0]["customerName"], "Acme");
}

#[tokio::test]
async fn test_update_non_numeric_id_is_400() {
    let (_, server) = make_server();
    create(&server, acme()).await;

    let response = server
        .put(API_PATH)
        .json(&json!({ "id": "one", "customerName": "Acme Co", "amount": 300, "dueDate": "2024-02-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Invoice id must be a positive integer." }));
}

#[tokio::test]
async fn test_update_malformed_body_is_500() {
    let (_, server) = make_server();

    let response = server.put(API_PATH).text("[1, 2").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while updating the invoice." }));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_returns_prior_value_and_removes_it() {
    let (store, server) = make_server();
    let first = create(&server, acme()).await;
    create(
        &server,
        json!({ "customerName": "Globex", "amount": 7, "dueDate": "2024-01-02" }),
    )
    .await;

    let response = server.delete(API_PATH).json(&json!({ "id": 1 })).await;

    response.assert_status_ok();
    response.assert_header("content-type", "application/json");
    response.assert_json(&first);
    assert_eq!(store.len().unwrap(), 1);

    let invoices = list(&server).await;
    assert!(invoices.iter().all(|i| i["id"] != 1));
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let (_, server) = make_server();
    create(&server, acme()).await;

    server
        .delete(API_PATH)
        .json(&json!({ "id": 1 }))
        .await
        .assert_status_ok();

    let response = server.delete(API_PATH).json(&json!({ "id": 1 })).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Invoice not found." }));
}

#[tokio::test]
async fn test_delete_unknown_id_example() {
    let (_, server) = make_server();

    let response = server.delete(API_PATH).json(&json!({ "id": 999 })).await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Invoice not found." }));
}

#[tokio::test]
async fn test_delete_without_id_is_400() {
    let (_, server) = make_server();

    for body in [json!({}), json!({ "id": null }), json!({ "id": "" }), json!({ "id": 0 })] {
        let response = server.delete(API_PATH).json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Invoice id is required." }));
    }
}

#[tokio::test]
async fn test_delete_string_id_is_coerced() {
    let (store, server) = make_server();
    create(&server, acme()).await;

    server
        .delete(API_PATH)
        .json(&json!({ "id": "1" }))
        .await
        .assert_status_ok();
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_delete_without_body_is_500() {
    let (_, server) = make_server();

    let response = server.delete(API_PATH).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while deleting the invoice." }));
}

// =============================================================================
// Ambient routes
// =============================================================================

#[tokio::test]
async fn test_health_routes() {
    let (_, server) = make_server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok", "service": "invoice-tracker" }));
    }
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let (_, server) = make_server();

    let response = server.patch(API_PATH).json(&acme()).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_routes_are_merged() {
    use axum::Router;
    use axum::routing::get;

    let router = ServerBuilder::new()
        .with_store(InMemoryInvoiceStore::new())
        .with_custom_routes(Router::new().route("/version", get(|| async { "1" })))
        .build()
        .unwrap();
    let server = TestServer::new(router);

    let response = server.get("/version").await;
    response.assert_status_ok();
    response.assert_text("1");
}

// =============================================================================
// Store failures
// =============================================================================

/// A store whose every operation fails internally
struct BrokenStore;

#[async_trait]
impl InvoiceService for BrokenStore {
    async fn list(&self) -> InvoiceResult<Vec<Invoice>> {
        Err(InvoiceError::internal(Operation::List, "ledger lock poisoned"))
    }

    async fn get(&self, _id: InvoiceId) -> InvoiceResult<Option<Invoice>> {
        Err(InvoiceError::internal(Operation::Get, "ledger lock poisoned"))
    }

    async fn create(&self, _fields: InvoiceFields) -> InvoiceResult<Invoice> {
        Err(InvoiceError::internal(Operation::Create, "ledger lock poisoned"))
    }

    async fn update(&self, _id: InvoiceId, _fields: InvoiceFields) -> InvoiceResult<Invoice> {
        Err(InvoiceError::internal(Operation::Update, "ledger lock poisoned"))
    }

    async fn delete(&self, _id: InvoiceId) -> InvoiceResult<Invoice> {
        Err(InvoiceError::internal(Operation::Delete, "ledger lock poisoned"))
    }
}

#[tokio::test]
async fn test_store_failures_are_500_with_operation_message() {
    let router = ServerBuilder::new().with_store(BrokenStore).build().unwrap();
    let server = TestServer::new(router);

    let response = server.get(API_PATH).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while fetching invoices." }));

    let response = server.post(API_PATH).json(&acme()).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while creating the invoice." }));

    let response = server
        .put(API_PATH)
        .json(&json!({ "id": 1, "customerName": "Acme", "amount": 1, "dueDate": "2024-01-01" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while updating the invoice." }));

    let response = server.delete(API_PATH).json(&json!({ "id": 1 })).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error while deleting the invoice." }));
}
