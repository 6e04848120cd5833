//! Integration tests for the board client using wiremock mock server

use cb_board::StatusChange;
use cb_client::BoardClient;
use cb_core::{Actor, CaseStatus};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

fn change(card_id: &str, new_status: CaseStatus) -> StatusChange {
    StatusChange {
        card_id: card_id.to_string(),
        new_status,
        actor: Actor::new("ana@example.com"),
    }
}

#[tokio::test]
async fn test_list_cases_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "ORD-1001",
                "status": "quotation",
                "client_name": "Maria",
                "grand_total": "120.00",
                "item_count": 2,
                "created_by": "bob@example.com"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let cases = client.list_cases().await.unwrap();

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id, "ORD-1001");
    assert_eq!(cases[0].status, CaseStatus::Quotation);
}

#[tokio::test]
async fn test_list_cases_wrapped_shapes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "data": [
                    {"id": "ORD-1", "status": "delivery", "created_by": "bob@example.com"},
                    {"id": "ORD-2", "status": "approved", "created_by": {
                        "email": "ana@example.com", "first_name": "Ana"
                    }}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let cases = client.list_cases().await.unwrap();

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1].created_by.email(), "ana@example.com");
}

#[tokio::test]
async fn test_list_cases_unexpected_body_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let cases = client.list_cases().await.unwrap();

    assert!(cases.is_empty());
}

#[tokio::test]
async fn test_list_cases_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cases"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database offline"})),
        )
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let result = client.list_cases().await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("database offline"));
}

#[tokio::test]
async fn test_update_case_status_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/cases/ORD-7/status"))
        .and(body_string_contains("approved"))
        .and(body_string_contains("ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Status updated successfully"
        })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let ack = client
        .update_case_status(&change("ORD-7", CaseStatus::Approved))
        .await
        .unwrap();

    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Status updated successfully"));
}

#[tokio::test]
async fn test_update_case_status_non_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/cases/ORD-7/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Case is locked"
        })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let ack = client
        .update_case_status(&change("ORD-7", CaseStatus::Deleted))
        .await
        .unwrap();

    assert!(!ack.success);
}

#[tokio::test]
async fn test_update_case_status_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/cases/ORD-9/status"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Not allowed"
        })))
        .mount(&mock_server)
        .await;

    let client = BoardClient::new(&mock_server.uri());
    let result = client
        .update_case_status(&change("ORD-9", CaseStatus::Completed))
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Not allowed"));
}
