use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, method, path, query_param};

use shared_api::ClinicApiClient;
use shared_models::auth::{LoginRequest, RegisterRequest};
use shared_models::booking::BookingRequest;
use shared_models::ClientError;
use shared_utils::test_utils::{MockClinicResponses, TestConfig};

fn client_for(server: &MockServer) -> ClinicApiClient {
    ClinicApiClient::new(&TestConfig::with_server(&server.uri()).to_app_config())
}

#[tokio::test]
async fn test_get_slots_passes_date_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slots"))
        .and(query_param("date", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::sample_day()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let slots = client_for(&mock_server).get_slots("2024-01-01").await.unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].time, "9:00");
    assert!(!slots[0].is_booked);
    assert!(slots[1].is_booked);
}

#[tokio::test]
async fn test_book_sends_camel_case_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/book"))
        .and(body_json(json!({
            "slotId": 1,
            "name": "alice",
            "age": "30",
            "gender": "Female",
            "phone": "555-0100",
            "doctor": "Dr. Byrne",
            "date": "2024-01-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = BookingRequest {
        slot_id: 1,
        name: "alice".to_string(),
        age: "30".to_string(),
        gender: "Female".to_string(),
        phone: "555-0100".to_string(),
        doctor: "Dr. Byrne".to_string(),
        date: "2024-01-01".to_string(),
    };

    assert!(client_for(&mock_server).book(&request).await.is_ok());
}

#[tokio::test]
async fn test_rejection_surfaces_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401)
            .set_body_json(MockClinicResponses::error_response("Invalid credentials")))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .login(&LoginRequest { username: "bob".to_string(), password: "nope".to_string() })
        .await;

    assert_matches!(
        result,
        Err(ClientError::Rejected { status: 401, ref message }) if message == "Invalid credentials"
    );
}

#[tokio::test]
async fn test_rejection_without_message_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "error": "dup" })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .register(&RegisterRequest {
            username: "bob".to_string(),
            password: "pw".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555".to_string(),
        })
        .await;

    assert_matches!(
        result,
        Err(ClientError::Rejected { status: 409, ref message }) if message == "Conflict"
    );
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/my-bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).my_bookings("alice").await;

    assert_matches!(result, Err(ClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let config = TestConfig::with_server("http://127.0.0.1:9").to_app_config();
    let result = ClinicApiClient::new(&config).get_slots("2024-01-01").await;

    assert_matches!(result, Err(ClientError::Transport(_)));
}

#[tokio::test]
async fn test_my_bookings_passes_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/my-bookings"))
        .and(query_param("name", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockClinicResponses::booking("9:00", "2024-01-01", "Dr. Byrne")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bookings = client_for(&mock_server).my_bookings("alice").await.unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].doctor_name, "Dr. Byrne");
}
