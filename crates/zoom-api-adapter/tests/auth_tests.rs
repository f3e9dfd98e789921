/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for auth flow
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or flow changes
*/

mod common;

use common::{
    TEST_API_KEY, TEST_API_SECRET, received_bearer_tokens, setup_mock_server, sync_meeting_json,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};
use zoom_api_adapter::auth::Claims;
use zoom_api_adapter::{ApiConfig, ClientConfig, SigningError, ZoomClient, ZoomError};

fn decode_claims(token: &str) -> Claims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TEST_API_KEY]);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_API_SECRET.as_bytes()),
        &validation,
    )
    .expect("token should verify with the API secret")
    .claims
}

#[tokio::test]
async fn test_get_meeting_recovers_from_expired_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/meetings/123"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meetings/123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sync_meeting_json(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiConfig::new(TEST_API_KEY, TEST_API_SECRET).with_base_url(server.uri());
    let client = assert_ok!(ZoomClient::with_config(api, ClientConfig::default()));

    let meeting = assert_ok!(client.get_meeting(123).await);

    assert_eq!(meeting.id, 123);
    assert_eq!(meeting.topic, "Sync");

    let tokens = received_bearer_tokens(&server).await;
    assert_eq!(tokens.len(), 2);
    for token in &tokens {
        let claims = decode_claims(token);
        assert_eq!(claims.iss, TEST_API_KEY);
    }
}

#[tokio::test]
async fn test_token_stored_after_first_call() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/meetings/123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sync_meeting_json(), "application/json"))
        .mount(&server)
        .await;

    let api = ApiConfig::new(TEST_API_KEY, TEST_API_SECRET).with_base_url(server.uri());
    let client = assert_ok!(ZoomClient::new(api));
    assert!(client.auth_manager().is_expired());

    assert_ok!(client.get_meeting(123).await);

    let credential = client.auth_manager().credential().expect("credential stored");
    let claims = decode_claims(&credential.token);
    assert_eq!(claims.exp, credential.expires_at.timestamp());
    assert!(!client.auth_manager().is_expired());
}

#[tokio::test]
async fn test_empty_secret_fails_before_any_request() {
    let server = setup_mock_server().await;

    let api = ApiConfig::new(TEST_API_KEY, "").with_base_url(server.uri());
    let client = assert_ok!(ZoomClient::new(api));

    let err = client.get_meeting(123).await.unwrap_err();

    match err {
        ZoomError::Authentication { source } => {
            assert!(matches!(source, SigningError::EmptySecret));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_cloned_clients_share_credential() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/meetings/123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sync_meeting_json(), "application/json"))
        .mount(&server)
        .await;

    let api = ApiConfig::new(TEST_API_KEY, TEST_API_SECRET).with_base_url(server.uri());
    let client = assert_ok!(ZoomClient::new(api));
    let clone = client.clone();

    assert_ok!(client.get_meeting(123).await);

    assert_eq!(
        client.auth_manager().credential(),
        clone.auth_manager().credential()
    );
    assert!(!clone.auth_manager().is_expired());
}
