//! Mock service tests for the HTTP backend.
//!
//! These tests use wiremock to simulate the private API and exercise
//! login, rehydration, lookup, pagination and unsave without network
//! access or real credentials.

use serde_json::json;
use wiremock::matchers::{
    body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gramjar_core::error::{AuthError, Error};
use gramjar_core::traits::{Gram, ProgressReporter, Session};
use gramjar_core::types::{AccountId, ApiUrl, MediaId, Username};
use gramjar_core::{Credentials, Device, feed};
use gramjar_http::{FileCookieJar, HttpGram};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    // For tests, we need to allow HTTP localhost
    ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn device() -> Device {
    Device::new("gramjar-test", "0.0.0")
}

fn username(s: &str) -> Username {
    Username::new(s).unwrap()
}

fn credentials() -> Credentials {
    Credentials::new(username("alice"), "secret123")
}

/// Mock for a successful login that sets session cookies.
fn login_mock() -> Mock {
    Mock::given(method("POST"))
        .and(path("/accounts/login/"))
        .and(body_string_contains("username=alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "logged_in_user": {"pk": 1, "username": "alice"},
                    "status": "ok"
                }))
                .append_header("set-cookie", "sessionid=sess-token; Path=/; HttpOnly")
                .append_header("set-cookie", "csrftoken=csrf-token; Path=/"),
        )
}

struct NullProgress;

impl ProgressReporter for NullProgress {
    fn start(&mut self) {}
    fn update(&mut self, _count: usize) {}
    fn finish(&mut self) {}
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn login_persists_a_cookie_entry() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));

    assert!(!gram.has_cookie(&username("alice")));

    let session = gram.login(&device(), credentials()).await.unwrap();

    assert_eq!(session.username().as_str(), "alice");
    assert!(gram.has_cookie(&username("alice")));

    let entry = gram.jar().load(&username("alice")).unwrap();
    let names: Vec<_> = entry.cookies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["sessionid", "csrftoken"]);
}

#[tokio::test]
async fn login_with_bad_password_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/login/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "bad_password",
            "status": "fail"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));

    let result = gram.login(&device(), credentials()).await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::LoginRejected))
    ));
    assert!(!gram.has_cookie(&username("alice")));
}

#[tokio::test]
async fn rehydrated_session_sends_the_stored_cookies() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/search/"))
        .and(query_param("q", "bob"))
        .and(header("cookie", "sessionid=sess-token; csrftoken=csrf-token"))
        .and(header("x-csrftoken", "csrf-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"pk": 42, "username": "bob", "full_name": "Bob"}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));

    // Prime the jar, then rebuild the session purely from disk.
    gram.login(&device(), credentials()).await.unwrap();
    let session = gram.rehydrate(&device(), &username("alice")).unwrap();

    let account = session.search_account(&username("bob")).await.unwrap();
    assert_eq!(account.as_str(), "42");
}

#[tokio::test]
async fn expired_cookies_surface_on_first_use() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/search/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "login_required",
            "status": "fail"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));

    gram.login(&device(), credentials()).await.unwrap();
    let session = gram.rehydrate(&device(), &username("alice")).unwrap();

    let result = session.search_account(&username("bob")).await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::SessionExpired))
    ));
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn search_miss_is_account_not_found() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let result = session.search_account(&username("nonexistent")).await;

    assert!(matches!(result, Err(Error::AccountNotFound { .. })));
}

#[tokio::test]
async fn account_by_id_returns_the_raw_record() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/42/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"pk": 42, "username": "bob", "media_count": 13}
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let account = session
        .account_by_id(&AccountId::new("42").unwrap())
        .await
        .unwrap();

    assert_eq!(account.username(), Some("bob"));
    assert_eq!(account.as_value()["media_count"], 13);
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn feed_pagination_follows_next_max_id() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    let first_page: Vec<_> = (1..=10)
        .map(|i| json!({"id": format!("{}_42", i), "pk": i}))
        .collect();
    let second_page: Vec<_> = (11..=13)
        .map(|i| json!({"id": format!("{}_42", i), "pk": i}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/feed/user/42/"))
        .and(query_param("count", "10"))
        .and(query_param_is_missing("max_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": first_page,
            "more_available": true,
            "next_max_id": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/feed/user/42/"))
        .and(query_param("max_id", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": second_page,
            "more_available": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let mut cursor = session.user_media(&AccountId::new("42").unwrap(), 10);
    let posts = feed::drain(&mut cursor, &mut NullProgress).await.unwrap();

    assert_eq!(posts.len(), 13);
    assert_eq!(posts.iter().next().unwrap().id(), Some("1_42"));
    assert_eq!(posts.iter().last().unwrap().id(), Some("13_42"));
}

#[tokio::test]
async fn saved_feed_drains_from_the_saved_endpoint() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/feed/saved/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "7_42"}],
            "more_available": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let mut cursor = session.saved_media(10);
    let posts = feed::drain(&mut cursor, &mut NullProgress).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts.iter().next().unwrap().id(), Some("7_42"));
}

// ============================================================================
// Unsave and Error Handling Tests
// ============================================================================

#[tokio::test]
async fn unsave_issues_exactly_one_call() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("POST"))
        .and(path("/media/12345/unsave/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let result = session.unsave(&MediaId::new("12345").unwrap()).await;

    assert!(result.is_ok());
    server.verify().await;
}

#[tokio::test]
async fn non_json_error_response_degrades_to_a_bare_status() {
    let server = MockServer::start().await;
    login_mock().mount(&server).await;

    Mock::given(method("GET"))
        .and(path("/users/search/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gram = HttpGram::new(mock_api_url(&server), FileCookieJar::new(dir.path()));
    let session = gram.login(&device(), credentials()).await.unwrap();

    let result = session.search_account(&username("bob")).await;

    match result {
        Err(Error::Protocol(p)) => assert_eq!(p.status, 500),
        other => panic!("expected protocol error, got {:?}", other),
    }
}
