//! Integration tests for [`ApiClient`] against a Wiremock backend.
//!
//! Covers the refresh-and-retry flow: single-flight refresh under
//! concurrency, cold-start refresh, the one-retry limit, session expiry
//! notification, 204 handling and header merging.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rigfit_core::api::{ApiClient, ApiError, RequestOptions};
use rigfit_core::auth::{MemoryTokenStore, RefreshTokenStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn client_at(server: &MockServer, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(server.uri(), store).unwrap()
}

fn token_pair(access: &str, refresh: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer",
        "expires_in": 900
    }))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn counting_listener(client: &ApiClient) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    client.on_session_expired(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    count
}

/// Plain HTTP server that answers every request with 401, except the refresh
/// call, whose connection is closed without a response.
async fn spawn_refresh_dropping_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                if String::from_utf8_lossy(&buf[..n]).starts_with("POST /auth/refresh") {
                    return;
                }
                let _ = socket
                    .write_all(b"HTTP/1.1 401 Unauthorized\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                    .await;
            });
        }
    });
    format!("http://{}", addr)
}

// ---------------------------------------------------------------------------
// Refresh and retry
// ---------------------------------------------------------------------------

/// Two requests rejected at the same time trigger exactly one refresh call.
#[tokio::test]
async fn concurrent_auth_failures_share_one_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "refresh-1"})))
        .respond_with(token_pair("access-2", "refresh-2").set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    for resource in ["/admin/a", "/admin/b"] {
        Mock::given(method("GET"))
            .and(path(resource))
            .and(header("authorization", bearer("access-1").as_str()))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(resource))
            .and(header("authorization", bearer("access-2").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"path": resource})))
            .mount(&server)
            .await;
    }

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_at(&server, store.clone());
    client.set_tokens("access-1", "refresh-1");

    let (a, b) = tokio::join!(
        client.get::<Value>("/admin/a"),
        client.get::<Value>("/admin/b")
    );

    assert_eq!(a.unwrap()["path"], "/admin/a");
    assert_eq!(b.unwrap()["path"], "/admin/b");
    assert_eq!(client.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.load().unwrap().as_deref(), Some("refresh-2"));
}

/// A 401 that lands after another caller already renewed the token retries
/// with the new token instead of refreshing again.
#[tokio::test]
async fn late_auth_failure_reuses_finished_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("access-2", "refresh-2"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/a"))
        .and(header("authorization", bearer("access-1").as_str()))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/b"))
        .and(header("authorization", bearer("access-1").as_str()))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .mount(&server)
        .await;
    for resource in ["/admin/a", "/admin/b"] {
        Mock::given(method("GET"))
            .and(path(resource))
            .and(header("authorization", bearer("access-2").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"path": resource})))
            .mount(&server)
            .await;
    }

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    let (a, b) = tokio::join!(
        client.get::<Value>("/admin/a"),
        client.get::<Value>("/admin/b")
    );

    assert_eq!(a.unwrap()["path"], "/admin/a");
    assert_eq!(b.unwrap()["path"], "/admin/b");
    assert_eq!(client.access_token().as_deref(), Some("access-2"));
}

/// Only a persisted refresh token is held: refresh before the first request.
#[tokio::test]
async fn cold_start_refreshes_before_first_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "persisted"})))
        .respond_with(token_pair("fresh-access", "rotated"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/exercises/stats"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token("persisted"));
    let client = client_at(&server, store.clone());
    assert_eq!(client.access_token(), None);

    let stats: Value = client.get("/admin/exercises/stats").await.unwrap();
    assert_eq!(stats["total"], 42);
    assert_eq!(store.load().unwrap().as_deref(), Some("rotated"));
}

/// A retried request that is rejected again surfaces as a plain error.
#[tokio::test]
async fn retry_happens_at_most_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("access-2", "refresh-2"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/users/admins"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");
    let expired = counting_listener(&client);

    let err = client.get::<Value>("/admin/users/admins").await.unwrap_err();
    match err {
        ApiError::Request { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not authenticated");
        }
        other => panic!("expected request error, got {:?}", other),
    }
    // The refreshed tokens are kept and nobody was told the session ended
    assert_eq!(client.access_token().as_deref(), Some("access-2"));
    assert_eq!(expired.load(Ordering::SeqCst), 0);
}

/// Retried request failing with another status reports that status.
#[tokio::test]
async fn retry_failure_reports_retry_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("access-2", "refresh-2"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/tips/t-1"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/tips/t-1"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Tip not found"})))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    let err = client.get::<Value>("/admin/tips/t-1").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Tip not found");
}

/// Requests sharing one failed refresh broadcast the expiry once.
#[tokio::test]
async fn shared_failed_refresh_notifies_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");
    let notified = counting_listener(&client);

    let (a, b) = tokio::join!(
        client.get::<Value>("/admin/a"),
        client.get::<Value>("/admin/b")
    );

    assert!(a.unwrap_err().is_session_expired());
    assert!(b.unwrap_err().is_session_expired());
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

/// A rejected refresh clears credentials before listeners run.
#[tokio::test]
async fn failed_refresh_expires_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/quotes"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_at(&server, store.clone());
    client.set_tokens("access-1", "refresh-1");

    let cleared_when_notified = Arc::new(AtomicUsize::new(0));
    {
        let observer = client.clone();
        let seen = cleared_when_notified.clone();
        client.on_session_expired(move || {
            if observer.access_token().is_none() && !observer.has_refresh_token() {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
    }

    let err = client.get::<Value>("/admin/quotes").await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), "Session expired");

    assert_eq!(cleared_when_notified.load(Ordering::SeqCst), 1);
    assert_eq!(store.load().unwrap(), None);
}

/// A refresh call that dies at the transport level is a failed refresh, not
/// a network error for the caller.
#[tokio::test]
async fn refresh_transport_failure_expires_session() {
    let base_url = spawn_refresh_dropping_server().await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(base_url, store.clone()).unwrap();
    client.set_tokens("access-1", "refresh-1");
    let notified = counting_listener(&client);

    let err = client.get::<Value>("/admin/tips").await.unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(client.access_token(), None);
    assert!(!client.has_refresh_token());
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

/// No refresh token at all: 403 ends the session without calling refresh.
#[tokio::test]
async fn forbidden_without_refresh_token_expires_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("never", "used"))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/pricing"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    let expired = counting_listener(&client);

    let err = client.get::<Value>("/admin/pricing").await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

/// Server errors are returned as-is and never trigger a refresh.
#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("never", "used"))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/workouts/generate-daily"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    let err = client
        .post_empty::<Value>("/admin/workouts/generate-daily")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.message(), "Request failed");
    assert_eq!(client.access_token().as_deref(), Some("access-1"));
}

// ---------------------------------------------------------------------------
// Responses and headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_content_decodes_as_unit_or_none() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/quotes/q-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/quotes/q-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    client.delete::<()>("/admin/quotes/q-1").await.unwrap();

    let body: Option<Value> = client.get("/admin/quotes/q-1").await.unwrap();
    assert!(body.is_none());
}

/// A 204 on the retried request is still treated as no content.
#[tokio::test]
async fn no_content_after_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("access-2", "refresh-2"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/tips/t-9"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/tips/t-9"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    let body: Option<Value> = client.delete("/admin/tips/t-9").await.unwrap();
    assert!(body.is_none());
}

#[tokio::test]
async fn caller_headers_merge_under_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/tips/t-1/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    let options = RequestOptions::post()
        .header(HeaderName::from_static("x-request-source"), HeaderValue::from_static("cli"))
        .header(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="))
        .raw_body("{}");
    let _: Value = client.fetch("/admin/tips/t-1/validate", options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.headers.get("x-request-source").unwrap(), "cli");
    assert_eq!(sent.headers.get(CONTENT_TYPE.as_str()).unwrap(), "application/json");
    assert_eq!(sent.headers.get(AUTHORIZATION.as_str()).unwrap(), "Bearer access-1");
    assert_eq!(sent.body, b"{}");
}

#[tokio::test]
async fn unauthenticated_request_has_no_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    let _: Value = client.get("/health").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(AUTHORIZATION.as_str()).is_none());
}

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsubscribed_listener_is_not_called() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/api-keys"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));

    let kept = counting_listener(&client);
    let dropped = Arc::new(AtomicUsize::new(0));
    let subscription = {
        let seen = dropped.clone();
        client.on_session_expired(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        })
    };
    subscription.unsubscribe();
    subscription.unsubscribe();

    let err = client.get::<Value>("/admin/api-keys").await.unwrap_err();
    assert!(err.is_session_expired());
    assert_eq!(kept.load(Ordering::SeqCst), 1);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);
}

/// force_refresh always calls the backend, even back to back.
#[tokio::test]
async fn force_refresh_rotates_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(token_pair("access-2", "refresh-2"))
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_at(&server, store.clone());
    client.set_tokens("access-1", "refresh-1");

    assert!(client.force_refresh().await);
    assert!(client.force_refresh().await);
    assert_eq!(client.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.load().unwrap().as_deref(), Some("refresh-2"));
}

/// A malformed refresh response counts as a failed refresh.
#[tokio::test]
async fn force_refresh_with_bad_body_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_at(&server, Arc::new(MemoryTokenStore::new()));
    client.set_tokens("access-1", "refresh-1");

    assert!(!client.force_refresh().await);
    assert_eq!(client.access_token().as_deref(), Some("access-1"));
}
