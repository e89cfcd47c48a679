//! Integration tests for login, registration, and session gating.


use mindease_client::ApiError;
use mockito::Matcher;
use serde_json::json;
use test_helpers::{client_for, login_as_user_seven};

#[tokio::test]
async fn login_success_installs_session() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());

    let mock = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"username":"alice","password":"pw"})))
        .with_status(200)
        .with_body(r#"{"user_id":7,"nickname":"A"}"#)
        .create_async()
        .await;

    assert!(client.login("alice", "pw").await);
    mock.assert_async().await;

    assert!(client.is_authenticated());
    let session = client.session();
    assert_eq!(session.user_id, 7);
    assert_eq!(session.nickname, "A");
}

#[tokio::test]
async fn login_failure_leaves_previous_session_intact() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    // Second attempt with different credentials is rejected by the backend.
    let rejected = server
        .mock("POST", "/login")
        .match_body(Matcher::Json(json!({"username":"mallory","password":"x"})))
        .with_status(400)
        .with_body(r#"{"detail":"wrong username or password"}"#)
        .create_async()
        .await;

    assert!(!client.login("mallory", "x").await);
    rejected.assert_async().await;

    // Both fields of the old session survive — no partial update.
    let session = client.session();
    assert_eq!(session.user_id, 7);
    assert_eq!(session.nickname, "A");
}

#[tokio::test]
async fn login_with_malformed_body_fails_without_session_change() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());

    server
        .mock("POST", "/login")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    assert!(!client.login("alice", "pw").await);
    assert!(!client.is_authenticated());

    match client.try_login("alice", "pw").await {
        Err(ApiError::Decode(_)) => {}
        other => panic!("Expected Decode error, got {:?}", other.map(|s| s.user_id)),
    }
}

#[tokio::test]
async fn login_transport_failure_returns_false() {
    // Discard port: nothing listens there, connection is refused.
    let client = client_for("http://127.0.0.1:9");

    assert!(!client.login("alice", "pw").await);
    assert!(!client.is_authenticated());

    match client.try_login("alice", "pw").await {
        Err(ApiError::Transport(_)) => {}
        other => panic!("Expected Transport error, got {:?}", other.map(|s| s.user_id)),
    }
}

#[tokio::test]
async fn register_probes_backend_without_touching_session() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());

    let mock = server
        .mock("POST", "/register")
        .match_body(Matcher::Json(json!({
            "username": "bob",
            "password": "pw",
            "nickname": "Bobby"
        })))
        .with_status(200)
        .with_body(r#"{"message":"ok","user_id":12}"#)
        .create_async()
        .await;

    assert!(client.register("bob", "pw", "Bobby").await);
    mock.assert_async().await;

    // Registration does not imply login.
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn register_conflict_returns_false() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());

    server
        .mock("POST", "/register")
        .with_status(400)
        .with_body(r#"{"detail":"username already exists"}"#)
        .create_async()
        .await;

    assert!(!client.register("bob", "pw", "Bobby").await);
}

#[tokio::test]
async fn logout_resets_to_anonymous() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    assert!(client.is_authenticated());
    client.logout();
    assert!(!client.is_authenticated());

    // Logging out twice is harmless.
    client.logout();
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn unauthenticated_calls_make_zero_network_calls() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());

    // Every user-scoped route gets an expect(0) mock; if the client sends
    // anything at all the assertions below fail.
    let create = server
        .mock("POST", "/diaries/")
        .expect(0)
        .create_async()
        .await;
    let list = server
        .mock("GET", Matcher::Regex(r"^/diaries/\d+$".to_string()))
        .expect(0)
        .create_async()
        .await;
    let trash = server
        .mock("GET", Matcher::Regex(r"^/diaries/trash/\d+$".to_string()))
        .expect(0)
        .create_async()
        .await;
    let stats = server
        .mock("GET", Matcher::Regex(r"^/stats/\d+$".to_string()))
        .expect(0)
        .create_async()
        .await;
    let soft = server
        .mock("DELETE", "/diaries/soft/1")
        .expect(0)
        .create_async()
        .await;
    let restore = server
        .mock("POST", "/diaries/restore/1")
        .expect(0)
        .create_async()
        .await;
    let hard = server
        .mock("DELETE", "/diaries/hard/1")
        .expect(0)
        .create_async()
        .await;

    assert!(client.create_diary("felt ok", 5, "work").await.is_none());
    assert!(client.get_diaries().await.is_empty());
    assert!(client.get_trash_diaries().await.is_empty());
    assert!(client.get_stats().await.is_none());
    assert!(!client.delete_diary(1).await);
    assert!(!client.restore_diary(1).await);
    assert!(!client.hard_delete_diary(1).await);

    for mock in [create, list, trash, stats, soft, restore, hard] {
        mock.assert_async().await;
    }

    match client.try_get_diaries().await {
        Err(ApiError::AuthRequired) => {}
        other => panic!("Expected AuthRequired, got {:?}", other),
    }
}
