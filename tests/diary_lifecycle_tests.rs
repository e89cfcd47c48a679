//! Integration tests for diary creation, listings, and the trash lifecycle.


use mindease_client::ApiError;
use mockito::Matcher;
use serde_json::json;
use test_helpers::{client_for, diary_json, login_as_user_seven};

#[tokio::test]
async fn create_diary_submits_draft_for_session_user() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    let mock = server
        .mock("POST", "/diaries/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "user_id": 7,
            "content": "felt ok",
            "weather": "Sunny",
            "mood_score": 5,
            "category": "work"
        })))
        .with_status(200)
        .with_body(
            r#"{
                "id": 31,
                "content": "felt ok",
                "category": "work",
                "mood_score": 5,
                "ai_comment": "Glad the day went smoothly.",
                "created_at": "2024-03-01T21:00:00"
            }"#,
        )
        .create_async()
        .await;

    let diary = client
        .create_diary("felt ok", 5, "work")
        .await
        .expect("create should succeed");
    mock.assert_async().await;

    assert_eq!(diary.id, 31);
    assert_eq!(diary.ai_comment.as_deref(), Some("Glad the day went smoothly."));
    assert!(diary.title.is_none());
}

#[tokio::test]
async fn get_diaries_returns_decoded_entries() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    server
        .mock("GET", "/diaries/7")
        .with_status(200)
        .with_body(format!(
            "[{},{}]",
            diary_json(1, "first"),
            diary_json(2, "second")
        ))
        .create_async()
        .await;

    let diaries = client.get_diaries().await;
    assert_eq!(diaries.len(), 2);
    assert_eq!(diaries[0].id, 1);
    assert_eq!(diaries[1].content, "second");
}

#[tokio::test]
async fn trash_listing_decodes_soft_delete_fields() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    server
        .mock("GET", "/diaries/trash/7")
        .with_status(200)
        .with_body(
            r#"[{
                "id": 4,
                "content": "old entry",
                "category": "life",
                "mood_score": 3,
                "created_at": "2024-02-01T10:00:00",
                "is_deleted": true,
                "deleted_at": "2024-02-20T18:30:00"
            }]"#,
        )
        .create_async()
        .await;

    let trash = client.get_trash_diaries().await;
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0].is_deleted, Some(true));
    assert_eq!(trash[0].deleted_at.as_deref(), Some("2024-02-20T18:30:00"));
}

/// Walks an entry through the full lifecycle against a fake backend that
/// honors the transitions: Active → Trashed → Active → Trashed → Purged.
#[tokio::test]
async fn lifecycle_soft_delete_restore_and_purge() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    // Phase 1: entry 1 gets trashed; it leaves the active listing and shows
    // up in trash.
    server
        .mock("DELETE", "/diaries/soft/1")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/7")
        .with_status(200)
        .with_body(format!("[{}]", diary_json(2, "keep me")))
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/trash/7")
        .with_status(200)
        .with_body(format!("[{}]", diary_json(1, "trash me")))
        .create_async()
        .await;

    assert!(client.delete_diary(1).await);
    assert!(client.get_diaries().await.iter().all(|d| d.id != 1));
    assert!(client.get_trash_diaries().await.iter().any(|d| d.id == 1));

    // Phase 2: restore brings it back.
    server.reset_async().await;
    server
        .mock("POST", "/diaries/restore/1")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/7")
        .with_status(200)
        .with_body(format!(
            "[{},{}]",
            diary_json(1, "trash me"),
            diary_json(2, "keep me")
        ))
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/trash/7")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    assert!(client.restore_diary(1).await);
    assert!(client.get_diaries().await.iter().any(|d| d.id == 1));
    assert!(client.get_trash_diaries().await.iter().all(|d| d.id != 1));

    // Phase 3: trash again, then purge. The entry vanishes from both
    // listings and restore no longer works.
    server.reset_async().await;
    server
        .mock("DELETE", "/diaries/soft/1")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("DELETE", "/diaries/hard/1")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("POST", "/diaries/restore/1")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/7")
        .with_status(200)
        .with_body(format!("[{}]", diary_json(2, "keep me")))
        .create_async()
        .await;
    server
        .mock("GET", "/diaries/trash/7")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    assert!(client.delete_diary(1).await);
    assert!(client.hard_delete_diary(1).await);
    assert!(client.get_diaries().await.iter().all(|d| d.id != 1));
    assert!(client.get_trash_diaries().await.iter().all(|d| d.id != 1));
    assert!(!client.restore_diary(1).await);
}

#[tokio::test]
async fn server_errors_collapse_to_sentinels() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    for (method, path) in [
        ("POST", "/diaries/"),
        ("GET", "/diaries/7"),
        ("GET", "/diaries/trash/7"),
        ("DELETE", "/diaries/soft/1"),
        ("POST", "/diaries/restore/1"),
        ("DELETE", "/diaries/hard/1"),
    ] {
        server
            .mock(method, path)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;
    }

    assert!(client.create_diary("x", 5, "life").await.is_none());
    assert!(client.get_diaries().await.is_empty());
    assert!(client.get_trash_diaries().await.is_empty());
    assert!(!client.delete_diary(1).await);
    assert!(!client.restore_diary(1).await);
    assert!(!client.hard_delete_diary(1).await);

    // The rich channel keeps the status for diagnostics.
    match client.try_delete_diary(1).await {
        Err(ApiError::Protocol { status: 500, .. }) => {}
        other => panic!("Expected Protocol 500, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_listing_body_collapses_to_empty() {
    let mut server = mockito::Server::new_async().await;
    let client = client_for(&server.url());
    login_as_user_seven(&mut server, &client).await;

    server
        .mock("GET", "/diaries/7")
        .with_status(200)
        .with_body(r#"{"unexpected":"shape"}"#)
        .create_async()
        .await;

    assert!(client.get_diaries().await.is_empty());
    match client.try_get_diaries().await {
        Err(ApiError::Decode(_)) => {}
        other => panic!("Expected Decode error, got {:?}", other),
    }
}
