//! Integration tests for todo CRUD endpoints
//!
//! The pagination test truncates the todos table, so run this suite
//! against a dedicated database with `--test-threads=1`.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_todo_roundtrip() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let body = json!({
        "name": "Buy groceries",
        "desc": "Milk, eggs, bread"
    });
    let (status, response) = app
        .post_auth("/api/todos", &user.token, &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["name"], json!("Buy groceries"));
    assert_eq!(created["desc"], json!("Milk, eggs, bread"));
    assert_eq!(created["isDone"], json!(false));
    assert_eq!(created["ownerId"], json!(user.id.to_string()));

    let id = created["id"].as_str().unwrap();
    let (status, response) = app
        .get_auth(&format!("/api/todos/{}", id), &user.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_todo_with_done_flag() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let body = json!({
        "name": "Already finished",
        "desc": "Done before it was tracked",
        "isDone": true
    });
    let (status, response) = app
        .post_auth("/api/todos", &user.token, &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["isDone"], json!(true));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_todo_requires_name_and_desc() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let missing_name = json!({ "desc": "No name here" });
    let (status, response) = app
        .post_auth("/api/todos", &user.token, &missing_name.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["code"], json!("VALIDATION_ERROR"));

    let missing_desc = json!({ "name": "No description" });
    let (status, _) = app
        .post_auth("/api/todos", &user.token, &missing_desc.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_todo_requires_authentication() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Sneaky", "desc": "No token" });
    let (status, response) = app.post("/api/todos", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["message"], json!("You are not authenticated"));

    let (status, _) = app.get("/api/todos").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_missing_todo_returns_404() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let (status, response) = app
        .get_auth(
            &format!("/api/todos/{}", uuid::Uuid::new_v4()),
            &user.token,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["code"], json!("NOT_FOUND"));
    assert_eq!(error["message"], json!("Todo not found"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_touches_only_sent_fields() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let todo = app
        .create_todo(&user.token, "Water the plants", "Both ferns and the cactus")
        .await;
    let id = todo["id"].as_str().unwrap();

    let patch = json!({ "isDone": true });
    let (status, response) = app
        .put_auth(&format!("/api/todos/{}", id), &user.token, &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["isDone"], json!(true));
    assert_eq!(updated["name"], json!("Water the plants"));
    assert_eq!(updated["desc"], json!("Both ferns and the cactus"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_rejects_empty_name() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let todo = app.create_todo(&user.token, "Named", "Described").await;
    let id = todo["id"].as_str().unwrap();

    let patch = json!({ "name": "" });
    let (status, _) = app
        .put_auth(&format!("/api/todos/{}", id), &user.token, &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_foreign_todo_forbidden() {
    let app = common::TestApp::new().await;
    let owner = app.register_user("SecurePassword123").await;
    let intruder = app.register_user("SecurePassword123").await;

    let todo = app.create_todo(&owner.token, "Private", "Owner only").await;
    let id = todo["id"].as_str().unwrap();

    let patch = json!({ "isDone": true });
    let (status, response) = app
        .put_auth(
            &format!("/api/todos/{}", id),
            &intruder.token,
            &patch.to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let error: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(error["code"], json!("AUTHORIZATION_ERROR"));
    assert_eq!(error["message"], json!("You are not authorized"));

    // The todo is untouched
    let (status, response) = app
        .get_auth(&format!("/api/todos/{}", id), &owner.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched["isDone"], json!(false));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_can_update_foreign_todo() {
    let app = common::TestApp::new().await;
    let owner = app.register_user("SecurePassword123").await;
    let admin = app.register_user("SecurePassword123").await;
    let admin = app.promote_to_admin(&admin, "SecurePassword123").await;

    let todo = app.create_todo(&owner.token, "Reviewed", "By an admin").await;
    let id = todo["id"].as_str().unwrap();

    let patch = json!({ "isDone": true });
    let (status, response) = app
        .put_auth(&format!("/api/todos/{}", id), &admin.token, &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["isDone"], json!(true));
    assert_eq!(updated["ownerId"], json!(owner.id.to_string()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_todo() {
    let app = common::TestApp::new().await;
    let user = app.register_user("SecurePassword123").await;

    let todo = app.create_todo(&user.token, "Ephemeral", "Soon gone").await;
    let id = todo["id"].as_str().unwrap();

    let (status, response) = app
        .delete_auth(&format!("/api/todos/{}", id), &user.token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let confirmation: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(confirmation, json!("Todo has been deleted"));

    let (status, _) = app
        .get_auth(&format!("/api/todos/{}", id), &user.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A second delete finds nothing
    let (status, _) = app
        .delete_auth(&format!("/api/todos/{}", id), &user.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_foreign_todo_forbidden() {
    let app = common::TestApp::new().await;
    let owner = app.register_user("SecurePassword123").await;
    let intruder = app.register_user("SecurePassword123").await;

    let todo = app.create_todo(&owner.token, "Guarded", "Hands off").await;
    let id = todo["id"].as_str().unwrap();

    let (status, _) = app
        .delete_auth(&format!("/api/todos/{}", id), &intruder.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .get_auth(&format!("/api/todos/{}", id), &owner.token)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_pagination_windows() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let user = app.register_user("SecurePassword123").await;

    for i in 0..25 {
        app.create_todo(&user.token, &format!("todo_{:02}", i), "paged")
            .await;
    }

    let page = |n: i64| format!("/api/todos?limit=10&page={}", n);
    let names = |body: &str| -> Vec<String> {
        let items: Vec<serde_json::Value> = serde_json::from_str(body).unwrap();
        items
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    };
    let expected = |range: std::ops::Range<usize>| -> Vec<String> {
        range.map(|i| format!("todo_{:02}", i)).collect()
    };

    // No pagination params: everything, oldest first
    let (status, body) = app.get_auth("/api/todos", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(0..25));

    let (status, body) = app.get_auth(&page(1), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(0..10));

    let (status, body) = app.get_auth(&page(2), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(10..20));

    let (status, body) = app.get_auth(&page(3), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(20..25));

    let (status, body) = app.get_auth(&page(4), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&body).is_empty());

    // Page zero and negative pages clamp to the first window
    let (status, body) = app.get_auth(&page(0), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(0..10));

    let (status, body) = app.get_auth(&page(-1), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(0..10));

    let (status, body) = app.get_auth(&page(-1000), &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected(0..10));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_is_visible_to_any_authenticated_user() {
    let app = common::TestApp::new().await;
    let writer = app.register_user("SecurePassword123").await;
    let reader = app.register_user("SecurePassword123").await;

    let todo = app.create_todo(&writer.token, "Shared view", "Readable").await;
    let id = todo["id"].as_str().unwrap();

    let (status, _) = app
        .get_auth(&format!("/api/todos/{}", id), &reader.token)
        .await;
    assert_eq!(status, StatusCode::OK);
}
