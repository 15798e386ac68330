//! Gateway tests against an in-process fake TechFlow server.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use techflow::api::{ApiError, HttpIssueApi, IssueApi};
use techflow::dispatcher::ActionDispatcher;
use techflow::issues::{IssueStatus, NewIssue, Priority};
use techflow::upload::StagedFile;

#[derive(Clone, Default)]
struct FakeServer {
    updates: Arc<Mutex<Vec<(String, Value)>>>,
    uploads: Arc<Mutex<Vec<(String, Option<String>, usize)>>>,
    resets: Arc<Mutex<usize>>,
}

async fn list_issues() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Jane", "project": "Mall Garage", "status": "Pending", "priority": null, "images": "a.jpg" },
        { "id": 2, "name": "Omar", "project": "Stadium", "status": "Completed", "priority": "Low", "tech_level": "L1" }
    ]))
}

async fn update_issue(
    State(server): State<FakeServer>,
    Path((id, kind)): Path<(i64, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    if id == 404 {
        return Json(json!({ "success": false, "error": "Issue not found" }));
    }
    server.updates.lock().unwrap().push((format!("{id}/{kind}"), body));
    Json(json!({ "success": true }))
}

async fn create_issue(State(server): State<FakeServer>, mut multipart: Multipart) -> Json<Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        server.uploads.lock().unwrap().push((name, file_name, bytes.len()));
    }
    Json(json!({ "success": true, "report_id": 42 }))
}

async fn history(Path(id): Path<i64>) -> Json<Value> {
    if id == 1 {
        Json(json!([
            { "timestamp": "2024-05-01 10:00:00", "action": "Created", "description": "Issue reported", "performed_by": "Jane" }
        ]))
    } else {
        Json(json!([]))
    }
}

async fn export() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn print() -> Json<Value> {
    Json(json!({ "success": true, "total_issues": 2 }))
}

async fn reset(State(server): State<FakeServer>) -> Json<Value> {
    *server.resets.lock().unwrap() += 1;
    Json(json!({ "success": true }))
}

async fn upload(Path(filename): Path<String>) -> impl IntoResponse {
    if filename == "gate photo.jpg" {
        (StatusCode::OK, b"jpeg-bytes".to_vec())
    } else {
        (StatusCode::NOT_FOUND, Vec::new())
    }
}

async fn spawn_server() -> (HttpIssueApi, FakeServer) {
    spawn_server_under("").await
}

/// Serve the fake API below `prefix` (empty for the root) and point a client at `http://addr/{prefix}`.
async fn spawn_server_under(prefix: &str) -> (HttpIssueApi, FakeServer) {
    let server = FakeServer::default();
    let routes = Router::new()
        .route("/api/issues", get(list_issues).post(create_issue))
        .route("/api/issues/{id}/history", get(history))
        .route("/api/issues/{id}/{kind}", put(update_issue))
        .route("/api/export", get(export))
        .route("/api/print", get(print))
        .route("/api/reset", post(reset))
        .route("/static/uploads/{filename}", get(upload))
        .with_state(server.clone());
    let mount = prefix.trim_end_matches('/');
    let app = if mount.is_empty() {
        routes
    } else {
        Router::new().nest(&format!("/{mount}"), routes)
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HttpIssueApi::new(&format!("http://{address}/{prefix}")).unwrap();
    (api, server)
}

#[tokio::test]
async fn test_list_issues() {
    let (api, _) = spawn_server().await;
    let issues = api.list_issues().await.unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].report_id, 1);
    assert_eq!(issues[0].priority, None);
    assert_eq!(issues[1].status, IssueStatus::Completed);
    assert_eq!(issues[1].priority, Some(Priority::Low));
}

#[tokio::test]
async fn test_update_sends_body_to_action_path() {
    let (api, server) = spawn_server().await;
    let dispatcher = ActionDispatcher::new("Technical Team");

    let request = dispatcher.set_priority(7, Some(Priority::High)).unwrap();
    api.update_issue(&request).await.unwrap();
    api.update_issue(&dispatcher.complete(7, "")).await.unwrap();

    let updates = server.updates.lock().unwrap().clone();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].0, "7/priority");
    assert_eq!(updates[0].1, json!({ "priority": "High", "performed_by": "Technical Team" }));
    assert_eq!(updates[1].0, "7/complete");
    assert_eq!(updates[1].1["resolution_notes"], "Issue resolved successfully");
}

#[tokio::test]
async fn test_update_rejection_carries_server_text() {
    let (api, _) = spawn_server().await;
    let request = ActionDispatcher::default().start(404);

    let error = api.update_issue(&request).await.unwrap_err();
    assert!(error.is_rejection());
    assert_eq!(error.user_message("Failed to update", "Failed to update issue"), "Issue not found");
}

#[tokio::test]
async fn test_create_issue_uploads_images() {
    let (api, server) = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("one.jpg");
    let second = dir.path().join("two.png");
    std::fs::write(&first, [1u8; 10]).unwrap();
    std::fs::write(&second, [2u8; 20]).unwrap();

    let issue = NewIssue {
        name: "Jane".to_string(),
        phone: "+15551234567".to_string(),
        email: "jane@example.com".to_string(),
        project: "Mall Garage".to_string(),
        description: "Barrier stuck open".to_string(),
    };
    let images = vec![
        StagedFile::from_path(&first).unwrap(),
        StagedFile::from_path(&second).unwrap(),
    ];

    let report_id = api.create_issue(&issue, &images).await.unwrap();
    assert_eq!(report_id, "42");

    let uploads = server.uploads.lock().unwrap().clone();
    let names: Vec<_> = uploads.iter().map(|(name, _, _)| name.as_str()).collect();
    assert_eq!(names, vec!["name", "phone", "email", "project", "description", "image_0", "image_1"]);
    assert_eq!(uploads[5], ("image_0".to_string(), Some("one.jpg".to_string()), 10));
    assert_eq!(uploads[6], ("image_1".to_string(), Some("two.png".to_string()), 20));
}

#[tokio::test]
async fn test_history() {
    let (api, _) = spawn_server().await;

    let entries = api.history(1).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "Created");

    assert!(api.history(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_export_non_ok_status_is_an_error() {
    let (api, _) = spawn_server().await;
    let error = api.export().await.unwrap_err();
    assert!(matches!(error, ApiError::Status(500)));
    assert_eq!(error.user_message("unused", "Failed to export data"), "Failed to export data");
}

#[tokio::test]
async fn test_print_and_reset() {
    let (api, server) = spawn_server().await;

    assert_eq!(api.print().await.unwrap(), 2);
    api.reset().await.unwrap();
    assert_eq!(*server.resets.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_fetch_image() {
    let (api, _) = spawn_server().await;

    assert_eq!(api.fetch_image("gate photo.jpg").await.unwrap(), b"jpeg-bytes");
    assert!(matches!(api.fetch_image("missing.jpg").await, Err(ApiError::Status(404))));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let (api, server) = spawn_server_under("techflow").await;

    assert_eq!(api.list_issues().await.unwrap().len(), 2);
    assert_eq!(api.history(1).await.unwrap().len(), 1);
    api.update_issue(&ActionDispatcher::default().start(3)).await.unwrap();
    assert_eq!(server.updates.lock().unwrap()[0].0, "3/start");
    assert_eq!(api.print().await.unwrap(), 2);
    assert_eq!(api.fetch_image("gate photo.jpg").await.unwrap(), b"jpeg-bytes");
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_ignored() {
    let (api, _) = spawn_server_under("techflow/").await;

    assert_eq!(api.list_issues().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpIssueApi::new(&format!("http://{address}")).unwrap();
    let error = api.list_issues().await.unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)));
    assert!(!error.is_rejection());
}

#[test]
fn test_invalid_base_url() {
    assert!(HttpIssueApi::new("not a url").is_err());
}
