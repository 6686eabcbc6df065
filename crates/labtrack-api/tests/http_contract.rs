//! HTTP contract tests against an in-process axum server

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use labtrack_api::{ApiError, HttpLabApi, LabApi, LoginOutcome};
use labtrack_core::{Credentials, StatusUpdate, TestDraft, TestId, TestStatus, TestType};
use serde_json::{json, Value};

#[derive(Default)]
struct Recorded {
    bodies: Vec<(String, Value)>,
}

type Shared = Arc<Mutex<Recorded>>;

async fn login(State(rec): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    rec.lock().unwrap().bodies.push(("login".into(), body.clone()));
    if body["username"] == "admin" && body["password"] == "password123" {
        (
            StatusCode::OK,
            Json(json!({"success": true, "message": "Login successful", "token": "dummy_token_for_demo"})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
    }
}

async fn list_tests() -> impl IntoResponse {
    Json(json!([
        {
            "id": 1,
            "patient_name": "Jane Doe",
            "doctor_name": "Dr. Johnson",
            "test_type": "X-Ray",
            "status": "In Progress",
            "result": null,
            "created_at": "2024-05-01T09:30:00.123456"
        },
        {
            "id": "lab-2",
            "patient_name": "John Roe",
            "doctor_name": "Dr. Patel",
            "test_type": "Blood",
            "status": "Completed",
            "result": "Normal",
            "created_at": "2024-05-02T10:00:00"
        }
    ]))
}

async fn create_test(State(rec): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    rec.lock().unwrap().bodies.push(("create".into(), body.clone()));
    if body["patient_name"] == "" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "patient_name is required"})),
        );
    }
    (StatusCode::CREATED, Json(json!({"id": 3})))
}

async fn update_test(
    State(rec): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    rec.lock().unwrap().bodies.push((format!("update:{}", id), body));
    if id == "404" {
        return (StatusCode::NOT_FOUND, "<h1>Not Found</h1>").into_response();
    }
    (StatusCode::OK, Json(json!({"id": id}))).into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy"}))
}

async fn spawn_backend() -> (String, Shared) {
    let rec: Shared = Arc::default();
    let app = Router::new()
        .route("/login", post(login))
        .route("/tests", get(list_tests).post(create_test))
        .route("/tests/:id", put(update_test))
        .route("/health", get(health))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), rec)
}

fn client(base: &str) -> HttpLabApi {
    HttpLabApi::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_login_accepted_and_rejected() {
    let (base, rec) = spawn_backend().await;
    let api = client(&base);

    let ok = api
        .login(&Credentials::new("admin", "password123"))
        .await
        .unwrap();
    assert_eq!(ok, LoginOutcome::Accepted);

    // 401 with a success:false body is a verdict, not a failure
    let bad = api.login(&Credentials::new("admin", "nope")).await.unwrap();
    assert_eq!(bad, LoginOutcome::Rejected);

    let bodies = &rec.lock().unwrap().bodies;
    assert_eq!(
        bodies[0].1,
        json!({"username": "admin", "password": "password123"})
    );
}

#[tokio::test]
async fn test_list_tests_decodes_records() {
    let (base, _) = spawn_backend().await;
    let records = client(&base).list_tests().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, TestId::Number(1));
    assert_eq!(records[0].test_type, TestType::XRay);
    assert_eq!(records[0].status, TestStatus::InProgress);
    assert_eq!(records[0].result_text(), None);
    assert_eq!(records[1].id, TestId::Text("lab-2".into()));
    assert_eq!(records[1].result_text(), Some("Normal"));
}

#[tokio::test]
async fn test_create_sends_full_draft() {
    let (base, rec) = spawn_backend().await;
    let draft = TestDraft {
        patient_name: "Jane Doe".into(),
        doctor_name: "Dr. Johnson".into(),
        test_type: TestType::Mri,
        status: TestStatus::Pending,
        result: String::new(),
    };
    client(&base).create_test(&draft).await.unwrap();

    let bodies = &rec.lock().unwrap().bodies;
    assert_eq!(
        bodies[0].1,
        json!({
            "patient_name": "Jane Doe",
            "doctor_name": "Dr. Johnson",
            "test_type": "MRI",
            "status": "Pending",
            "result": ""
        })
    );
}

#[tokio::test]
async fn test_create_surfaces_server_error_message() {
    let (base, _) = spawn_backend().await;
    let err = client(&base)
        .create_test(&TestDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.server_message(), Some("patient_name is required"));
}

#[tokio::test]
async fn test_update_puts_status_and_result() {
    let (base, rec) = spawn_backend().await;
    let update = StatusUpdate {
        status: TestStatus::Completed,
        result: "Normal".into(),
    };
    client(&base)
        .update_test(&TestId::Number(2), &update)
        .await
        .unwrap();

    let bodies = &rec.lock().unwrap().bodies;
    assert_eq!(bodies[0].0, "update:2");
    assert_eq!(bodies[0].1, json!({"status": "Completed", "result": "Normal"}));
}

#[tokio::test]
async fn test_update_missing_record_has_no_server_message() {
    let (base, _) = spawn_backend().await;
    let err = client(&base)
        .update_test(&TestId::Number(404), &StatusUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
    assert_eq!(err.user_message("Failed to update test"), "Failed to update test");
}

#[tokio::test]
async fn test_health() {
    let (base, _) = spawn_backend().await;
    assert!(client(&base).health().await.unwrap());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .list_tests()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.server_message(), None);
}
