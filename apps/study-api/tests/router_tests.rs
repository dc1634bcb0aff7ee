//! Router-level tests for study-api
//!
//! Drives the full HTTP surface against an in-memory sqlite database,
//! checking validation, not-found semantics, and the plan read shape.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use study_api::state::AppState;

const SAMPLE_TEXT: &str = "Photosynthesis converts light energy into chemical energy. \
    The process of photosynthesis occurs in chloroplasts. \
    Chloroplasts contain chlorophyll pigments that absorb light. \
    Photosynthesis produces glucose and oxygen from carbon dioxide and water. \
    Cellular respiration later consumes that glucose.";

async fn test_app() -> Router {
    let state = AppState::in_memory().await.unwrap();
    study_api::router(Arc::new(state))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn upload_text_document(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/documents",
            json!({ "title": "Biology notes", "text": SAMPLE_TEXT }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["document"]["id"].as_str().unwrap().to_string()
}

async fn create_plan(app: &Router, document_id: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/study-plans",
            json!({
                "document_id": document_id,
                "plan_name": "Biology midterm",
                "start_date": "2025-06-01",
                "deadline": "2025-06-03",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["plan_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_rejects_thin_text() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/documents",
            json!({ "title": "Sticky note", "text": "too short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_plan_rejects_short_name() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/study-plans",
            json!({
                "document_id": "irrelevant",
                "plan_name": "ab",
                "deadline": "2025-06-03",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_plan_unknown_document_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/study-plans",
            json!({
                "document_id": "no-such-document",
                "plan_name": "Biology midterm",
                "deadline": "2025-06-03",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_plan_unknown_id_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/study-plans/no-such-plan"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_plan_returns_goals_and_progress_entries() {
    let app = test_app().await;
    let document_id = upload_text_document(&app).await;
    let plan_id = create_plan(&app, &document_id).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/study-plans/{}", plan_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plan = body_json(response).await;
    assert_eq!(plan["total_days"], 3);
    assert_eq!(plan["goals"].as_array().unwrap().len(), 3);
    assert_eq!(plan["goals"][0]["day_number"], 1);
    assert_eq!(plan["goals"][0]["date"], "2025-06-01");
    assert_eq!(plan["completed_goals"], 0);
    assert_eq!(plan["completion_rate"], 0);
    assert_eq!(plan["progress_entries"].as_array().unwrap().len(), 0);

    // Record a progress entry; the next read includes it
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/study-plans/{}/progress", plan_id),
            json!({ "notes": "Reviewed day one", "mastery": 60 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/study-plans/{}", plan_id)))
        .await
        .unwrap();
    let plan = body_json(response).await;
    let entries = plan["progress_entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["notes"], "Reviewed day one");
    assert_eq!(entries[0]["mastery"], 60);
}

#[tokio::test]
async fn test_list_plans_includes_progress_entries() {
    let app = test_app().await;
    let document_id = upload_text_document(&app).await;
    let plan_id = create_plan(&app, &document_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/study-plans/{}/progress", plan_id),
            json!({ "mood": "focused" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/api/study-plans")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let plans = body_json(response).await;
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["progress_entries"][0]["mood"], "focused");
}

#[tokio::test]
async fn test_progress_unknown_plan_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/study-plans/no-such-plan/progress",
            json!({ "notes": "lost" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_progress_goal_outside_plan_is_404() {
    let app = test_app().await;
    let document_id = upload_text_document(&app).await;
    let plan_id = create_plan(&app, &document_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/study-plans/{}/progress", plan_id),
            json!({ "goal_id": "goal-from-another-plan", "notes": "misfiled" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_goal_marks_completion() {
    let app = test_app().await;
    let document_id = upload_text_document(&app).await;
    let plan_id = create_plan(&app, &document_id).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/study-plans/{}", plan_id)))
        .await
        .unwrap();
    let plan = body_json(response).await;
    let goal_id = plan["goals"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/study-plans/{}/goals/{}", plan_id, goal_id),
            json!({ "completed": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/study-plans/{}", plan_id)))
        .await
        .unwrap();
    let plan = body_json(response).await;
    assert_eq!(plan["completed_goals"], 1);
    assert_eq!(plan["completion_rate"], 33);
}
