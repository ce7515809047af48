mod common;

use axum::http::StatusCode;
use common::{app, body_text, get, send, signed_in_cookie};

#[tokio::test]
async fn question_list_filters_by_difficulty() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, get("/questions?difficulty=Hard", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Merge k Sorted Lists"));
    assert!(!html.contains("Two Sum"));
}

#[tokio::test]
async fn question_list_searches_titles() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, get("/questions?q=two+sum", Some(&cookie))).await;

    let html = body_text(resp).await;
    assert!(html.contains("Two Sum"));
    assert!(!html.contains("Merge k Sorted Lists"));
}

#[tokio::test]
async fn question_detail_renders_inline_code() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, get("/questions/3", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Processes vs Threads"));
    assert!(html.contains("<code>fork()</code> gives isolation"));
    assert!(!html.contains("&lt;code&gt;"));
    assert!(!html.contains("language-c"));
}

#[tokio::test]
async fn missing_question_is_not_found() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, get("/questions/does-not-exist", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_text(resp).await;
    assert!(html.contains("Question not found"));
}

#[tokio::test]
async fn company_search_ignores_case() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, get("/companies?q=GOO", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Google"));
    assert!(!html.contains("Microsoft"));
}
