mod common;

use axum::http::StatusCode;
use common::{app, body_text, location, post_form, send, signed_in_cookie, PASSWORD};
use interview_prep::names;

#[tokio::test]
async fn sign_in_sets_the_marker_and_redirects_to_the_dashboard() {
    let app = app();
    let body = format!("email=ada%40example.com&password={PASSWORD}");

    let resp = send(&app, post_form(names::SIGN_IN_URL, &body, None)).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(names::DASHBOARD_URL));
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("sign in should set a cookie");
    assert!(cookie.starts_with(&format!("{}=", names::AUTH_COOKIE_NAME)));
    assert!(cookie.contains("Max-Age=86400"));
}

#[tokio::test]
async fn wrong_password_keeps_the_visitor_on_the_form() {
    let app = app();

    let resp = send(
        &app,
        post_form(names::SIGN_IN_URL, "email=ada%40example.com&password=nope", None),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("set-cookie").is_none());
    let html = body_text(resp).await;
    assert!(html.contains("ada@example.com"));
}

#[tokio::test]
async fn empty_sign_in_fields_are_reported() {
    let app = app();

    let resp = send(&app, post_form(names::SIGN_IN_URL, "email=&password=", None)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn create_account_redirects_to_sign_in() {
    let app = app();

    let resp = send(
        &app,
        post_form(
            names::CREATE_ACCOUNT_URL,
            "username=ada&email=ada%40example.com",
            None,
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(names::SIGN_IN_URL));
}

#[tokio::test]
async fn sign_out_clears_the_marker() {
    let app = app();
    let cookie = signed_in_cookie();

    let resp = send(&app, post_form(names::SIGN_OUT_URL, "", Some(&cookie))).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(names::HOME_URL));
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("sign out should clear the cookie");
    assert!(set_cookie.contains("Max-Age=0"));
}
