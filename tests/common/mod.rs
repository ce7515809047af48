use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use interview_prep::{backend::Backend, catalog::Catalog, names, router, AppState};
use tower::ServiceExt;

pub const PASSWORD: &str = "letmein";

pub fn app() -> Router {
    let catalog = Catalog::sample(PASSWORD).expect("sample data should parse");
    router(AppState::new(Backend::Sample(catalog), false))
}

pub fn signed_in_cookie() -> String {
    format!("{}=true", names::AUTH_COOKIE_NAME)
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router should respond")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        req = req.header("cookie", cookie);
    }
    req.body(Body::empty()).expect("request build should succeed")
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        req = req.header("cookie", cookie);
    }
    req.body(Body::from(body.to_owned()))
        .expect("request build should succeed")
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
}
