//! Route gating on the auth-marker cookie.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::{extractors::AuthMarker, names};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

pub fn is_public(path: &str) -> bool {
    names::PUBLIC_PATHS.contains(&path)
}

pub fn is_internal(path: &str) -> bool {
    names::INTERNAL_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Decide what to do with a request for `path`.
///
/// Public paths must match exactly. The marker is a presence flag only.
pub fn decide(path: &str, has_marker: bool) -> Decision {
    if has_marker && is_public(path) {
        return Decision::Redirect(names::DASHBOARD_URL);
    }

    if is_public(path) || is_internal(path) {
        return Decision::Allow;
    }

    if !has_marker {
        return Decision::Redirect(names::SIGN_IN_URL);
    }

    Decision::Allow
}

/// Applies [`decide`] to every routed request and hands the marker on to
/// handlers through the request extensions.
pub async fn middleware(mut req: Request, next: Next) -> Response {
    let marker = AuthMarker::from_jar(&CookieJar::from_headers(req.headers()));
    let path = req.uri().path().to_owned();

    match decide(&path, marker.is_signed_in()) {
        Decision::Allow => {
            req.extensions_mut().insert(marker);
            next.run(req).await
        }
        Decision::Redirect(to) => {
            tracing::debug!(path = %path, to, "route gate redirect");
            let is_htmx = req
                .headers()
                .get("HX-Request")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == "true");
            if is_htmx {
                (StatusCode::OK, [("HX-Redirect", to)]).into_response()
            } else {
                Redirect::to(to).into_response()
            }
        }
    }
}
