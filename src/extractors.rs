use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::names;

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// Whether the request carries the auth-marker cookie.
///
/// This is not a credential. The route gate derives it once per request and
/// stores it in the extensions; handlers and views receive it from there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthMarker(bool);

impl AuthMarker {
    pub fn from_jar(jar: &CookieJar) -> Self {
        AuthMarker(jar.get(names::AUTH_COOKIE_NAME).is_some())
    }

    pub fn is_signed_in(self) -> bool {
        self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthMarker {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Routes outside the gate layer fall back to reading the cookie.
        let marker = parts
            .extensions
            .get::<AuthMarker>()
            .copied()
            .unwrap_or_else(|| AuthMarker::from_jar(&CookieJar::from_headers(&parts.headers)));
        Ok(marker)
    }
}
