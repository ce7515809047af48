use axum::http::{header::InvalidHeaderValue, HeaderValue};

use crate::names;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(
    name: &str,
    value: &str,
    max_age: i64,
    secure: bool,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; HttpOnly; Max-Age={max_age}; Path=/; SameSite=Lax{secure}"
    ))
}

/// `Set-Cookie` value that marks the browser as signed in.
pub fn auth_cookie(secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    cookie(
        names::AUTH_COOKIE_NAME,
        "true",
        names::AUTH_COOKIE_MAX_AGE_SECS,
        secure,
    )
}

/// `Set-Cookie` value that removes the auth marker.
pub fn clear_auth_cookie(secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    cookie(names::AUTH_COOKIE_NAME, "", 0, secure)
}
