pub const HOME_URL: &str = "/";
pub const SIGN_IN_URL: &str = "/sign-in";
pub const CREATE_ACCOUNT_URL: &str = "/create-account";
pub const SIGN_OUT_URL: &str = "/sign-out";
pub const DASHBOARD_URL: &str = "/dashboard";
pub const QUESTIONS_URL: &str = "/questions";
pub const COMPANIES_URL: &str = "/companies";
pub const CONTRIBUTE_URL: &str = "/contribute";
pub const CONTRIBUTE_FORM_URL: &str = "/contribute/form";
pub const CONTRIBUTE_PREVIEW_URL: &str = "/contribute/preview";

/// Pages reachable without the auth marker. Signed-in users are sent away
/// from these to the dashboard.
pub const PUBLIC_PATHS: &[&str] = &[HOME_URL, SIGN_IN_URL, CREATE_ACCOUNT_URL];

/// Prefixes that bypass the route gate entirely.
pub const INTERNAL_PREFIXES: &[&str] = &["/static", "/api"];

// Presence of this cookie is the whole auth check, its value is ignored.
pub const AUTH_COOKIE_NAME: &str = "isAuthenticated";
pub const AUTH_COOKIE_MAX_AGE_SECS: i64 = 86_400;

pub fn question_url(id: &str) -> String {
    format!("/questions/{id}")
}
