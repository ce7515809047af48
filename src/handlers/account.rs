use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::{AuthMarker, IsHtmx},
    names,
    rejections::{AppError, ResultExt},
    services::auth::{LoginOutcome, RegisterOutcome},
    utils, views, AppState,
};

use crate::views::account as account_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sign-in", get(sign_in_page).post(sign_in_post))
        .route(
            "/create-account",
            get(create_account_page).post(create_account_post),
        )
        .route("/sign-out", post(sign_out))
}

async fn sign_in_page(IsHtmx(is_htmx): IsHtmx, marker: AuthMarker) -> maud::Markup {
    views::render(
        is_htmx,
        "Sign In",
        account_views::sign_in(account_views::SignInState::NoError, ""),
        marker,
    )
}

#[derive(Deserialize)]
struct SignInPost {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn sign_in_post(
    State(state): State<AppState>,
    marker: AuthMarker,
    Form(body): Form<SignInPost>,
) -> Result<axum::response::Response, AppError> {
    let sign_in_state = match state.auth.login(&body.email, &body.password).await {
        LoginOutcome::Success => {
            let cookie = utils::auth_cookie(state.secure_cookies)
                .reject("could not build auth cookie")?;
            let mut headers = HeaderMap::new();
            headers.insert(SET_COOKIE, cookie);
            return Ok((headers, Redirect::to(names::DASHBOARD_URL)).into_response());
        }
        LoginOutcome::EmptyFields => account_views::SignInState::EmptyFields,
        LoginOutcome::Failed(message) => account_views::SignInState::Failed(message),
    };

    Ok(views::page(
        "Sign In",
        account_views::sign_in(sign_in_state, &body.email),
        marker.is_signed_in(),
    )
    .into_response())
}

async fn create_account_page(IsHtmx(is_htmx): IsHtmx, marker: AuthMarker) -> maud::Markup {
    views::render(
        is_htmx,
        "Create Account",
        account_views::create_account(account_views::CreateAccountState::NoError, "", ""),
        marker,
    )
}

#[derive(Deserialize)]
struct CreateAccountPost {
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
}

async fn create_account_post(
    State(state): State<AppState>,
    marker: AuthMarker,
    Form(body): Form<CreateAccountPost>,
) -> axum::response::Response {
    let account_state = match state.auth.register(&body.username, &body.email).await {
        RegisterOutcome::Registered => {
            return Redirect::to(names::SIGN_IN_URL).into_response();
        }
        RegisterOutcome::EmptyFields => account_views::CreateAccountState::EmptyFields,
        RegisterOutcome::Failed(message) => account_views::CreateAccountState::Failed(message),
    };

    views::page(
        "Create Account",
        account_views::create_account(account_state, &body.username, &body.email),
        marker.is_signed_in(),
    )
    .into_response()
}

async fn sign_out(State(state): State<AppState>) -> Result<axum::response::Response, AppError> {
    state.auth.logout().await;

    let cookie = utils::clear_auth_cookie(state.secure_cookies)
        .reject("could not build auth cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    Ok((headers, Redirect::to(names::HOME_URL)).into_response())
}
