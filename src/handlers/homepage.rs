use axum::{extract::State, routing::get, Router};

use crate::{
    extractors::{AuthMarker, IsHtmx},
    models::QuestionType,
    rejections::{AppError, ResultExt},
    services::questions::ListFilter,
    views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/dashboard", get(dashboard))
}

async fn homepage(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    marker: AuthMarker,
) -> Result<maud::Markup, AppError> {
    let questions = state
        .questions
        .list(&ListFilter::default())
        .await
        .reject("could not get questions")?;
    let companies = state
        .questions
        .companies("")
        .await
        .reject("could not get companies")?;

    let stats = homepage_views::Stats {
        questions: questions.len(),
        companies: companies.len(),
        categories: QuestionType::ALL.len(),
    };

    Ok(views::render(
        is_htmx,
        "Home",
        homepage_views::landing_page(&stats),
        marker,
    ))
}

async fn dashboard(IsHtmx(is_htmx): IsHtmx, marker: AuthMarker) -> maud::Markup {
    views::render(is_htmx, "Dashboard", homepage_views::dashboard(), marker)
}
