use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::{AuthMarker, IsHtmx},
    models::{Difficulty, QuestionType},
    rejections::{AppError, ResultExt},
    services::questions::ListFilter,
    views, AppState,
};

use crate::views::questions as question_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(question_list))
        .route("/questions/{id}", get(question_detail))
}

#[derive(Deserialize, Default)]
struct ListQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    difficulty: String,
    #[serde(default, rename = "type")]
    question_type: String,
}

impl From<ListQuery> for ListFilter {
    fn from(query: ListQuery) -> Self {
        ListFilter {
            query: query.q,
            difficulty: Difficulty::parse(&query.difficulty),
            question_type: QuestionType::parse(&query.question_type),
        }
    }
}

async fn question_list(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    marker: AuthMarker,
    Query(query): Query<ListQuery>,
) -> Result<maud::Markup, AppError> {
    let filter = ListFilter::from(query);
    let questions = state
        .questions
        .list(&filter)
        .await
        .reject("could not get questions")?;

    Ok(views::render(
        is_htmx,
        "Questions",
        question_views::question_list(&questions, &filter),
        marker,
    ))
}

async fn question_detail(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    marker: AuthMarker,
    Path(id): Path<String>,
) -> Result<axum::response::Response, AppError> {
    let question = state
        .questions
        .get(&id)
        .await
        .reject("could not get question")?;

    let Some(question) = question else {
        return Ok((
            StatusCode::NOT_FOUND,
            views::render(
                is_htmx,
                "Question not found",
                question_views::question_not_found(),
                marker,
            ),
        )
            .into_response());
    };

    Ok(views::render(
        is_htmx,
        &question.title,
        question_views::question_detail(&question),
        marker,
    )
    .into_response())
}
