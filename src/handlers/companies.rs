use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::{AuthMarker, IsHtmx},
    rejections::{AppError, ResultExt},
    views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/companies", get(company_list))
}

#[derive(Deserialize)]
struct CompanyQuery {
    #[serde(default)]
    q: String,
}

async fn company_list(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    marker: AuthMarker,
    Query(query): Query<CompanyQuery>,
) -> Result<maud::Markup, AppError> {
    let companies = state
        .questions
        .companies(&query.q)
        .await
        .reject("could not get companies")?;

    Ok(views::render(
        is_htmx,
        "Companies",
        views::companies::company_list(&companies, &query.q),
        marker,
    ))
}
