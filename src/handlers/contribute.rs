use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};

use crate::{
    contribution::ContributionForm,
    extractors::{AuthMarker, IsHtmx},
    names,
    services::questions::ContributeOutcome,
    views, AppState,
};

use crate::views::contribute as contribute_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CONTRIBUTE_URL, get(contribute_page).post(contribute_post))
        .route(names::CONTRIBUTE_FORM_URL, post(switch_type))
        .route(names::CONTRIBUTE_PREVIEW_URL, post(preview))
}

type Fields = Vec<(String, String)>;

fn form_from(fields: &Fields) -> ContributionForm {
    ContributionForm::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

async fn contribute_page(IsHtmx(is_htmx): IsHtmx, marker: AuthMarker) -> maud::Markup {
    views::render(
        is_htmx,
        "Contribute",
        contribute_views::contribute_page(&ContributionForm::new(), &contribute_views::Notice::None),
        marker,
    )
}

async fn contribute_post(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    marker: AuthMarker,
    Form(fields): Form<Fields>,
) -> maud::Markup {
    let form = form_from(&fields);

    let (form, notice) = match state.questions.contribute(&form).await {
        ContributeOutcome::Submitted { id, title } => {
            tracing::info!(id = %id, "question contributed");
            (
                ContributionForm::new(),
                contribute_views::Notice::Submitted { id, title },
            )
        }
        ContributeOutcome::MissingFields(missing) => {
            (form, contribute_views::Notice::MissingFields(missing))
        }
        ContributeOutcome::Rejected(message) => (form, contribute_views::Notice::Rejected(message)),
    };

    views::render(
        is_htmx,
        "Contribute",
        contribute_views::contribute_page(&form, &notice),
        marker,
    )
}

/// Re-renders the form after the question type changes. Every typed value
/// comes back, including those the new type hides.
async fn switch_type(Form(fields): Form<Fields>) -> maud::Markup {
    contribute_views::contribution_form(&form_from(&fields), &[])
}

async fn preview(Form(fields): Form<Fields>) -> maud::Markup {
    contribute_views::preview(&form_from(&fields))
}
