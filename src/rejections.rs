use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    NotFound,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
            AppError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(context) = &self {
            tracing::debug!("request failed: {context}");
        }
        (self.status(), error_page(self.message())).into_response()
    }
}

/// Maps any displayable error into an [`AppError`], logging the cause.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            AppError::Internal(context)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to home" } }
        },
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_status_codes() {
        assert_eq!(
            AppError::Internal("x").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn reject_wraps_the_error() {
        let res: Result<(), String> = Err("boom".to_string());
        assert!(matches!(res.reject("could not load"), Err(AppError::Internal("could not load"))));
    }
}
