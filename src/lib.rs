pub mod api;
pub mod backend;
pub mod catalog;
pub mod contribution;
pub mod extractors;
pub mod gate;
pub mod handlers;
pub mod inline_code;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

use crate::{
    backend::Backend,
    services::{auth::AuthService, questions::QuestionService},
};

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionService,
    pub auth: AuthService,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(backend: Backend, secure_cookies: bool) -> Self {
        Self {
            questions: QuestionService::new(backend.clone(), backend.clone()),
            auth: AuthService::new(backend),
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::account::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::companies::routes())
        .merge(handlers::contribute::routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(gate::middleware))
        .nest("/static", statics::routes())
        .with_state(state)
}
