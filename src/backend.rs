use color_eyre::Result;

use crate::{
    api::ApiClient,
    catalog::Catalog,
    models::{Company, Question, Questions},
    services::{
        auth::{AuthBackend, AuthResponse},
        questions::{QuestionSource, SubmissionSink, SubmitOutcome},
    },
};

/// Where questions come from and where contributions and sign-ins go.
///
/// Chosen once at startup; the bundled sample data and a remote backend are
/// never consulted side by side.
#[derive(Clone)]
pub enum Backend {
    Sample(Catalog),
    Remote(ApiClient),
}

impl Backend {
    pub fn describe(&self) -> String {
        match self {
            Backend::Sample(_) => "bundled sample data".to_string(),
            Backend::Remote(api) => format!("remote backend at {}", api.base_url()),
        }
    }
}

impl QuestionSource for Backend {
    async fn list(&self) -> Result<Questions> {
        match self {
            Backend::Sample(catalog) => catalog.list().await,
            Backend::Remote(api) => api.list().await,
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Question>> {
        match self {
            Backend::Sample(catalog) => catalog.get(id).await,
            Backend::Remote(api) => api.get(id).await,
        }
    }

    async fn companies(&self) -> Result<Vec<Company>> {
        match self {
            Backend::Sample(catalog) => catalog.companies().await,
            Backend::Remote(api) => api.companies().await,
        }
    }
}

impl SubmissionSink for Backend {
    async fn submit(&self, question: &Question) -> Result<SubmitOutcome> {
        match self {
            Backend::Sample(catalog) => catalog.submit(question).await,
            Backend::Remote(api) => api.submit(question).await,
        }
    }
}

impl AuthBackend for Backend {
    async fn register(&self, username: &str, email: &str) -> Result<AuthResponse> {
        match self {
            Backend::Sample(catalog) => catalog.register(username, email).await,
            Backend::Remote(api) => api.register(username, email).await,
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        match self {
            Backend::Sample(catalog) => catalog.login(email, password).await,
            Backend::Remote(api) => api.login(email, password).await,
        }
    }

    async fn logout(&self) -> Result<AuthResponse> {
        match self {
            Backend::Sample(catalog) => catalog.logout().await,
            Backend::Remote(api) => api.logout().await,
        }
    }
}
