//! Thin client for the external question and auth backend.

use color_eyre::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Company, Question, Questions},
    services::{
        auth::{AuthBackend, AuthResponse},
        questions::{QuestionSource, SubmissionSink, SubmitOutcome},
    },
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const SUBMIT_REFUSED: &str = "Submission failed. Please try again.";

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

impl From<SubmitResponse> for SubmitOutcome {
    fn from(resp: SubmitResponse) -> Self {
        if resp.success {
            SubmitOutcome::Accepted { id: resp.id }
        } else {
            SubmitOutcome::Rejected(resp.message.unwrap_or_else(|| SUBMIT_REFUSED.to_string()))
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `/questions/{id}` with the id percent-encoded as a single path segment.
    fn question_url(&self, id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url("/questions"))?;
        url.path_segments_mut()
            .map_err(|_| color_eyre::eyre::eyre!("backend url {} cannot take a path", self.base_url))?
            .push(id);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.client.get(self.url(path)).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            tracing::error!("backend GET {path} returned {status}");
            color_eyre::eyre::bail!("backend returned {status} for {path}");
        }
        Ok(resp.json().await?)
    }

    /// POST and read the `{ success, message }` envelope. The envelope is
    /// trusted even on error statuses, since the backend reports refusals
    /// that way.
    async fn post_auth<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<AuthResponse> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        match serde_json::from_str::<AuthResponse>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!("backend POST {path} returned {status}: {text}");
                Err(color_eyre::eyre::eyre!("unreadable auth response ({status}): {e}"))
            }
        }
    }
}

impl QuestionSource for ApiClient {
    async fn list(&self) -> Result<Questions> {
        self.get_json("/questions").await
    }

    async fn get(&self, id: &str) -> Result<Option<Question>> {
        let url = self.question_url(id)?;
        let resp = self.client.get(url.clone()).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            color_eyre::eyre::bail!("backend returned {} for {}", resp.status(), url.path());
        }
        Ok(Some(resp.json().await?))
    }

    async fn companies(&self) -> Result<Vec<Company>> {
        self.get_json("/companies").await
    }
}

impl SubmissionSink for ApiClient {
    async fn submit(&self, question: &Question) -> Result<SubmitOutcome> {
        let resp = self
            .client
            .post(self.url("/questions"))
            .json(question)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        match serde_json::from_str::<SubmitResponse>(&text) {
            Ok(parsed) => Ok(parsed.into()),
            Err(_) if status.is_success() => Ok(SubmitOutcome::Accepted { id: None }),
            Err(e) => {
                tracing::error!("backend rejected question submission with {status}: {text}");
                Err(color_eyre::eyre::eyre!("question submission failed ({status}): {e}"))
            }
        }
    }
}

impl AuthBackend for ApiClient {
    async fn register(&self, username: &str, email: &str) -> Result<AuthResponse> {
        self.post_auth("/auth/register", &RegisterRequest { username, email })
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.post_auth("/auth/login", &LoginRequest { email, password })
            .await
    }

    async fn logout(&self) -> Result<AuthResponse> {
        self.post_auth("/auth/logout", &serde_json::json!({})).await
    }
}
