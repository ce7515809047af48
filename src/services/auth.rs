use color_eyre::Result;
use serde::Deserialize;

use crate::backend::Backend;

// ---------------------------------------------------------------------------
// AuthBackend trait (the service owns the abstraction it talks to)
// ---------------------------------------------------------------------------

/// Reply of the external auth backend to every call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthBackend: Send + Sync {
    fn register(
        &self,
        username: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<AuthResponse>> + Send;

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<AuthResponse>> + Send;

    fn logout(&self) -> impl std::future::Future<Output = Result<AuthResponse>> + Send;
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

pub enum RegisterOutcome {
    /// Account created, the user should sign in next.
    Registered,
    /// Required fields were empty.
    EmptyFields,
    /// Backend refused or could not be reached. The message is shown as-is.
    Failed(String),
}

pub enum LoginOutcome {
    /// Credentials accepted, the auth marker may be set.
    Success,
    EmptyFields,
    Failed(String),
}

const REGISTER_REFUSED: &str = "Registration failed. Please try again.";
const REGISTER_UNREACHABLE: &str =
    "An error occurred while creating your account. Please try again later.";
const LOGIN_REFUSED: &str = "Login failed. Please try again.";
const LOGIN_UNREACHABLE: &str = "An error occurred while logging in. Please try again later.";

// ---------------------------------------------------------------------------
// AuthService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AuthService<B: AuthBackend = Backend> {
    backend: B,
}

impl<B: AuthBackend> AuthService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn register(&self, username: &str, email: &str) -> RegisterOutcome {
        let (username, email) = (username.trim(), email.trim());
        if username.is_empty() || email.is_empty() {
            return RegisterOutcome::EmptyFields;
        }

        match self.backend.register(username, email).await {
            Ok(resp) if resp.success => {
                tracing::debug!("registered account");
                RegisterOutcome::Registered
            }
            Ok(resp) => RegisterOutcome::Failed(
                resp.message.unwrap_or_else(|| REGISTER_REFUSED.to_string()),
            ),
            Err(e) => {
                tracing::error!("auth backend register call failed: {e}");
                RegisterOutcome::Failed(REGISTER_UNREACHABLE.to_string())
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::EmptyFields;
        }

        match self.backend.login(email, password).await {
            Ok(resp) if resp.success => LoginOutcome::Success,
            Ok(resp) => {
                LoginOutcome::Failed(resp.message.unwrap_or_else(|| LOGIN_REFUSED.to_string()))
            }
            Err(e) => {
                tracing::error!("auth backend login call failed: {e}");
                LoginOutcome::Failed(LOGIN_UNREACHABLE.to_string())
            }
        }
    }

    /// Tells the backend the session is over. Failures are logged only; the
    /// marker is cleared regardless.
    pub async fn logout(&self) {
        match self.backend.logout().await {
            Ok(resp) if !resp.success => {
                tracing::warn!("auth backend refused logout: {:?}", resp.message);
            }
            Ok(_) => {}
            Err(e) => tracing::error!("auth backend logout call failed: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
