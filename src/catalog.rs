//! In-process question data used when no external backend is configured.

use std::sync::Arc;

use color_eyre::Result;

use crate::{
    models::{Company, Question, Questions},
    services::{
        auth::{AuthBackend, AuthResponse},
        questions::{QuestionSource, SubmissionSink, SubmitOutcome},
    },
};

const QUESTIONS_JSON: &str = include_str!("../data/questions.json");
const COMPANIES_JSON: &str = include_str!("../data/companies.json");

#[derive(Clone)]
pub struct Catalog {
    questions: Arc<Questions>,
    companies: Arc<Vec<Company>>,
    shared_password: Arc<str>,
}

impl Catalog {
    pub fn new(questions: Questions, companies: Vec<Company>, shared_password: &str) -> Self {
        Self {
            questions: Arc::new(questions),
            companies: Arc::new(companies),
            shared_password: Arc::from(shared_password),
        }
    }

    /// The bundled sample questions and companies.
    pub fn sample(shared_password: &str) -> Result<Self> {
        let questions = serde_json::from_str::<Questions>(QUESTIONS_JSON)?;
        let companies = serde_json::from_str::<Vec<Company>>(COMPANIES_JSON)?;
        tracing::info!(
            "loaded {} sample questions and {} companies",
            questions.len(),
            companies.len()
        );
        Ok(Self::new(questions, companies, shared_password))
    }
}

impl QuestionSource for Catalog {
    async fn list(&self) -> Result<Questions> {
        Ok(self.questions.as_ref().clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Question>> {
        Ok(self.questions.iter().find(|q| q.id() == id).cloned())
    }

    async fn companies(&self) -> Result<Vec<Company>> {
        Ok(self.companies.as_ref().clone())
    }
}

impl SubmissionSink for Catalog {
    /// Nothing is stored, the record is only logged.
    async fn submit(&self, question: &Question) -> Result<SubmitOutcome> {
        let record = serde_json::to_string(question)?;
        tracing::info!(id = question.id(), "question submitted: {record}");
        Ok(SubmitOutcome::Accepted { id: None })
    }
}

impl AuthBackend for Catalog {
    async fn register(&self, _username: &str, _email: &str) -> Result<AuthResponse> {
        tracing::debug!("sample backend accepted a registration");
        Ok(AuthResponse::ok())
    }

    async fn login(&self, _email: &str, password: &str) -> Result<AuthResponse> {
        if password == &*self.shared_password {
            Ok(AuthResponse::ok())
        } else {
            Ok(AuthResponse::failed("Invalid email or password."))
        }
    }

    async fn logout(&self) -> Result<AuthResponse> {
        Ok(AuthResponse::ok())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType};

    #[test]
    fn sample_data_parses() {
        let catalog = Catalog::sample("pw").unwrap();
        assert_eq!(catalog.questions.len(), 5);
        assert_eq!(catalog.companies.len(), 5);

        let types: Vec<_> = catalog.questions.iter().map(|q| q.question_type).collect();
        for t in QuestionType::ALL {
            assert!(types.contains(&Some(t)), "missing sample for {t}");
        }
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let catalog = Catalog::sample("pw").unwrap();
        let two_sum = catalog.get("1").await.unwrap().unwrap();
        assert_eq!(two_sum.title, "Two Sum");
        assert_eq!(two_sum.difficulty, Difficulty::Easy);
        assert_eq!(two_sum.test_cases.len(), 2);
        assert!(catalog.get("404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn login_checks_the_shared_password() {
        let catalog = Catalog::sample("letmein").unwrap();
        assert!(catalog.login("a@b.com", "letmein").await.unwrap().success);
        assert!(!catalog.login("a@b.com", "nope").await.unwrap().success);
    }

    #[tokio::test]
    async fn submit_accepts_without_assigning_an_id() {
        let catalog = Catalog::sample("pw").unwrap();
        let q = Question::new("01HZX", "New one", Difficulty::Hard);
        assert_eq!(
            catalog.submit(&q).await.unwrap(),
            SubmitOutcome::Accepted { id: None }
        );
    }
}
