use color_eyre::Result;

use crate::{
    backend::Backend,
    contribution::{ContributionForm, Field},
    models::{Company, Difficulty, Question, QuestionType, Questions},
};

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuestionSource: Send + Sync {
    fn list(&self) -> impl std::future::Future<Output = Result<Questions>> + Send;

    fn get(&self, id: &str) -> impl std::future::Future<Output = Result<Option<Question>>> + Send;

    fn companies(&self) -> impl std::future::Future<Output = Result<Vec<Company>>> + Send;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sink took the record. `id` is set when it assigned its own.
    Accepted { id: Option<String> },
    Rejected(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    fn submit(
        &self,
        question: &Question,
    ) -> impl std::future::Future<Output = Result<SubmitOutcome>> + Send;
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct ListFilter {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub question_type: Option<QuestionType>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.difficulty.is_none() && self.question_type.is_none()
    }

    pub fn accepts(&self, question: &Question) -> bool {
        self.difficulty.is_none_or(|d| question.difficulty == d)
            && self
                .question_type
                .is_none_or(|t| question.question_type == Some(t))
            && question.matches(&self.query)
    }
}

pub enum ContributeOutcome {
    /// Handed to the sink. The id is the sink's if it assigned one, otherwise
    /// the provisional one stamped on submission.
    Submitted { id: String, title: String },
    MissingFields(Vec<Field>),
    Rejected(String),
}

const SUBMIT_UNREACHABLE: &str =
    "Your question could not be submitted right now. Please try again later.";

// ---------------------------------------------------------------------------
// QuestionService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct QuestionService<S: QuestionSource = Backend, K: SubmissionSink = Backend> {
    source: S,
    sink: K,
}

impl<S: QuestionSource, K: SubmissionSink> QuestionService<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Questions> {
        let questions = self.source.list().await?;
        if filter.is_empty() {
            return Ok(questions);
        }
        Ok(questions.into_iter().filter(|q| filter.accepts(q)).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Question>> {
        self.source.get(id).await
    }

    /// Companies whose name contains `query`, ignoring case.
    pub async fn companies(&self, query: &str) -> Result<Vec<Company>> {
        let query = query.trim().to_lowercase();
        let companies = self.source.companies().await?;
        Ok(companies
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect())
    }

    pub async fn contribute(&self, form: &ContributionForm) -> ContributeOutcome {
        let question = match form.submit() {
            Ok(question) => question,
            Err(missing) => return ContributeOutcome::MissingFields(missing.0),
        };

        match self.sink.submit(&question).await {
            Ok(SubmitOutcome::Accepted { id }) => ContributeOutcome::Submitted {
                id: id.unwrap_or_else(|| question.id().to_string()),
                title: question.title,
            },
            Ok(SubmitOutcome::Rejected(message)) => ContributeOutcome::Rejected(message),
            Err(e) => {
                tracing::error!("question submission failed: {e}");
                ContributeOutcome::Rejected(SUBMIT_UNREACHABLE.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Questions {
        let mut two_sum = Question::new("1", "Two Sum", Difficulty::Easy);
        two_sum.question_type = Some(QuestionType::Coding);
        two_sum.company = Some("Google".to_string());

        let mut shortener = Question::new("2", "URL Shortener", Difficulty::Medium);
        shortener.question_type = Some(QuestionType::SystemDesign);

        let mut conflict = Question::new("3", "Disagreeing with a teammate", Difficulty::Medium);
        conflict.question_type = Some(QuestionType::Behavioral);

        vec![two_sum, shortener, conflict]
    }

    fn source() -> MockQuestionSource {
        let mut mock = MockQuestionSource::new();
        mock.expect_list()
            .returning(|| Box::pin(async { Ok(sample()) }));
        mock
    }

    fn filled_form() -> ContributionForm {
        let mut form = ContributionForm::new();
        form.set(Field::Title, "Reverse a linked list");
        form.set(Field::Description, "Iteratively.");
        form.set(Field::Solution, "three pointers");
        form
    }

    #[tokio::test]
    async fn list_without_filter_returns_source_order() {
        let svc = QuestionService::new(source(), MockSubmissionSink::new());
        let ids: Vec<String> = svc
            .list(&ListFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|q| q.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn list_applies_difficulty_type_and_query() {
        let svc = QuestionService::new(source(), MockSubmissionSink::new());

        let medium = ListFilter {
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        };
        assert_eq!(svc.list(&medium).await.unwrap().len(), 2);

        let design = ListFilter {
            difficulty: Some(Difficulty::Medium),
            question_type: Some(QuestionType::SystemDesign),
            ..Default::default()
        };
        let found = svc.list(&design).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "URL Shortener");

        let search = ListFilter {
            query: "GOOGLE".to_string(),
            ..Default::default()
        };
        assert_eq!(svc.list(&search).await.unwrap()[0].id(), "1");
    }

    #[tokio::test]
    async fn companies_filters_by_name() {
        let mut mock = MockQuestionSource::new();
        mock.expect_companies().returning(|| {
            Box::pin(async {
                Ok(vec![
                    Company {
                        id: "1".to_string(),
                        name: "Google".to_string(),
                        logo: "G".to_string(),
                        question_count: 150,
                        categories: vec!["DSA".to_string()],
                    },
                    Company {
                        id: "2".to_string(),
                        name: "Amazon".to_string(),
                        logo: "A".to_string(),
                        question_count: 200,
                        categories: vec![],
                    },
                ])
            })
        });

        let svc = QuestionService::new(mock, MockSubmissionSink::new());
        let found = svc.companies("goo").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Google");
    }

    #[tokio::test]
    async fn contribute_prefers_sink_assigned_id() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit()
            .withf(|q: &Question| q.title == "Reverse a linked list")
            .returning(|_| {
                Box::pin(async {
                    Ok(SubmitOutcome::Accepted {
                        id: Some("srv-42".to_string()),
                    })
                })
            });

        let svc = QuestionService::new(MockQuestionSource::new(), sink);
        let outcome = svc.contribute(&filled_form()).await;

        assert!(matches!(outcome, ContributeOutcome::Submitted { ref id, .. } if id == "srv-42"));
    }

    #[tokio::test]
    async fn contribute_falls_back_to_provisional_id() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit()
            .returning(|_| Box::pin(async { Ok(SubmitOutcome::Accepted { id: None }) }));

        let svc = QuestionService::new(MockQuestionSource::new(), sink);
        let outcome = svc.contribute(&filled_form()).await;

        match outcome {
            ContributeOutcome::Submitted { id, title } => {
                assert!(id.parse::<ulid::Ulid>().is_ok());
                assert_eq!(title, "Reverse a linked list");
            }
            _ => panic!("expected submission"),
        }
    }

    #[tokio::test]
    async fn contribute_missing_fields_never_reach_the_sink() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().times(0);

        let svc = QuestionService::new(MockQuestionSource::new(), sink);
        let mut form = filled_form();
        form.set(Field::Title, "");

        let outcome = svc.contribute(&form).await;
        assert!(matches!(outcome, ContributeOutcome::MissingFields(ref f) if f == &[Field::Title]));
    }

    #[tokio::test]
    async fn contribute_surfaces_sink_messages() {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().returning(|_| {
            Box::pin(async { Ok(SubmitOutcome::Rejected("Duplicate question".to_string())) })
        });
        let svc = QuestionService::new(MockQuestionSource::new(), sink);
        assert!(matches!(
            svc.contribute(&filled_form()).await,
            ContributeOutcome::Rejected(ref m) if m == "Duplicate question"
        ));

        let mut sink = MockSubmissionSink::new();
        sink.expect_submit()
            .returning(|_| Box::pin(async { Err(color_eyre::eyre::eyre!("503")) }));
        let svc = QuestionService::new(MockQuestionSource::new(), sink);
        assert!(matches!(
            svc.contribute(&filled_form()).await,
            ContributeOutcome::Rejected(ref m) if m == SUBMIT_UNREACHABLE
        ));
    }
}
