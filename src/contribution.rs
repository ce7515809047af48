//! State of the "contribute a question" form.
//!
//! The form is a flat record of text fields plus a typed difficulty and an
//! optional question type. The type only decides what is shown; switching it
//! never touches the other values, so a user can flip between modes without
//! losing what they typed.

use std::{collections::BTreeMap, fmt, time::SystemTime};

use ulid::Ulid;

use crate::models::{split_tags, Difficulty, Question, QuestionType};

pub const DIFFICULTY_FIELD: &str = "difficulty";
pub const TYPE_FIELD: &str = "type";

pub const LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "cpp",
    "go",
    "rust",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Tags,
    Solution,
    Explanation,
    ProgrammingLanguage,
    Company,
    Position,
    Time,
    EstimatedTime,
    TimeComplexity,
    SpaceComplexity,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Title,
        Field::Description,
        Field::Tags,
        Field::Solution,
        Field::Explanation,
        Field::ProgrammingLanguage,
        Field::Company,
        Field::Position,
        Field::Time,
        Field::EstimatedTime,
        Field::TimeComplexity,
        Field::SpaceComplexity,
    ];

    /// Required for every question type.
    pub const REQUIRED: [Field; 3] = [Field::Title, Field::Description, Field::Solution];

    /// The form input name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Solution => "solution",
            Field::Explanation => "explanation",
            Field::ProgrammingLanguage => "programming_language",
            Field::Company => "company",
            Field::Position => "position",
            Field::Time => "time",
            Field::EstimatedTime => "estimated_time",
            Field::TimeComplexity => "time_complexity",
            Field::SpaceComplexity => "space_complexity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the form shows for a given question type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormMode {
    pub question_type: Option<QuestionType>,
    /// Label of the language selector, `None` when it is hidden.
    pub language_label: Option<&'static str>,
    pub shows_complexity: bool,
    pub solution_label: &'static str,
    pub solution_placeholder: &'static str,
}

const GENERIC_PLACEHOLDER: &str = "Describe your approach...";

impl FormMode {
    pub fn for_type(question_type: Option<QuestionType>) -> Self {
        let (language_label, shows_complexity, solution_label, solution_placeholder) =
            match question_type {
                Some(QuestionType::Coding) => (
                    Some("Programming Language"),
                    true,
                    "Solution",
                    "Write your solution here...",
                ),
                Some(QuestionType::Conceptual) => (
                    Some("Code Language"),
                    false,
                    "Solution",
                    "Explain the concept. Wrap inline code in <code>...</code> tags.",
                ),
                Some(QuestionType::SystemDesign) | None => {
                    (None, false, "Solution", GENERIC_PLACEHOLDER)
                }
                Some(QuestionType::Behavioral) => (
                    None,
                    false,
                    "Answer",
                    "Share your answer using the STAR format (Situation, Task, Action, Result)...",
                ),
            };

        Self {
            question_type,
            language_label,
            shows_complexity,
            solution_label,
            solution_placeholder,
        }
    }

    pub fn shows_language(&self) -> bool {
        self.language_label.is_some()
    }

    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::ProgrammingLanguage => self.shows_language(),
            Field::TimeComplexity | Field::SpaceComplexity => self.shows_complexity,
            _ => true,
        }
    }
}

/// Required fields left blank at submission.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<Field>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.name()).collect();
        write!(f, "missing required fields: {}", names.join(", "))
    }
}

impl std::error::Error for MissingFields {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContributionForm {
    values: BTreeMap<Field, String>,
    difficulty: Difficulty,
    question_type: Option<QuestionType>,
}

impl ContributionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the form from posted name/value pairs. Unknown names are
    /// ignored, an unknown type means "unset" and an unknown difficulty keeps
    /// the default.
    pub fn from_fields<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            match name {
                DIFFICULTY_FIELD => {
                    if let Some(difficulty) = Difficulty::parse(value) {
                        form.difficulty = difficulty;
                    }
                }
                TYPE_FIELD => form.question_type = QuestionType::parse(value),
                _ => {
                    if let Some(field) = Field::from_name(name) {
                        form.set(field, value);
                    }
                }
            }
        }
        form
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn question_type(&self) -> Option<QuestionType> {
        self.question_type
    }

    /// Changes the active type and nothing else.
    pub fn select_type(&mut self, question_type: Option<QuestionType>) {
        self.question_type = question_type;
    }

    pub fn mode(&self) -> FormMode {
        FormMode::for_type(self.question_type)
    }

    pub fn required_fields(&self) -> &'static [Field] {
        &Field::REQUIRED
    }

    pub fn missing_required(&self) -> Vec<Field> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// The tags input as typed; it is only split on submission.
    pub fn live_tags(&self) -> &str {
        self.get(Field::Tags)
    }

    /// Build the question record to hand to the submission sink.
    ///
    /// The id is provisional: a ULID carrying `at` as its timestamp. Fields the
    /// current mode hides are left out of the record even if they hold text
    /// from an earlier mode.
    pub fn submit_at(&self, at: SystemTime) -> Result<Question, MissingFields> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        let mode = self.mode();
        let id = Ulid::from_datetime(at).to_string();

        let mut question = Question::new(id, self.get(Field::Title).trim(), self.difficulty);
        question.description = self.get(Field::Description).trim().to_string();
        question.question_type = self.question_type;
        question.tags = split_tags(self.get(Field::Tags));
        question.solution = self.get(Field::Solution).trim().to_string();
        question.explanation = self.optional(Field::Explanation);
        question.company = self.optional(Field::Company);
        question.position = self.optional(Field::Position);
        question.time = self.optional(Field::Time);
        question.estimated_time = self.optional(Field::EstimatedTime);

        if mode.shows_language() {
            question.programming_language = self.optional(Field::ProgrammingLanguage);
        }
        if mode.shows_complexity {
            question.time_complexity = self.optional(Field::TimeComplexity);
            question.space_complexity = self.optional(Field::SpaceComplexity);
        }

        Ok(question)
    }

    pub fn submit(&self) -> Result<Question, MissingFields> {
        self.submit_at(SystemTime::now())
    }

    fn optional(&self, field: Field) -> Option<String> {
        let value = self.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}
