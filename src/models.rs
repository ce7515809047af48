use std::fmt;

use serde::{Deserialize, Serialize};

pub type Questions = Vec<Question>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive lookup used for form values and query strings.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    Coding,
    Conceptual,
    #[serde(rename = "System Design")]
    SystemDesign,
    Behavioral,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Coding,
        QuestionType::Conceptual,
        QuestionType::SystemDesign,
        QuestionType::Behavioral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Coding => "Coding",
            QuestionType::Conceptual => "Conceptual",
            QuestionType::SystemDesign => "System Design",
            QuestionType::Behavioral => "Behavioral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: String,
}

/// A single interview question as listed, shown and submitted.
///
/// `id` is private so a record keeps the id it was built with; a contributed
/// question gets a provisional one at submission time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub programming_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_topics: Vec<String>,
}

impl Question {
    /// A question with only the required parts filled in.
    pub fn new(id: impl Into<String>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            difficulty,
            question_type: None,
            tags: Vec::new(),
            solution: String::new(),
            explanation: None,
            programming_language: None,
            company: None,
            position: None,
            time: None,
            estimated_time: None,
            time_complexity: None,
            space_complexity: None,
            test_cases: Vec::new(),
            related_topics: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the solution is source code and should be shown as a code block.
    ///
    /// Only Coding questions qualify, or untyped ones that name a language.
    /// Other types may carry a language for their inline `<code>` snippets.
    pub fn is_programming(&self) -> bool {
        match self.question_type {
            Some(question_type) => question_type == QuestionType::Coding,
            None => self.programming_language.is_some(),
        }
    }

    /// Case-insensitive search over title, description, company and tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .company
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&query))
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub question_count: u32,
    pub categories: Vec<String>,
}

/// Split a comma-separated tags input into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tags_trims_and_drops_empty_entries() {
        assert_eq!(
            split_tags("array, hash table ,two pointers"),
            vec!["array", "hash table", "two pointers"]
        );
        assert_eq!(split_tags(" , ,dp,, "), vec!["dp"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn question_type_uses_display_names_on_the_wire() {
        let mut q = Question::new("1", "Design a cache", Difficulty::Hard);
        q.question_type = Some(QuestionType::SystemDesign);

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "System Design");
        assert_eq!(json["difficulty"], "Hard");
        assert!(json.get("timeComplexity").is_none());
    }

    #[test]
    fn question_deserializes_camel_case_payload() {
        let q: Question = serde_json::from_str(
            r#"{
                "id": "7",
                "title": "Two Sum",
                "difficulty": "Easy",
                "type": "Coding",
                "tags": ["Array"],
                "programmingLanguage": "typescript",
                "estimatedTime": "15-20 min"
            }"#,
        )
        .unwrap();

        assert_eq!(q.id(), "7");
        assert_eq!(q.question_type, Some(QuestionType::Coding));
        assert_eq!(q.programming_language.as_deref(), Some("typescript"));
        assert_eq!(q.estimated_time.as_deref(), Some("15-20 min"));
        assert!(q.description.is_empty());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("extreme"), None);
        assert_eq!(QuestionType::parse("system design"), Some(QuestionType::SystemDesign));
    }

    #[test]
    fn only_coding_solutions_are_programs() {
        let mut q = Question::new("1", "Processes vs Threads", Difficulty::Medium);
        q.programming_language = Some("c".to_string());
        assert!(q.is_programming());

        q.question_type = Some(QuestionType::Conceptual);
        assert!(!q.is_programming());

        q.question_type = Some(QuestionType::Coding);
        q.programming_language = None;
        assert!(q.is_programming());
    }

    #[test]
    fn matches_searches_tags_and_company() {
        let mut q = Question::new("1", "Two Sum", Difficulty::Easy);
        q.company = Some("Google".to_string());
        q.tags = vec!["Hash Table".to_string()];

        assert!(q.matches("google"));
        assert!(q.matches("hash"));
        assert!(q.matches("  "));
        assert!(!q.matches("graph"));
    }
}
