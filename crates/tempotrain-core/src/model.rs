//! Core data model types for tempotrain.
//!
//! These are the fundamental types the entire tempotrain system uses to
//! represent questions and question catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Pick one of the listed choices.
    #[serde(rename = "mcq")]
    MultipleChoice,
    /// Free-text answer, judged only on effort, never on correctness.
    #[serde(rename = "open")]
    OpenResponse,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "mcq"),
            QuestionKind::OpenResponse => write!(f, "open"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mcq" | "multiple-choice" => Ok(QuestionKind::MultipleChoice),
            "open" | "open-response" => Ok(QuestionKind::OpenResponse),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// A single question in a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Whether this is a multiple-choice or an open-response question.
    pub kind: QuestionKind,
    /// The question text shown to the candidate.
    pub prompt: String,
    /// Optional supplementary context (e.g. the ticket or agreement the
    /// question refers to).
    #[serde(default)]
    pub context: Option<String>,
    /// Ordered answer choices. Empty for open-response questions.
    #[serde(default)]
    pub choices: Vec<String>,
    /// Index into `choices` of the correct answer. Multiple-choice only.
    #[serde(default)]
    pub correct_choice: Option<usize>,
    /// Explanation shown after answering in the practice flow.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    /// Returns `true` if `index` is a valid choice for this question.
    pub fn is_choice_valid(&self, index: usize) -> bool {
        self.kind == QuestionKind::MultipleChoice && index < self.choices.len()
    }
}

/// A fixed, ordered list of questions for one assessment.
///
/// Catalogs are immutable once built: sessions hold a shared reference and
/// never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description of what this catalog covers.
    #[serde(default)]
    pub description: String,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Catalog {
    /// Number of questions in the catalog.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
