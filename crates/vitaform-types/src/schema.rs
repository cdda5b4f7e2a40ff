//! Questionnaire schema types.
//!
//! The schema is ordered, immutable input owned by the caller: sections in
//! presentation order, each carrying questions in presentation order. All
//! human-readable strings (titles, labels, option labels) arrive already
//! localized for the active [`Language`](crate::language::Language).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which questionnaire variant a session targets.
///
/// Drives the storage key and the report title banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionnaireType {
    Infant,
    Child,
    Woman,
    Man,
}

impl QuestionnaireType {
    /// The tag used in storage keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionnaireType::Infant => "infant",
            QuestionnaireType::Child => "child",
            QuestionnaireType::Woman => "woman",
            QuestionnaireType::Man => "man",
        }
    }
}

impl fmt::Display for QuestionnaireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "infant" => Ok(QuestionnaireType::Infant),
            "child" => Ok(QuestionnaireType::Child),
            "woman" => Ok(QuestionnaireType::Woman),
            "man" => Ok(QuestionnaireType::Man),
            other => Err(format!("invalid questionnaire type: '{other}'")),
        }
    }
}

/// The shape of a question's expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    ShortText,
    SingleChoice,
    MultiChoice,
    Numeric,
}

/// One selectable option of a choice question.
///
/// `value` is the stable machine value stored in answers; `label` is the
/// localized text shown to the user and printed in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// A single question within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique across the whole schema.
    pub id: String,
    pub kind: QuestionKind,
    /// Localized question text.
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// Options for choice kinds; empty for text and numeric questions.
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

impl Question {
    /// Look up the localized label for an option value.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.as_str())
    }
}

/// An ordered group of questions with a localized title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier (e.g. "intro", "health", "lifestyle").
    pub id: String,
    /// Localized section title.
    pub title: String,
    pub questions: Vec<Question>,
}

/// The full schema: sections in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSchema {
    pub sections: Vec<Section>,
}

impl QuestionnaireSchema {
    /// Iterate all questions across all sections in schema order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Find a question by id anywhere in the schema.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id == id)
    }
}
