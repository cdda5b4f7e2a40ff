//! Answer storage types.
//!
//! An [`AnswerSet`] maps question ids to the values the user entered. Keys
//! are present only for questions the user touched. Multi-choice answers
//! keep their original selection order -- reports print options in the
//! order the user picked them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The suffix appended to a question id to form its elaboration key.
const ADDITIONAL_SUFFIX: &str = "_additional";

/// Derive the additional-text key for a question.
///
/// Pure and deterministic: `"allergies"` -> `"allergies_additional"`.
pub fn additional_key(question_id: &str) -> String {
    format!("{question_id}{ADDITIONAL_SUFFIX}")
}

/// A single answer value.
///
/// Serialized untagged so stored JSON is a plain string for text-like
/// answers and a string array for multi-choice selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    /// Whether this value counts as empty.
    ///
    /// Text is empty when blank or whitespace-only; a selection is empty
    /// when no option was picked.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Selection(values) => values.is_empty(),
        }
    }

    /// The text content, if this is a text-like answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Selection(_) => None,
        }
    }

    /// The selected values, if this is a multi-choice answer.
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Text(_) => None,
            AnswerValue::Selection(values) => Some(values),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Selection(values)
    }
}

/// Map of question id -> answer.
///
/// Backed by a BTreeMap so iteration order is stable, which keeps
/// validation output and serialized drafts deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a question, replacing any previous value.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.entries.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    /// Whether the question has a non-empty answer.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Free-text elaborations keyed by [`additional_key`] output.
pub type AdditionalText = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additional_key_derivation() {
        assert_eq!(additional_key("allergies"), "allergies_additional");
    }

    #[test]
    fn test_whitespace_text_is_empty() {
        assert!(AnswerValue::Text("   ".to_string()).is_empty());
        assert!(!AnswerValue::Text(" ok ".to_string()).is_empty());
    }

    #[test]
    fn test_empty_selection_is_empty() {
        assert!(AnswerValue::Selection(vec![]).is_empty());
        assert!(!AnswerValue::Selection(vec!["a".to_string()]).is_empty());
    }

    #[test]
    fn test_answer_value_untagged_serde() {
        let text: AnswerValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text, AnswerValue::Text("hello".to_string()));

        let selection: AnswerValue = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(
            selection,
            AnswerValue::Selection(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_selection_preserves_user_order() {
        let value = AnswerValue::Selection(vec!["z".to_string(), "a".to_string()]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"["z","a"]"#);
    }

    #[test]
    fn test_is_answered() {
        let mut answers = AnswerSet::new();
        answers.insert("name", "Ada");
        answers.insert("blank", "  ");
        answers.insert("none_selected", Vec::<String>::new());

        assert!(answers.is_answered("name"));
        assert!(!answers.is_answered("blank"));
        assert!(!answers.is_answered("none_selected"));
        assert!(!answers.is_answered("untouched"));
    }

    #[test]
    fn test_answer_set_transparent_serde() {
        let mut answers = AnswerSet::new();
        answers.insert("name", "Ada");
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"name":"Ada"}"#);
    }
}
