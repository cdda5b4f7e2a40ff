//! Answer validation.
//!
//! Applies required-field rules and declarative trigger rules against a
//! schema, producing a field -> message error map. Pure and
//! deterministic: no side effects, no I/O, and identical inputs always
//! yield element-wise identical maps. All violations are collected in
//! one pass -- nothing short-circuits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vitaform_types::answer::{additional_key, AdditionalText, AnswerSet, AnswerValue};
use vitaform_types::contact::{Contact, CONTACT_USERNAME_FIELD};
use vitaform_types::language::Language;
use vitaform_types::message::MessageCatalog;
use vitaform_types::schema::{QuestionKind, QuestionnaireSchema};

/// Field key -> localized message. Empty map ⇔ the form is valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Condition over the answer set that arms a trigger rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerPredicate {
    /// The question's text answer equals the given value (boolean-like
    /// "yes" questions).
    Equals(String),
    /// The question's multi-choice selection contains any value other
    /// than the given sentinel (a "no issues" option).
    AnySelectionBesides(String),
}

impl TriggerPredicate {
    /// Evaluate the predicate against a question's current answer.
    ///
    /// An absent answer never arms a rule.
    pub fn holds(&self, answer: Option<&AnswerValue>) -> bool {
        match (self, answer) {
            (TriggerPredicate::Equals(expected), Some(AnswerValue::Text(actual))) => {
                actual.trim() == expected
            }
            (TriggerPredicate::AnySelectionBesides(sentinel), Some(AnswerValue::Selection(values))) => {
                values.iter().any(|v| v != sentinel)
            }
            _ => false,
        }
    }
}

/// A declarative conditional-completeness rule.
///
/// When `predicate` holds for `question_id`'s answer, the entry under
/// `additional_key` must carry non-empty, non-whitespace text. Rules are
/// data supplied alongside the schema -- the validator itself knows no
/// question ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRule {
    pub question_id: String,
    pub predicate: TriggerPredicate,
    pub additional_key: String,
}

impl TriggerRule {
    /// Rule arming when a text answer equals `value`; the elaboration key
    /// is derived from the question id.
    pub fn when_equals(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        let question_id = question_id.into();
        let additional_key = additional_key(&question_id);
        Self {
            question_id,
            predicate: TriggerPredicate::Equals(value.into()),
            additional_key,
        }
    }

    /// Rule arming when a selection contains anything besides `sentinel`;
    /// the elaboration key is derived from the question id.
    pub fn when_any_selected_besides(
        question_id: impl Into<String>,
        sentinel: impl Into<String>,
    ) -> Self {
        let question_id = question_id.into();
        let additional_key = additional_key(&question_id);
        Self {
            question_id,
            predicate: TriggerPredicate::AnySelectionBesides(sentinel.into()),
            additional_key,
        }
    }
}

/// Whether a value satisfies a required question of the given kind.
fn satisfies_required(kind: QuestionKind, answer: Option<&AnswerValue>) -> bool {
    match (kind, answer) {
        (QuestionKind::MultiChoice, Some(AnswerValue::Selection(values))) => !values.is_empty(),
        (QuestionKind::MultiChoice, _) => false,
        (QuestionKind::Numeric, Some(AnswerValue::Text(s))) => s.trim().parse::<f64>().is_ok(),
        (QuestionKind::Numeric, _) => false,
        (QuestionKind::ShortText | QuestionKind::SingleChoice, Some(AnswerValue::Text(s))) => {
            !s.trim().is_empty()
        }
        (QuestionKind::ShortText | QuestionKind::SingleChoice, _) => false,
    }
}

/// Validate a full submission against the schema and trigger rules.
///
/// Returns an [`ErrorMap`] keyed by question id, additional-text key, or
/// [`CONTACT_USERNAME_FIELD`]. Messages come from the catalog entry for
/// `lang`.
pub fn validate(
    schema: &QuestionnaireSchema,
    answers: &AnswerSet,
    additional: &AdditionalText,
    contact: &Contact,
    lang: Language,
    rules: &[TriggerRule],
    catalog: &MessageCatalog,
) -> ErrorMap {
    let messages = catalog.for_language(lang);
    let mut errors = ErrorMap::new();

    // Required questions, with type-specific emptiness semantics.
    for question in schema.questions() {
        if !question.required {
            continue;
        }
        if !satisfies_required(question.kind, answers.get(&question.id)) {
            let message = match question.kind {
                QuestionKind::MultiChoice => &messages.select_at_least_one,
                _ => &messages.required,
            };
            errors.insert(question.id.clone(), message.clone());
        }
    }

    // Conditional completeness: armed rules demand elaboration text.
    for rule in rules {
        if !rule.predicate.holds(answers.get(&rule.question_id)) {
            continue;
        }
        let has_text = additional
            .get(&rule.additional_key)
            .is_some_and(|text| !text.trim().is_empty());
        if !has_text {
            errors.insert(rule.additional_key.clone(), messages.required.clone());
        }
    }

    // Contact username, regardless of schema.
    if contact.username.trim().is_empty() {
        errors.insert(
            CONTACT_USERNAME_FIELD.to_string(),
            messages.required.clone(),
        );
    }

    errors
}
