//! In-progress questionnaire drafts.
//!
//! A draft is a timestamped snapshot of everything the user has entered
//! so far. Drafts are keyed by (questionnaire type, language) and go
//! stale after 24 hours -- an expired draft must never be restored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answer::{AdditionalText, AnswerSet};
use crate::contact::Contact;
use crate::language::Language;
use crate::schema::QuestionnaireType;

/// How long a saved draft stays restorable.
pub const DRAFT_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Derive the storage key for a (questionnaire type, language) pair.
///
/// Pure and deterministic: no other state participates, so two sessions
/// for the same pair always address the same slot (last write wins).
pub fn storage_key(qtype: QuestionnaireType, lang: Language) -> String {
    format!("health_questionnaire_{}_{}", qtype.as_str(), lang.as_str())
}

/// A persisted snapshot of in-progress answers plus contact info.
///
/// Field names match the stored JSON shape exactly; `timestamp` is a
/// millisecond epoch integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(rename = "formData")]
    pub form_data: AnswerSet,
    #[serde(rename = "additionalData")]
    pub additional_data: AdditionalText,
    #[serde(rename = "contactData")]
    pub contact_data: Contact,
    /// Creation time as a millisecond epoch integer.
    pub timestamp: i64,
}

impl Draft {
    /// Snapshot the given state at `now`.
    pub fn new(
        form_data: AnswerSet,
        additional_data: AdditionalText,
        contact_data: Contact,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            form_data,
            additional_data,
            contact_data,
            timestamp: now.timestamp_millis(),
        }
    }

    /// Whether this draft is older than the 24-hour freshness window.
    ///
    /// Pure predicate over a caller-supplied `now` so tests can inject
    /// clocks. A timestamp in the future counts as fresh.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() - self.timestamp >= DRAFT_TTL_MS
    }
}
