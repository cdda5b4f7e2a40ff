//! Localized validation messages.
//!
//! The validator is language-agnostic: it looks messages up in a catalog
//! keyed by [`Language`]. The catalog is already-loaded input owned by
//! the caller; a built-in default covers `en` and `ru`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::Language;

/// The fixed message table for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessages {
    /// Shown for an empty required text/choice/numeric answer.
    pub required: String,
    /// Shown for an empty required multi-choice selection.
    pub select_at_least_one: String,
}

/// Validation messages per language, with `en` fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    entries: BTreeMap<Language, ValidationMessages>,
}

impl MessageCatalog {
    pub fn new(entries: BTreeMap<Language, ValidationMessages>) -> Self {
        Self { entries }
    }

    /// Messages for the given language, falling back to English when the
    /// catalog has no entry for it.
    pub fn for_language(&self, lang: Language) -> &ValidationMessages {
        self.entries
            .get(&lang)
            .or_else(|| self.entries.get(&Language::En))
            .expect("catalog must carry at least the English entry")
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            Language::En,
            ValidationMessages {
                required: "This field is required".to_string(),
                select_at_least_one: "Please select at least one option".to_string(),
            },
        );
        entries.insert(
            Language::Ru,
            ValidationMessages {
                required: "Это поле обязательно".to_string(),
                select_at_least_one: "Выберите хотя бы один вариант".to_string(),
            },
        );
        Self { entries }
    }
}
