//! Language tags for questionnaire localization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of a questionnaire session.
///
/// A closed set: the schema provider ships section titles and question
/// labels per language, and the storage key embeds the tag, so adding a
/// language is a schema change, not a code change elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    /// The tag used in storage keys and catalog lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("invalid language tag: '{other}'")),
        }
    }
}
