//! CLI argument definitions and input-file loading.

pub mod form;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use vitaform_core::validate::TriggerRule;
use vitaform_types::answer::{AdditionalText, AnswerSet};
use vitaform_types::contact::Contact;
use vitaform_types::language::Language;
use vitaform_types::schema::{QuestionnaireSchema, QuestionnaireType, Section};

#[derive(Debug, Parser)]
#[command(name = "vform", about = "Questionnaire form pipeline", version)]
pub struct Cli {
    /// Path to the schema JSON file
    #[arg(long, global = true, default_value = "schema.json")]
    pub schema: PathBuf,

    /// Questionnaire type (infant, child, woman, man)
    #[arg(long = "type", global = true, default_value = "woman")]
    pub qtype: QuestionnaireType,

    /// Questionnaire language (en, ru)
    #[arg(long, global = true, default_value = "en")]
    pub lang: Language,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a submission file against the schema rules
    Validate {
        /// Path to the submission JSON file
        submission: PathBuf,
    },
    /// Print the report that would be submitted
    Render {
        submission: PathBuf,
    },
    /// Validate, render, and deliver the report
    Submit {
        submission: PathBuf,
    },
    /// Inspect or manage the stored draft for the (type, lang) pair
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftAction {
    /// Persist a submission file as the current draft
    Save { submission: PathBuf },
    /// Print the stored draft, if fresh
    Show,
    /// Delete the stored draft
    Clear,
}

/// On-disk schema file: sections plus the declarative trigger rules that
/// ship alongside them.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    sections: Vec<Section>,
    #[serde(default, rename = "triggerRules")]
    trigger_rules: Vec<TriggerRule>,
}

/// Load the schema file, splitting it into the schema proper and its
/// trigger rules.
pub fn load_schema(path: &Path) -> anyhow::Result<(QuestionnaireSchema, Vec<TriggerRule>)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let file: SchemaFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;
    Ok((
        QuestionnaireSchema {
            sections: file.sections,
        },
        file.trigger_rules,
    ))
}

/// On-disk submission file: the same shape as a stored draft, minus the
/// timestamp the pipeline stamps itself.
#[derive(Debug, Deserialize)]
pub struct SubmissionFile {
    #[serde(rename = "formData")]
    pub form_data: AnswerSet,
    #[serde(default, rename = "additionalData")]
    pub additional_data: AdditionalText,
    #[serde(rename = "contactData")]
    pub contact_data: Contact,
}

/// Load a submission file.
pub fn load_submission(path: &Path) -> anyhow::Result<SubmissionFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse submission file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_schema_with_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "sections": [
                    {{"id": "health", "title": "Health", "questions": [
                        {{"id": "chronic", "kind": "single-choice", "label": "Chronic?", "required": true,
                         "options": [{{"value": "yes", "label": "Yes"}}, {{"value": "no", "label": "No"}}]}}
                    ]}}
                ],
                "triggerRules": [
                    {{"questionId": "chronic", "predicate": {{"equals": "yes"}}, "additionalKey": "chronic_additional"}}
                ]
            }}"#
        )
        .unwrap();

        let (schema, rules) = load_schema(file.path()).unwrap();
        assert_eq!(schema.sections.len(), 1);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].question_id, "chronic");
    }

    #[test]
    fn test_load_submission() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "formData": {{"chronic": "yes", "complaints": ["headache"]}},
                "additionalData": {{"chronic_additional": "asthma"}},
                "contactData": {{"method": "telegram", "username": "@ada"}}
            }}"#
        )
        .unwrap();

        let submission = load_submission(file.path()).unwrap();
        assert!(submission.form_data.is_answered("chronic"));
        assert_eq!(
            submission.additional_data.get("chronic_additional").unwrap(),
            "asthma"
        );
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from([
            "vform", "--type", "man", "--lang", "ru", "draft", "show",
        ]);
        assert_eq!(cli.qtype, QuestionnaireType::Man);
        assert_eq!(cli.lang, Language::Ru);
        assert!(matches!(
            cli.command,
            Commands::Draft {
                action: DraftAction::Show
            }
        ));
    }
}
