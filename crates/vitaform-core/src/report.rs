//! Report rendering.
//!
//! Serializes a completed answer set plus schema labels into the
//! human-readable text report that gets submitted. The renderer is a
//! total, deterministic function: identical inputs produce byte-identical
//! output, malformed option values fall back to the raw stored value, and
//! nothing here performs I/O.

use vitaform_types::answer::{additional_key, AdditionalText, AnswerSet, AnswerValue};
use vitaform_types::contact::Contact;
use vitaform_types::language::Language;
use vitaform_types::schema::{Question, QuestionnaireSchema, QuestionnaireType};

/// Questions in sections after this one get sequential numbers; the
/// section itself and everything before it render unnumbered.
const NUMBERING_PIVOT_SECTION: &str = "health";

const BANNER: &str = "========================================";

fn title(qtype: QuestionnaireType, lang: Language) -> &'static str {
    match (lang, qtype) {
        (Language::En, QuestionnaireType::Infant) => "Health questionnaire: infant",
        (Language::En, QuestionnaireType::Child) => "Health questionnaire: child",
        (Language::En, QuestionnaireType::Woman) => "Health questionnaire: woman",
        (Language::En, QuestionnaireType::Man) => "Health questionnaire: man",
        (Language::Ru, QuestionnaireType::Infant) => "Анкета здоровья: младенец",
        (Language::Ru, QuestionnaireType::Child) => "Анкета здоровья: ребёнок",
        (Language::Ru, QuestionnaireType::Woman) => "Анкета здоровья: женщина",
        (Language::Ru, QuestionnaireType::Man) => "Анкета здоровья: мужчина",
    }
}

fn contact_heading(lang: Language) -> &'static str {
    match lang {
        Language::En => "Contact",
        Language::Ru => "Контакт",
    }
}

/// Format an answer for the report.
///
/// Choice values print their localized option labels; a value with no
/// matching option degrades to the raw stored string. Multi-choice keeps
/// the user's selection order, joined with ", ".
fn format_answer(question: &Question, value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(raw) => question
            .option_label(raw.trim())
            .map(str::to_string)
            .unwrap_or_else(|| raw.clone()),
        AnswerValue::Selection(values) => values
            .iter()
            .map(|v| question.option_label(v).unwrap_or(v.as_str()).to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render the full report for submission.
pub fn render_report(
    qtype: QuestionnaireType,
    schema: &QuestionnaireSchema,
    answers: &AnswerSet,
    additional: &AdditionalText,
    contact: &Contact,
    lang: Language,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(BANNER.to_string());
    lines.push(title(qtype, lang).to_string());
    lines.push(BANNER.to_string());

    // Numbering state is an explicit fold over the sections: `numbering`
    // flips once the pivot section has been passed, `next_number` counts
    // only questions that actually render.
    let mut numbering = false;
    let mut next_number: u32 = 1;

    for section in &schema.sections {
        lines.push(String::new());
        lines.push(format!("--- {} ---", section.title));

        for question in &section.questions {
            let Some(value) = answers.get(&question.id) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            if numbering {
                lines.push(format!("*{}. {}*", next_number, question.label));
                next_number += 1;
            } else {
                lines.push(format!("*{}*", question.label));
            }
            lines.push(format_answer(question, value));

            if let Some(text) = additional.get(&additional_key(&question.id)) {
                if !text.trim().is_empty() {
                    lines.push(format!("_{}_", text.trim()));
                }
            }
        }

        if section.id == NUMBERING_PIVOT_SECTION {
            numbering = true;
        }
    }

    lines.push(String::new());
    lines.push(format!("--- {} ---", contact_heading(lang)));
    lines.push(format!("@{}", contact.normalized_username()));
    lines.push(contact.profile_url());

    lines.push(String::new());
    lines.push(BANNER.to_string());

    lines.join("\n")
}
