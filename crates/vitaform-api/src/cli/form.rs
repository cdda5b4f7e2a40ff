//! Form pipeline CLI commands: validate, render, submit, draft.

use std::path::Path;

use anyhow::Result;
use chrono::DateTime;
use comfy_table::{presets, ContentArrangement, Table};

use vitaform_core::service::SubmissionOutcome;
use vitaform_core::validate::ErrorMap;
use vitaform_types::language::Language;
use vitaform_types::schema::QuestionnaireType;

use crate::cli::load_submission;
use crate::state::AppState;

fn print_errors(errors: &ErrorMap, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(errors)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Field", "Problem"]);
    for (field, message) in errors {
        table.add_row([field.as_str(), message.as_str()]);
    }
    println!("{table}");
    Ok(())
}

/// Check a submission file without sending anything.
pub async fn validate(
    state: &AppState,
    submission: &Path,
    qtype: QuestionnaireType,
    lang: Language,
    json: bool,
) -> Result<i32> {
    let input = load_submission(submission)?;
    let errors = state.service.validate(
        &input.form_data,
        &input.additional_data,
        &input.contact_data,
        lang,
    );

    if errors.is_empty() {
        if json {
            println!("{{}}");
        } else {
            println!("✓ {qtype}/{lang} submission is valid");
        }
        return Ok(0);
    }

    print_errors(&errors, json)?;
    Ok(1)
}

/// Print the report that a submission would deliver.
pub async fn render(
    state: &AppState,
    submission: &Path,
    qtype: QuestionnaireType,
    lang: Language,
) -> Result<i32> {
    let input = load_submission(submission)?;
    let report = state.service.render(
        qtype,
        &input.form_data,
        &input.additional_data,
        &input.contact_data,
        lang,
    );
    println!("{report}");
    Ok(0)
}

/// Run the full pipeline: validate, render, deliver, clear the draft.
pub async fn submit(
    state: &AppState,
    submission: &Path,
    qtype: QuestionnaireType,
    lang: Language,
    json: bool,
) -> Result<i32> {
    let input = load_submission(submission)?;
    let outcome = state
        .service
        .submit(
            qtype,
            lang,
            &input.form_data,
            &input.additional_data,
            &input.contact_data,
        )
        .await;

    match outcome {
        SubmissionOutcome::Submitted => {
            println!("✓ report delivered");
            Ok(0)
        }
        SubmissionOutcome::Invalid(errors) => {
            print_errors(&errors, json)?;
            Ok(1)
        }
        SubmissionOutcome::DeliveryFailed(err) => {
            eprintln!("✗ delivery failed: {err}");
            Ok(1)
        }
    }
}

/// Persist a submission file as the current draft.
pub async fn draft_save(
    state: &AppState,
    submission: &Path,
    qtype: QuestionnaireType,
    lang: Language,
) -> Result<i32> {
    let input = load_submission(submission)?;
    state
        .service
        .save_draft(
            qtype,
            lang,
            &input.form_data,
            &input.additional_data,
            &input.contact_data,
        )
        .await;
    println!("✓ draft saved for {qtype}/{lang}");
    Ok(0)
}

/// Print the stored draft, if it is still fresh.
pub async fn draft_show(
    state: &AppState,
    qtype: QuestionnaireType,
    lang: Language,
    json: bool,
) -> Result<i32> {
    match state.service.restore_draft(qtype, lang).await {
        Some(draft) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&draft)?);
                return Ok(0);
            }
            let saved_at = DateTime::from_timestamp_millis(draft.timestamp)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| draft.timestamp.to_string());
            println!("draft for {qtype}/{lang}, saved at {saved_at}");
            println!(
                "{} answer(s), contact @{}",
                draft.form_data.len(),
                draft.contact_data.normalized_username()
            );
            Ok(0)
        }
        None => {
            println!("no fresh draft for {qtype}/{lang}");
            Ok(0)
        }
    }
}

/// Delete the stored draft.
pub async fn draft_clear(
    state: &AppState,
    qtype: QuestionnaireType,
    lang: Language,
) -> Result<i32> {
    state.service.reset(qtype, lang).await;
    println!("✓ draft cleared for {qtype}/{lang}");
    Ok(0)
}
