//! Form pipeline orchestration.
//!
//! `FormService` wires the pipeline together: drafts persist through a
//! [`DraftStore`], submissions run validate -> render -> submit, and the
//! draft is cleared once delivery succeeds. Persistence failures are
//! absorbed here (logged, degraded) so they never surface as user-facing
//! errors; only validation violations and delivery outcomes escape.

use chrono::Utc;
use tracing::{debug, warn};

use vitaform_types::answer::{AdditionalText, AnswerSet};
use vitaform_types::contact::Contact;
use vitaform_types::draft::Draft;
use vitaform_types::error::SubmitError;
use vitaform_types::language::Language;
use vitaform_types::message::MessageCatalog;
use vitaform_types::schema::{QuestionnaireSchema, QuestionnaireType};

use crate::report::render_report;
use crate::store::DraftStore;
use crate::submit::ReportSubmitter;
use crate::validate::{validate, ErrorMap, TriggerRule};

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The report was delivered; the draft has been cleared.
    Submitted,
    /// Validation found violations; nothing was rendered or sent.
    Invalid(ErrorMap),
    /// The report rendered but delivery failed; the draft is kept so the
    /// caller can offer a retry.
    DeliveryFailed(SubmitError),
}

/// Orchestrates draft persistence, validation, rendering, and delivery
/// for one loaded schema.
pub struct FormService<S, T> {
    schema: QuestionnaireSchema,
    rules: Vec<TriggerRule>,
    catalog: MessageCatalog,
    store: S,
    submitter: T,
}

impl<S: DraftStore, T: ReportSubmitter> FormService<S, T> {
    pub fn new(
        schema: QuestionnaireSchema,
        rules: Vec<TriggerRule>,
        catalog: MessageCatalog,
        store: S,
        submitter: T,
    ) -> Self {
        Self {
            schema,
            rules,
            catalog,
            store,
            submitter,
        }
    }

    pub fn schema(&self) -> &QuestionnaireSchema {
        &self.schema
    }

    /// Persist the current form state, stamped with the current time.
    ///
    /// Best-effort: a failed save is logged and swallowed -- losing a
    /// draft must never interrupt the user filling the form.
    pub async fn save_draft(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
        answers: &AnswerSet,
        additional: &AdditionalText,
        contact: &Contact,
    ) {
        let draft = Draft::new(
            answers.clone(),
            additional.clone(),
            contact.clone(),
            Utc::now(),
        );
        if let Err(err) = self.store.save(qtype, lang, &draft).await {
            warn!(%qtype, %lang, %err, "draft save failed, continuing without persistence");
        }
    }

    /// Restore a fresh draft, if one exists.
    ///
    /// Store errors degrade to `None`: a broken store reads as "no draft".
    pub async fn restore_draft(&self, qtype: QuestionnaireType, lang: Language) -> Option<Draft> {
        match self.store.load(qtype, lang).await {
            Ok(draft) => draft,
            Err(err) => {
                warn!(%qtype, %lang, %err, "draft load failed, treating as no draft");
                None
            }
        }
    }

    /// Drop any stored draft for the pair.
    pub async fn reset(&self, qtype: QuestionnaireType, lang: Language) {
        if let Err(err) = self.store.clear(qtype, lang).await {
            warn!(%qtype, %lang, %err, "draft clear failed");
        }
    }

    /// Validate the current form state without submitting.
    pub fn validate(
        &self,
        answers: &AnswerSet,
        additional: &AdditionalText,
        contact: &Contact,
        lang: Language,
    ) -> ErrorMap {
        validate(
            &self.schema,
            answers,
            additional,
            contact,
            lang,
            &self.rules,
            &self.catalog,
        )
    }

    /// Render the report without submitting.
    pub fn render(
        &self,
        qtype: QuestionnaireType,
        answers: &AnswerSet,
        additional: &AdditionalText,
        contact: &Contact,
        lang: Language,
    ) -> String {
        render_report(qtype, &self.schema, answers, additional, contact, lang)
    }

    /// Run the full pipeline: validate, render, deliver, clear the draft.
    pub async fn submit(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
        answers: &AnswerSet,
        additional: &AdditionalText,
        contact: &Contact,
    ) -> SubmissionOutcome {
        let errors = self.validate(answers, additional, contact, lang);
        if !errors.is_empty() {
            debug!(%qtype, %lang, violations = errors.len(), "submission rejected by validation");
            return SubmissionOutcome::Invalid(errors);
        }

        let report = self.render(qtype, answers, additional, contact, lang);
        match self.submitter.submit(&report).await {
            Ok(()) => {
                // A stale draft after successful delivery is harmless;
                // clearing is best-effort like every store operation.
                self.reset(qtype, lang).await;
                SubmissionOutcome::Submitted
            }
            Err(err) => {
                debug!(%qtype, %lang, %err, "report delivery failed");
                SubmissionOutcome::DeliveryFailed(err)
            }
        }
    }
}
