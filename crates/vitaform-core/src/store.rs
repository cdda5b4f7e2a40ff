//! Draft persistence trait.
//!
//! Defines the interface for keyed draft storage with a freshness window.
//! Implementations live in vitaform-infra.

use std::future::Future;

use vitaform_types::draft::Draft;
use vitaform_types::error::StoreError;
use vitaform_types::language::Language;
use vitaform_types::schema::QuestionnaireType;

/// Keyed persistence for in-progress questionnaire drafts.
///
/// One slot per (questionnaire type, language) pair; `save` overwrites.
/// Uses RPITIT (native async fn in traits) consistent with all async
/// traits in this project.
pub trait DraftStore: Send + Sync {
    /// Persist a draft, replacing any prior draft for the same pair.
    fn save(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
        draft: &Draft,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Load the stored draft for the pair.
    ///
    /// Must return `Ok(None)` for a missing entry, an entry older than
    /// the 24-hour freshness window, or a corrupt payload -- expired and
    /// unreadable drafts are never handed back to the caller.
    fn load(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
    ) -> impl Future<Output = Result<Option<Draft>, StoreError>> + Send;

    /// Remove the stored draft for the pair. No-op if absent.
    fn clear(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
