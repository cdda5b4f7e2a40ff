//! SQLite implementation of `DraftStore`.
//!
//! Drafts persist as JSON payloads in the `questionnaire_drafts` table,
//! one row per storage key, with INSERT OR REPLACE upsert semantics.
//! Freshness is enforced on read: the draft's own embedded timestamp
//! decides expiry, so a stale row reads back as "no draft" without any
//! background sweeping.

use chrono::Utc;
use sqlx::Row;
use tracing::warn;

use vitaform_core::store::DraftStore;
use vitaform_types::draft::{storage_key, Draft};
use vitaform_types::error::StoreError;
use vitaform_types::language::Language;
use vitaform_types::schema::QuestionnaireType;

use super::pool::DatabasePool;

/// SQLite-backed draft persistence.
pub struct SqliteDraftStore {
    pool: DatabasePool,
}

impl SqliteDraftStore {
    /// Create a new draft store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl DraftStore for SqliteDraftStore {
    async fn save(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
        draft: &Draft,
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_string(draft)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"INSERT OR REPLACE INTO questionnaire_drafts (storage_key, payload, updated_at)
               VALUES (?, ?, ?)"#,
        )
        .bind(storage_key(qtype, lang))
        .bind(&payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn load(
        &self,
        qtype: QuestionnaireType,
        lang: Language,
    ) -> Result<Option<Draft>, StoreError> {
        let key = storage_key(qtype, lang);
        let row = sqlx::query("SELECT payload FROM questionnaire_drafts WHERE storage_key = ?")
            .bind(&key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let payload: String = row
            .try_get("payload")
            .map_err(|e| StoreError::Query(e.to_string()))?;

        // A corrupt payload reads as "no draft" rather than an error.
        let draft: Draft = match serde_json::from_str(&payload) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(%key, %err, "discarding unreadable draft payload");
                return Ok(None);
            }
        };

        if draft.is_expired(Utc::now()) {
            return Ok(None);
        }

        Ok(Some(draft))
    }

    async fn clear(&self, qtype: QuestionnaireType, lang: Language) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM questionnaire_drafts WHERE storage_key = ?")
            .bind(storage_key(qtype, lang))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }
}
