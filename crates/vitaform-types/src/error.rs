//! Error types for the questionnaire pipeline.

use thiserror::Error;

/// Errors from draft persistence operations (used by the `DraftStore`
/// trait in vitaform-core).
///
/// The form service absorbs these: persistence is best-effort and a
/// failed save/load degrades to "no draft" rather than surfacing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Classified delivery failures from the report submitter.
///
/// Every failure path of an outbound submission resolves to one of these
/// variants; the submitter never panics past its boundary. Callers decide
/// whether to resubmit -- no retry happens below this type.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Destination or credential not configured (or left as placeholder).
    #[error("bot token or chat id is not configured")]
    MissingConfiguration,

    /// The endpoint answered with a non-success result.
    #[error("endpoint rejected the message: {description}")]
    Rejected { description: String },

    /// The request was aborted after the client-side timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The transport could not complete the request.
    #[error("network failure: {0}")]
    Network(String),

    #[error("unknown delivery failure: {0}")]
    Unknown(String),
}
