//! Report delivery trait.
//!
//! Defines the outbound boundary for rendered reports. Implementations
//! live in vitaform-infra.

use std::future::Future;

use vitaform_types::error::SubmitError;

/// Delivers a rendered report to an external messaging endpoint.
///
/// A single best-effort call: no retry happens behind this trait, and
/// every failure path resolves to a classified [`SubmitError`] rather
/// than a panic. Callers decide whether to resubmit.
pub trait ReportSubmitter: Send + Sync {
    fn submit(&self, report: &str) -> impl Future<Output = Result<(), SubmitError>> + Send;
}
