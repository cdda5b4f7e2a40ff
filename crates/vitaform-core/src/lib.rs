//! Business logic and port trait definitions for vitaform.
//!
//! This crate holds the pure form-processing pipeline -- the validator
//! and the report renderer -- plus the "ports" (`DraftStore`,
//! `ReportSubmitter`) that the infrastructure layer implements, and the
//! `FormService` that wires them together. It depends only on
//! `vitaform-types` -- never on `vitaform-infra` or any database/IO crate.

pub mod report;
pub mod service;
pub mod store;
pub mod submit;
pub mod validate;
