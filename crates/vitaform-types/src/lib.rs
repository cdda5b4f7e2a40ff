//! Shared domain types for the vitaform questionnaire pipeline.
//!
//! This crate contains the core domain types used across the pipeline:
//! Schema, AnswerSet, Contact, Draft, Language, the localized message
//! catalog, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod answer;
pub mod contact;
pub mod draft;
pub mod error;
pub mod language;
pub mod message;
pub mod schema;
