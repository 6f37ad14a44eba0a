//! Domain models for document generation.
//!
//! This module contains the questionnaire record, the document types,
//! saved-document snapshots, form validation, and configuration.

/// The questionnaire record and its platform/fact enumerations.
pub mod inputs;
pub use inputs::{Fact, GeneratorInputs, Platform};

/// Document types and saved-document snapshots.
pub mod document;
pub use document::{DocumentType, SavedDocument};

mod config;
pub use config::{Config, SourceKind};

/// Form checkpoint validation.
pub mod validation;
pub use validation::{Field, FormStep, validate_step};
