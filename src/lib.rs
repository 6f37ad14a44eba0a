//! Deterministic legal document generation.
//!
//! Documents are assembled from a structured questionnaire of business facts
//! by conditional inclusion of predefined prose blocks. The composer is a
//! pure function over its inputs; saved documents are immutable snapshots
//! archived on disk.

pub mod domain;
pub use domain::{Config, DocumentType, Fact, GeneratorInputs, Platform, SavedDocument};

/// Template composition of legal documents.
pub mod compose;

/// Document sources: the deterministic composer and the remote generative
/// service, behind one capability.
pub mod source;
pub use source::{DocumentSource, SourceError};

/// Filesystem archive of saved documents.
pub mod storage;
pub use storage::{Archive, LoadError};
