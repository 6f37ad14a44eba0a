/// The archive of saved documents.
pub mod archive;
/// JSON serialization for archive records.
pub mod record;

pub use archive::Archive;
pub use record::{ArchiveRecord, LoadError};
