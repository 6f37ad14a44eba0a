use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DocumentType, GeneratorInputs, Platform, SavedDocument};

/// A saved document serialized as a versioned JSON record.
///
/// One record per file, named `<id>.json` under the archive root. The
/// content field carries the frozen Markdown text verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordVersion", into = "RecordVersion")]
pub struct ArchiveRecord {
    id: Uuid,
    doc_type: DocumentType,
    platform: Platform,
    company_name: String,
    content: String,
    date: NaiveDate,
    inputs: GeneratorInputs,
    fingerprint: String,
}

impl ArchiveRecord {
    fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")
    }

    pub(crate) fn read<R: Read>(reader: &mut R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The file path for this record under the given archive root.
    #[must_use]
    pub fn path_for(root: &Path, id: Uuid) -> PathBuf {
        root.join(format!("{id}.json"))
    }

    /// Writes the record to `<root>/<id>.json`.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    pub fn save(&self, root: &Path) -> io::Result<()> {
        let file_path = Self::path_for(root, self.id);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(file_path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)
    }

    /// Reads a record from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is
    /// not a valid record.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(io_error),
        })?;

        let mut reader = BufReader::new(file);
        Self::read(&mut reader)
    }
}

/// Errors that can occur when loading an archive record.
#[derive(Debug, thiserror::Error)]
#[error("failed to read archive record")]
pub enum LoadError {
    /// The record file was not found.
    NotFound,
    /// An I/O error occurred.
    Io(#[from] io::Error),
    /// The JSON body could not be parsed.
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum RecordVersion {
    #[serde(rename = "1")]
    V1 {
        id: Uuid,
        doc_type: DocumentType,
        platform: Platform,
        company_name: String,
        content: String,
        date: NaiveDate,
        inputs: GeneratorInputs,
        fingerprint: String,
    },
}

impl From<RecordVersion> for ArchiveRecord {
    fn from(version: RecordVersion) -> Self {
        match version {
            RecordVersion::V1 {
                id,
                doc_type,
                platform,
                company_name,
                content,
                date,
                inputs,
                fingerprint,
            } => Self {
                id,
                doc_type,
                platform,
                company_name,
                content,
                date,
                inputs,
                fingerprint,
            },
        }
    }
}

impl From<ArchiveRecord> for RecordVersion {
    fn from(record: ArchiveRecord) -> Self {
        let ArchiveRecord {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        } = record;
        Self::V1 {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        }
    }
}

impl From<SavedDocument> for ArchiveRecord {
    fn from(document: SavedDocument) -> Self {
        let SavedDocument {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        } = document;
        Self {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        }
    }
}

impl From<ArchiveRecord> for SavedDocument {
    fn from(record: ArchiveRecord) -> Self {
        let ArchiveRecord {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        } = record;
        Self {
            id,
            doc_type,
            platform,
            company_name,
            content,
            date,
            inputs,
            fingerprint,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::compose;

    fn saved_document() -> SavedDocument {
        let inputs = GeneratorInputs {
            company_name: "Acme Digital".to_string(),
            website_url: "https://acme.example".to_string(),
            email: "legal@acme.example".to_string(),
            country: "Germany".to_string(),
            uses_cookies: true,
            ..GeneratorInputs::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let content = compose::compose(DocumentType::PrivacyPolicy, &inputs, date);
        SavedDocument::new(DocumentType::PrivacyPolicy, inputs, date, content)
    }

    #[test]
    fn json_round_trip() {
        let record = ArchiveRecord::from(saved_document());

        let mut bytes: Vec<u8> = vec![];
        record.write(&mut bytes).unwrap();

        let mut reader = Cursor::new(bytes);
        let reloaded = ArchiveRecord::read(&mut reader).unwrap();

        assert_eq!(record, reloaded);
    }

    #[test]
    fn serialized_form_carries_version_tag() {
        let record = ArchiveRecord::from(saved_document());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""_version":"1""#) || json.contains(r#""_version": "1""#));
    }

    #[test]
    fn save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let record = ArchiveRecord::from(saved_document());

        record.save(temp_dir.path()).unwrap();

        let path = ArchiveRecord::path_for(temp_dir.path(), record.id);
        let loaded = ArchiveRecord::load(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = ArchiveRecord::path_for(temp_dir.path(), Uuid::new_v4());
        let result = ArchiveRecord::load(&path);
        assert!(matches!(result, Err(LoadError::NotFound)));
    }

    #[test]
    fn load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = ArchiveRecord::load(&path);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn record_preserves_snapshot_consistency() {
        let document = saved_document();
        let round_tripped: SavedDocument =
            ArchiveRecord::from(document.clone()).into();
        assert_eq!(round_tripped, document);
        assert!(round_tripped.is_consistent());
    }
}
