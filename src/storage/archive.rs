//! A filesystem backed archive of saved documents.
//!
//! One JSON record per document under `<root>/.easypolicy/archive/`. The
//! archive only promises that an appended record round-trips unchanged until
//! explicitly removed; writes are fire-and-forget with no transactional
//! guarantee beyond whole-file replacement.

use std::{
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::{
    domain::SavedDocument,
    storage::record::ArchiveRecord,
};

/// Archive location relative to the tool root.
const ARCHIVE_DIR: &str = ".easypolicy/archive";

/// The keyed collection of saved documents.
#[derive(Debug)]
pub struct Archive {
    /// The directory archive records are stored in.
    dir: PathBuf,
    documents: Vec<SavedDocument>,
}

impl Archive {
    /// Opens the archive under the given tool root, loading every readable
    /// record.
    ///
    /// Corrupt or unreadable records are skipped with a warning and the
    /// archive loads as whatever remains; a missing archive directory is an
    /// empty archive. Opening never fails the session.
    #[must_use]
    pub fn open(root: &Path) -> Self {
        let dir = root.join(ARCHIVE_DIR);
        let paths = collect_record_paths(&dir);

        let mut documents: Vec<SavedDocument> = paths
            .par_iter()
            .filter_map(|path| match ArchiveRecord::load(path) {
                Ok(record) => Some(record.into()),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "skipping unreadable archive record"
                    );
                    None
                }
            })
            .collect();

        // Newest first, id as tiebreak for a stable listing.
        documents.sort_by(|a, b| b.date().cmp(&a.date()).then(a.id().cmp(&b.id())));

        Self { dir, documents }
    }

    /// Iterates over the archived documents, newest first.
    pub fn documents(&self) -> impl Iterator<Item = &SavedDocument> {
        self.documents.iter()
    }

    /// Looks up a document by id.
    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<&SavedDocument> {
        self.documents.iter().find(|doc| doc.id() == id)
    }

    /// The number of archived documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the archive holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Appends a document to the archive and writes its record to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the record file cannot be written.
    pub fn save(&mut self, document: SavedDocument) -> io::Result<()> {
        ArchiveRecord::from(document.clone()).save(&self.dir)?;
        self.documents.push(document);
        Ok(())
    }

    /// Removes a document by id, deleting its record file.
    ///
    /// Returns `true` if a document was removed, `false` if the id was not
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if the record file exists but cannot be deleted.
    pub fn remove(&mut self, id: Uuid) -> io::Result<bool> {
        let Some(index) = self.documents.iter().position(|doc| doc.id() == id) else {
            return Ok(false);
        };

        let path = ArchiveRecord::path_for(&self.dir, id);
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            // The in-memory entry can outlive its file if something else
            // deleted it; removal still succeeds.
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(error),
        }

        self.documents.remove(index);
        Ok(true)
    }
}

fn collect_record_paths(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.extension() == Some(OsStr::new("json")))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;
    use crate::{
        compose,
        domain::{DocumentType, GeneratorInputs},
    };

    fn saved(company: &str, day: u32) -> SavedDocument {
        let inputs = GeneratorInputs {
            company_name: company.to_string(),
            website_url: "https://example.test".to_string(),
            email: "legal@example.test".to_string(),
            country: "France".to_string(),
            ..GeneratorInputs::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        let content = compose::compose(DocumentType::PrivacyPolicy, &inputs, date);
        SavedDocument::new(DocumentType::PrivacyPolicy, inputs, date, content)
    }

    #[test]
    fn empty_root_is_an_empty_archive() {
        let tmp = tempdir().unwrap();
        let archive = Archive::open(tmp.path());
        assert!(archive.is_empty());
    }

    #[test]
    fn saved_documents_round_trip() {
        let tmp = tempdir().unwrap();

        let document = saved("Acme Digital", 1);
        let id = document.id();

        let mut archive = Archive::open(tmp.path());
        archive.save(document.clone()).unwrap();

        // A fresh open must reproduce the appended record unchanged.
        let reloaded = Archive::open(tmp.path());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.find(id), Some(&document));
        assert!(reloaded.find(id).unwrap().is_consistent());
    }

    #[test]
    fn remove_deletes_one_entry() {
        let tmp = tempdir().unwrap();

        let mut archive = Archive::open(tmp.path());
        let first = saved("First", 1);
        let second = saved("Second", 2);
        let first_id = first.id();
        let second_id = second.id();
        archive.save(first).unwrap();
        archive.save(second).unwrap();

        assert!(archive.remove(first_id).unwrap());
        assert!(archive.find(first_id).is_none());
        assert!(archive.find(second_id).is_some());

        let reloaded = Archive::open(tmp.path());
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let tmp = tempdir().unwrap();
        let mut archive = Archive::open(tmp.path());
        assert!(!archive.remove(Uuid::new_v4()).unwrap());
    }

    #[test]
    fn corrupt_records_are_skipped() {
        let tmp = tempdir().unwrap();

        let mut archive = Archive::open(tmp.path());
        archive.save(saved("Kept", 1)).unwrap();

        let archive_dir = tmp.path().join(ARCHIVE_DIR);
        std::fs::write(archive_dir.join("corrupt.json"), "{ not json").unwrap();

        let reloaded = Archive::open(tmp.path());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.documents().next().unwrap().company_name(), "Kept");
    }

    #[test]
    fn non_record_files_are_ignored() {
        let tmp = tempdir().unwrap();
        let archive_dir = tmp.path().join(ARCHIVE_DIR);
        std::fs::create_dir_all(&archive_dir).unwrap();
        std::fs::write(archive_dir.join("notes.txt"), "not a record").unwrap();

        let archive = Archive::open(tmp.path());
        assert!(archive.is_empty());
    }

    #[test]
    fn listing_is_newest_first() {
        let tmp = tempdir().unwrap();

        let mut archive = Archive::open(tmp.path());
        archive.save(saved("Older", 1)).unwrap();
        archive.save(saved("Newer", 9)).unwrap();

        let reloaded = Archive::open(tmp.path());
        let companies: Vec<_> = reloaded
            .documents()
            .map(SavedDocument::company_name)
            .collect();
        assert_eq!(companies, ["Newer", "Older"]);
    }
}
