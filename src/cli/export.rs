use std::path::{Path, PathBuf};

use easypolicy::{Archive, DocumentType};
use tracing::instrument;
use uuid::Uuid;

use super::{parse_id, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Export {
    /// The id of the saved document to export
    #[clap(value_parser = parse_id)]
    id: Uuid,

    /// Directory to write the exported file into
    #[clap(long, default_value = ".")]
    dir: PathBuf,
}

impl Export {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let archive = Archive::open(root);

        let Some(document) = archive.find(self.id) else {
            anyhow::bail!("Saved document {} not found", self.id);
        };

        let path = self
            .dir
            .join(file_name(document.company_name(), document.doc_type()));
        std::fs::write(&path, document.content())?;

        println!("{}", format!("✅ Exported to {}", path.display()).success());
        Ok(())
    }
}

/// Derives the export file name, `{Company}_{Type}.txt` with spaces collapsed
/// to underscores.
fn file_name(company: &str, doc_type: DocumentType) -> String {
    let company = company.split_whitespace().collect::<Vec<_>>().join("_");
    let title = doc_type
        .title()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{company}_{title}.txt")
}
