use std::path::Path;

use easypolicy::Archive;
use tracing::instrument;
use uuid::Uuid;

use super::{parse_id, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Show {
    /// The id of the saved document to print
    #[clap(value_parser = parse_id)]
    id: Uuid,
}

impl Show {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let archive = Archive::open(root);

        let Some(document) = archive.find(self.id) else {
            anyhow::bail!("Saved document {} not found", self.id);
        };

        if document.drifted() {
            eprintln!(
                "{}",
                "note: regenerating from the recorded answers would produce different text"
                    .warning()
            );
        }

        println!("{}", document.content());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use easypolicy::{DocumentType, GeneratorInputs, SavedDocument, compose::compose};
    use tempfile::tempdir;

    use super::*;

    fn seed(root: &Path) -> Uuid {
        let inputs = GeneratorInputs {
            company_name: "Acme Digital".to_string(),
            website_url: "https://acme.example".to_string(),
            email: "legal@acme.example".to_string(),
            country: "Germany".to_string(),
            ..GeneratorInputs::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let content = compose(DocumentType::TermsAndConditions, &inputs, date);
        let document = SavedDocument::new(DocumentType::TermsAndConditions, inputs, date, content);
        let id = document.id();

        let mut archive = Archive::open(root);
        archive.save(document).unwrap();
        id
    }

    #[test]
    fn show_prints_a_saved_document() {
        let tmp = tempdir().unwrap();
        let id = seed(tmp.path());

        let show = Show { id };
        show.run(tmp.path()).expect("show should succeed");
    }

    #[test]
    fn show_unknown_id_fails() {
        let tmp = tempdir().unwrap();

        let show = Show { id: Uuid::new_v4() };
        assert!(show.run(tmp.path()).is_err());
    }
}
