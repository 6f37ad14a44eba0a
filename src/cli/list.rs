use std::path::Path;

use easypolicy::Archive;
use tracing::instrument;

use super::terminal::{self, Colorize};

#[derive(Debug, Default, clap::Parser)]
pub struct List {}

impl List {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let archive = Archive::open(root);

        if archive.is_empty() {
            println!("No saved documents. Run `easypolicy wizard` to create one.");
            return Ok(());
        }

        let width = company_column_width();
        for document in archive.documents() {
            let id = document.id().to_string();
            let marker = if document.drifted() {
                format!("  {}", "~".warning())
            } else {
                String::new()
            };

            println!(
                "{}  {}  {:<22}  {}{marker}",
                id[..8].dim(),
                document.date(),
                document.doc_type().to_string(),
                truncate(document.company_name(), width),
            );
        }

        println!();
        println!("{}", format!("{} document(s)", archive.len()).dim());

        Ok(())
    }
}

/// Width available for the company column, after the fixed-width columns.
fn company_column_width() -> usize {
    if terminal::is_narrow() {
        16
    } else {
        terminal::terminal_width().map_or(40, |w| usize::from(w).saturating_sub(46).clamp(16, 40))
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
