use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use easypolicy::{
    Archive, DocumentType, GeneratorInputs, Platform, SavedDocument,
    domain::{FormStep, SourceKind, validate_step},
    source::{Composer, DocumentSource, RemoteService},
};
use tracing::instrument;

use super::{load_config, terminal::Colorize};

/// Parse a document type from a string at the CLI boundary.
fn parse_doc_type(s: &str) -> Result<DocumentType, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Parse a platform from a string at the CLI boundary.
fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[allow(clippy::struct_excessive_bools)]
pub struct Generate {
    /// The document type: privacy, terms, or cookies
    #[clap(long = "type", value_parser = parse_doc_type)]
    doc_type: DocumentType,

    /// Legal name of the organisation
    #[clap(long, default_value = "")]
    company: String,

    /// Website or app link
    #[clap(long, default_value = "")]
    url: String,

    /// Deployment surface: website, app, or both
    #[clap(long, default_value = "website", value_parser = parse_platform)]
    platform: Platform,

    /// Description of the app platform (e.g. "iOS & Android")
    #[clap(long)]
    app_platform: Option<String>,

    /// Contact email named in the generated text
    #[clap(long, default_value = "")]
    email: String,

    /// Jurisdiction country
    #[clap(long, default_value = "")]
    country: String,

    /// Jurisdiction state or region
    #[clap(long, default_value = "")]
    state: String,

    /// Personal information is collected
    #[arg(long)]
    collects_personal_data: bool,

    /// Cookies or similar tracking technologies are used
    #[arg(long)]
    uses_cookies: bool,

    /// Third-party advertising is used
    #[arg(long)]
    uses_ads: bool,

    /// Marketing emails are sent
    #[arg(long)]
    marketing_emails: bool,

    /// Data is shared or sold to third parties
    #[arg(long)]
    sell_data: bool,

    /// Social media logins are offered
    #[arg(long)]
    social_logins: bool,

    /// Payments are processed
    #[arg(long)]
    payment_processing: bool,

    /// Data is knowingly collected from minors
    #[arg(long)]
    minor_users: bool,

    /// Comma-separated third-party tool names (empty omits the section)
    #[clap(long, default_value = "")]
    third_party_tools: String,

    /// Header date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    date: Option<NaiveDate>,

    /// Additional instructions for the remote generative source
    #[clap(long)]
    notes: Option<String>,

    /// Save the generated document to the archive
    #[arg(long)]
    save: bool,

    /// Write the document to a file instead of stdout
    #[clap(long)]
    out: Option<PathBuf>,
}

impl Generate {
    #[instrument(skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let inputs = self.inputs();

        // Required-field gaps never block generation; they are worth a
        // warning because the output will read awkwardly.
        for step in [FormStep::Business, FormStep::Contact] {
            for message in validate_step(step, &inputs).values() {
                eprintln!("{}", format!("⚠️  {message}").warning());
            }
        }

        let date = self.date.unwrap_or_else(|| Utc::now().date_naive());

        let config = load_config(root)?;
        let content = match config.source() {
            SourceKind::Local => {
                Composer::new(date).generate(self.doc_type, &inputs, self.notes.as_deref())?
            }
            SourceKind::Remote => {
                let endpoint = config.endpoint().ok_or_else(|| {
                    anyhow::anyhow!("source is 'remote' but no endpoint is configured")
                })?;
                RemoteService::new(endpoint).generate(
                    self.doc_type,
                    &inputs,
                    self.notes.as_deref(),
                )?
            }
        };

        if let Some(out) = &self.out {
            std::fs::write(out, &content)?;
            println!("Wrote {} to {}", self.doc_type, out.display());
        } else {
            println!("{content}");
        }

        if self.save {
            let document = SavedDocument::new(self.doc_type, inputs, date, content);
            let id = document.id();
            let mut archive = Archive::open(root);
            archive.save(document)?;
            println!("{}", format!("✅ Saved document {id}").success());
        }

        Ok(())
    }

    fn inputs(&self) -> GeneratorInputs {
        GeneratorInputs {
            company_name: self.company.clone(),
            website_url: self.url.clone(),
            platform: self.platform,
            app_platform: self.app_platform.clone(),
            email: self.email.clone(),
            country: self.country.clone(),
            state: self.state.clone(),
            collects_personal_data: self.collects_personal_data,
            uses_cookies: self.uses_cookies,
            uses_ads: self.uses_ads,
            marketing_emails: self.marketing_emails,
            sell_data: self.sell_data,
            social_logins: self.social_logins,
            payment_processing: self.payment_processing,
            minor_users: self.minor_users,
            third_party_tools: self.third_party_tools.clone(),
        }
    }
}
