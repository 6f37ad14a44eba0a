use std::path::Path;

use chrono::Utc;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use easypolicy::{
    Archive, DocumentType, Fact, GeneratorInputs, Platform, SavedDocument,
    domain::{FormStep, SourceKind, validate_step},
    source::{Composer, DocumentSource, RemoteService},
};
use tracing::instrument;
use uuid::Uuid;

use super::{load_config, parse_id, terminal::Colorize};

#[derive(Debug, clap::Parser)]
pub struct Wizard {
    /// Reload a saved document's answers as starting values
    #[clap(long, value_parser = parse_id)]
    from: Option<Uuid>,
}

impl Wizard {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let (mut inputs, reloaded_type) = initial(root, self.from)?;
        let theme = ColorfulTheme::default();

        business_step(&theme, &mut inputs)?;
        contact_step(&theme, &mut inputs)?;
        facts_step(&theme, &mut inputs)?;

        inputs.third_party_tools = Input::with_theme(&theme)
            .with_prompt("Third-party tools, comma separated (empty for none)")
            .with_initial_text(inputs.third_party_tools.clone())
            .allow_empty(true)
            .interact_text()?;

        let titles: Vec<&str> = DocumentType::ALL.iter().map(|t| t.title()).collect();
        let preselected = DocumentType::ALL
            .iter()
            .position(|t| *t == reloaded_type)
            .unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt("Document to generate")
            .items(&titles)
            .default(preselected)
            .interact()?;
        let doc_type = DocumentType::ALL[selection];

        let config = load_config(root)?;
        let date = Utc::now().date_naive();
        let content = match config.source() {
            SourceKind::Local => Composer::new(date).generate(doc_type, &inputs, None)?,
            SourceKind::Remote => {
                let endpoint = config.endpoint().ok_or_else(|| {
                    anyhow::anyhow!("source is 'remote' but no endpoint is configured")
                })?;
                let notes: String = Input::with_theme(&theme)
                    .with_prompt("Additional instructions (optional)")
                    .allow_empty(true)
                    .interact_text()?;
                let notes = if notes.trim().is_empty() {
                    None
                } else {
                    Some(notes)
                };
                RemoteService::new(endpoint).generate(doc_type, &inputs, notes.as_deref())?
            }
        };

        println!();
        println!("{}", "--- Preview ---".info());
        println!();
        println!("{content}");
        println!();

        let save = Confirm::with_theme(&theme)
            .with_prompt("Save this document to the archive?")
            .default(true)
            .interact()?;

        if save {
            let document = SavedDocument::new(doc_type, inputs, date, content);
            let id = document.id();
            let mut archive = Archive::open(root);
            archive.save(document)?;
            println!("{}", format!("✅ Saved document {id}").success());
        } else {
            println!("Not saved");
        }

        Ok(())
    }
}

/// Starting values for the form: a saved document's recorded answers when
/// `--from` names one, defaults otherwise.
fn initial(root: &Path, from: Option<Uuid>) -> anyhow::Result<(GeneratorInputs, DocumentType)> {
    let Some(id) = from else {
        return Ok((GeneratorInputs::default(), DocumentType::PrivacyPolicy));
    };

    let archive = Archive::open(root);
    let Some(document) = archive.find(id) else {
        anyhow::bail!("Saved document {id} not found");
    };

    Ok((document.inputs().clone(), document.doc_type()))
}

// Each step re-prompts until its required fields are filled in. Validation
// never rejects content, only absence.

fn business_step(theme: &ColorfulTheme, inputs: &mut GeneratorInputs) -> anyhow::Result<()> {
    loop {
        inputs.company_name = Input::with_theme(theme)
            .with_prompt("Company name")
            .with_initial_text(inputs.company_name.clone())
            .allow_empty(true)
            .interact_text()?;

        inputs.website_url = Input::with_theme(theme)
            .with_prompt("Website or app URL")
            .with_initial_text(inputs.website_url.clone())
            .allow_empty(true)
            .interact_text()?;

        let platforms = [Platform::Website, Platform::App, Platform::Both];
        let labels: Vec<String> = platforms.iter().map(ToString::to_string).collect();
        let preselected = platforms
            .iter()
            .position(|p| *p == inputs.platform)
            .unwrap_or(0);
        let selection = Select::with_theme(theme)
            .with_prompt("Platform")
            .items(&labels)
            .default(preselected)
            .interact()?;
        inputs.platform = platforms[selection];

        if inputs.platform == Platform::Website {
            inputs.app_platform = None;
        } else {
            let detail: String = Input::with_theme(theme)
                .with_prompt("App platform (e.g. iOS & Android)")
                .with_initial_text(inputs.app_platform.clone().unwrap_or_default())
                .allow_empty(true)
                .interact_text()?;
            inputs.app_platform = if detail.trim().is_empty() {
                None
            } else {
                Some(detail)
            };
        }

        let errors = validate_step(FormStep::Business, inputs);
        if errors.is_empty() {
            return Ok(());
        }
        for message in errors.values() {
            eprintln!("{}", format!("⚠️  {message}").warning());
        }
    }
}

fn contact_step(theme: &ColorfulTheme, inputs: &mut GeneratorInputs) -> anyhow::Result<()> {
    loop {
        inputs.email = Input::with_theme(theme)
            .with_prompt("Contact email")
            .with_initial_text(inputs.email.clone())
            .allow_empty(true)
            .interact_text()?;

        inputs.country = Input::with_theme(theme)
            .with_prompt("Country")
            .with_initial_text(inputs.country.clone())
            .allow_empty(true)
            .interact_text()?;

        inputs.state = Input::with_theme(theme)
            .with_prompt("State or region (optional)")
            .with_initial_text(inputs.state.clone())
            .allow_empty(true)
            .interact_text()?;

        let errors = validate_step(FormStep::Contact, inputs);
        if errors.is_empty() {
            return Ok(());
        }
        for message in errors.values() {
            eprintln!("{}", format!("⚠️  {message}").warning());
        }
    }
}

fn facts_step(theme: &ColorfulTheme, inputs: &mut GeneratorInputs) -> anyhow::Result<()> {
    let labels: Vec<&str> = Fact::ALL.iter().map(|fact| fact.label()).collect();
    let defaults = fact_defaults(inputs);

    let selected = MultiSelect::with_theme(theme)
        .with_prompt("Which of these apply? (space toggles, enter continues)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    apply_facts(inputs, &selected);
    Ok(())
}

fn fact_defaults(inputs: &GeneratorInputs) -> Vec<bool> {
    Fact::ALL.iter().map(|fact| fact.get(inputs)).collect()
}

fn apply_facts(inputs: &mut GeneratorInputs, selected: &[usize]) {
    for (index, fact) in Fact::ALL.iter().enumerate() {
        fact.set(inputs, selected.contains(&index));
    }
}
