use std::path::{Path, PathBuf};

mod export;
mod generate;
mod list;
mod show;
mod terminal;
mod wizard;

use clap::ArgAction;
use easypolicy::{Archive, Config, domain::SourceKind};
use export::Export;
use generate::Generate;
use list::List;
use show::Show;
use tracing::instrument;
use uuid::Uuid;
use wizard::Wizard;

/// Parse a saved-document id from a string.
fn parse_id(s: &str) -> Result<Uuid, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Location of the configuration file under the tool root.
fn config_path(root: &Path) -> PathBuf {
    root.join(".easypolicy/config.toml")
}

/// Loads the configuration, falling back to defaults when none exists.
fn load_config(root: &Path) -> anyhow::Result<Config> {
    let path = config_path(root);
    if path.exists() {
        Config::load(&path).map_err(|e| anyhow::anyhow!("{e}"))
    } else {
        Ok(Config::default())
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the tool root (config and archive live beneath it)
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::List(List::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Initialize the tool root
    Init,

    /// Generate a document from command-line flags
    Generate(Generate),

    /// Interactive multi-step questionnaire
    Wizard(Wizard),

    /// List saved documents (default)
    List(List),

    /// Print a saved document's content
    Show(Show),

    /// Delete a saved document
    Delete(Delete),

    /// Export a saved document to a text file
    Export(Export),

    /// Show or modify configuration settings
    Config(ConfigCmd),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Init => Init::run(&root)?,
            Self::Generate(command) => command.run(&root)?,
            Self::Wizard(command) => command.run(&root)?,
            Self::List(command) => command.run(&root)?,
            Self::Show(command) => command.run(&root)?,
            Self::Delete(command) => command.run(&root)?,
            Self::Export(command) => command.run(&root)?,
            Self::Config(command) => command.run(&root)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(root: &Path) -> anyhow::Result<()> {
        use std::fs;

        let tool_dir = root.join(".easypolicy");
        if tool_dir.exists() {
            anyhow::bail!("Already initialized (found existing .easypolicy directory)");
        }

        fs::create_dir_all(&tool_dir)
            .map_err(|e| anyhow::anyhow!("Failed to create .easypolicy directory: {e}"))?;

        let config = Config::default();
        config
            .save(&config_path(root))
            .map_err(|e| anyhow::anyhow!("Failed to create config.toml: {e}"))?;

        fs::create_dir_all(tool_dir.join("archive"))
            .map_err(|e| anyhow::anyhow!("Failed to create archive directory: {e}"))?;

        println!("Initialized easypolicy in {}", root.display());
        println!("  Created: .easypolicy/config.toml");
        println!("  Created: .easypolicy/archive/");
        println!();
        println!("Next steps:");
        println!("  easypolicy wizard");

        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Delete {
    /// The id of the saved document to delete
    #[clap(value_parser = parse_id)]
    id: Uuid,

    /// Skip confirmation prompts
    #[arg(long, short)]
    yes: bool,
}

impl Delete {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        let mut archive = Archive::open(root);

        let Some(document) = archive.find(self.id) else {
            anyhow::bail!("Saved document {} not found", self.id);
        };

        if !self.yes {
            println!(
                "Will delete {} for {} ({})",
                document.doc_type(),
                document.company_name(),
                document.date().format("%B %-d, %Y")
            );

            eprint!("\nProceed? (y/N) ");
            use std::io::{self, BufRead};
            let stdin = io::stdin();
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            if !line.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled");
                std::process::exit(130);
            }
        }

        archive.remove(self.id)?;

        println!("{}", format!("✅ Deleted {}", self.id).success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct ConfigCmd {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

impl ConfigCmd {
    #[instrument]
    fn run(self, root: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        match self.command {
            ConfigCommand::Show => {
                let config = load_config(root)?;

                println!("Configuration:");
                println!(
                    "  source: {} ({})",
                    config.source(),
                    match config.source() {
                        SourceKind::Local => "deterministic composer".dim(),
                        SourceKind::Remote => "generative service".dim(),
                    }
                );
                println!(
                    "  endpoint: {}",
                    config.endpoint().unwrap_or("(not set)")
                );
            }
            ConfigCommand::Set { key, value } => {
                let mut config = load_config(root)?;

                match key.as_str() {
                    "source" => {
                        let source: SourceKind =
                            value.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
                        config.set_source(source);
                    }
                    "endpoint" => {
                        let endpoint = if value.is_empty() { None } else { Some(value) };
                        config.set_endpoint(endpoint);
                    }
                    _ => {
                        return Err(anyhow::anyhow!(
                            "Unknown configuration key: '{key}'\nSupported keys: source, endpoint",
                        ));
                    }
                }

                std::fs::create_dir_all(root.join(".easypolicy"))?;
                config
                    .save(&config_path(root))
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                println!("{}", format!("Updated {key}").success());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use easypolicy::{
        DocumentType, GeneratorInputs, SavedDocument,
        compose::compose,
    };
    use tempfile::tempdir;

    use super::*;

    fn seed_archive(root: &Path) -> Uuid {
        let inputs = GeneratorInputs {
            company_name: "Acme Digital".to_string(),
            website_url: "https://acme.example".to_string(),
            email: "legal@acme.example".to_string(),
            country: "Germany".to_string(),
            ..GeneratorInputs::default()
        };
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let content = compose(DocumentType::PrivacyPolicy, &inputs, date);
        let document = SavedDocument::new(DocumentType::PrivacyPolicy, inputs, date, content);
        let id = document.id();

        let mut archive = Archive::open(root);
        archive.save(document).unwrap();
        id
    }

    #[test]
    fn init_creates_config_and_archive() {
        let tmp = tempdir().unwrap();

        Init::run(tmp.path()).expect("init should succeed");

        assert!(tmp.path().join(".easypolicy/config.toml").exists());
        assert!(tmp.path().join(".easypolicy/archive").is_dir());
    }

    #[test]
    fn init_refuses_to_reinitialize() {
        let tmp = tempdir().unwrap();

        Init::run(tmp.path()).unwrap();
        assert!(Init::run(tmp.path()).is_err());
    }

    #[test]
    fn delete_removes_the_saved_document() {
        let tmp = tempdir().unwrap();
        let id = seed_archive(tmp.path());

        let delete = Delete { id, yes: true };
        delete.run(tmp.path()).expect("delete should succeed");

        assert!(Archive::open(tmp.path()).is_empty());
    }

    #[test]
    fn delete_unknown_id_fails() {
        let tmp = tempdir().unwrap();

        let delete = Delete {
            id: Uuid::new_v4(),
            yes: true,
        };
        assert!(delete.run(tmp.path()).is_err());
    }

    #[test]
    fn config_set_round_trips() {
        let tmp = tempdir().unwrap();

        let set = ConfigCmd {
            command: ConfigCommand::Set {
                key: "source".to_string(),
                value: "remote".to_string(),
            },
        };
        set.run(tmp.path()).expect("config set should succeed");

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.source(), SourceKind::Remote);
    }

    #[test]
    fn config_set_rejects_unknown_keys() {
        let tmp = tempdir().unwrap();

        let set = ConfigCmd {
            command: ConfigCommand::Set {
                key: "colour".to_string(),
                value: "blue".to_string(),
            },
        };
        assert!(set.run(tmp.path()).is_err());
    }
}
