//! aidocs CLI: scaffold AI agent documentation into a project.
//!
//! Provides four commands:
//! `generate`, `customize`, `status`, and `list`.
//!
//! All file work is delegated to [`aidocs_core`]; this crate parses arguments,
//! prompts when needed and prints results.

mod commands;
mod output;

use std::path::PathBuf;

use aidocs_core::config::{DocsConfig, ProjectValues};
use aidocs_core::materializer::Mode;
use aidocs_core::templates::Flavor;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "aidocs",
    about = "Scaffold AI agent context primers, architecture and methodology docs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to aidocs.config.json (default: ./aidocs.config.json)
    #[arg(long, global = true, default_value = aidocs_core::config::CONFIG_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the documentation templates into a directory
    Generate {
        /// Target directory
        #[arg(default_value = ".")]
        target: PathBuf,

        /// Write files directly into the target instead of universal-ai-docs/
        #[arg(short = 'd', long, visible_alias = "here")]
        direct: bool,

        /// Template set to write
        #[arg(long, value_enum, env = "AIDOCS_FLAVOR")]
        flavor: Option<FlavorChoice>,

        /// Replace files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Fill placeholder tokens in generated documents
    Customize {
        /// Directory the documents were generated into
        #[arg(default_value = ".")]
        target: PathBuf,

        /// The documents live directly in the target, not in universal-ai-docs/
        #[arg(short = 'd', long, visible_alias = "here")]
        direct: bool,

        /// Template set the documents came from
        #[arg(long, value_enum, env = "AIDOCS_FLAVOR")]
        flavor: Option<FlavorChoice>,

        #[command(flatten)]
        values: ValuesArgs,

        /// Never prompt; leave unanswered placeholders in place
        #[arg(short, long)]
        yes: bool,

        /// Fail if any known placeholder would remain
        #[arg(long)]
        strict: bool,

        /// Store the answers in the config file for next time
        #[arg(long)]
        save: bool,
    },

    /// Show which documents are missing, pristine or modified
    Status {
        /// Directory the documents were generated into
        #[arg(default_value = ".")]
        target: PathBuf,

        /// The documents live directly in the target, not in universal-ai-docs/
        #[arg(short = 'd', long, visible_alias = "here")]
        direct: bool,

        /// Template set to compare against
        #[arg(long, value_enum, env = "AIDOCS_FLAVOR")]
        flavor: Option<FlavorChoice>,
    },

    /// List the bundled documents
    List {
        /// Only list one template set
        #[arg(long, value_enum, env = "AIDOCS_FLAVOR")]
        flavor: Option<FlavorChoice>,
    },
}

/// Placeholder values given on the command line.
#[derive(Args, Debug, Default)]
pub struct ValuesArgs {
    /// Project name ([PROJECT_NAME])
    #[arg(long)]
    pub name: Option<String>,

    /// Brief description ([project_description])
    #[arg(long)]
    pub description: Option<String>,

    /// Target users or market ([target_description])
    #[arg(long)]
    pub audience: Option<String>,

    /// Main business objective ([measurable_goal])
    #[arg(long)]
    pub goal: Option<String>,

    /// Frontend technology, part of [Technology]
    #[arg(long)]
    pub frontend: Option<String>,

    /// Backend technology, part of [Technology]
    #[arg(long)]
    pub backend: Option<String>,

    /// Database technology, part of [Technology]
    #[arg(long)]
    pub database: Option<String>,

    /// Architecture pattern ([architectural_pattern])
    #[arg(long)]
    pub architecture: Option<String>,

    /// Domain focus ([domain_focus])
    #[arg(long)]
    pub domain: Option<String>,

    /// Timeline or deadline ([project_timeline_or_deadline])
    #[arg(long)]
    pub timeline: Option<String>,

    /// Date for [DATE] (default: today)
    #[arg(long)]
    pub date: Option<String>,
}

impl ValuesArgs {
    pub fn into_values(self) -> ProjectValues {
        ProjectValues {
            name: self.name,
            description: self.description,
            audience: self.audience,
            goal: self.goal,
            frontend: self.frontend,
            backend: self.backend,
            database: self.database,
            architecture: self.architecture,
            domain: self.domain,
            timeline: self.timeline,
            date: self.date,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlavorChoice {
    Ready,
    Universal,
}

impl FlavorChoice {
    pub fn as_flavor(&self) -> Flavor {
        match self {
            Self::Ready => Flavor::Ready,
            Self::Universal => Flavor::Universal,
        }
    }
}

/// The `--flavor` flag wins over the config file.
fn resolve_flavor(choice: Option<FlavorChoice>, config: &DocsConfig) -> Flavor {
    choice.map_or(config.flavor, |c| c.as_flavor())
}

fn mode(direct: bool) -> Mode {
    if direct {
        Mode::Direct
    } else {
        Mode::Subdirectory
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = DocsConfig::load_or_default(&cli.config)?;
    tracing::debug!(flavor = %config.flavor, "loaded config from {}", cli.config.display());

    match cli.command {
        Commands::Generate {
            target,
            direct,
            flavor,
            force,
        } => {
            commands::generate::run(&target, mode(direct), resolve_flavor(flavor, &config), force)?;
        }
        Commands::Customize {
            target,
            direct,
            flavor,
            values,
            yes,
            strict,
            save,
        } => {
            let options = commands::customize::CustomizeOptions {
                interactive: !yes && console::user_attended(),
                strict,
                save,
            };
            commands::customize::run(
                &cli.config,
                &config,
                &target,
                mode(direct),
                resolve_flavor(flavor, &config),
                values.into_values(),
                &options,
            )?;
        }
        Commands::Status {
            target,
            direct,
            flavor,
        } => {
            commands::status::run(&target, mode(direct), resolve_flavor(flavor, &config))?;
        }
        Commands::List { flavor } => {
            commands::list::run(flavor.map(|f| f.as_flavor()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_generate_defaults() {
        let cli = parse(&["aidocs", "generate"]);
        match cli.command {
            Commands::Generate {
                target,
                direct,
                flavor,
                force,
            } => {
                assert_eq!(target, PathBuf::from("."));
                assert!(!direct);
                assert!(flavor.is_none());
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("aidocs.config.json"));
    }

    #[test]
    fn test_direct_aliases() {
        for flag in ["--direct", "-d", "--here"] {
            let cli = parse(&["aidocs", "generate", "/tmp/proj", flag]);
            match cli.command {
                Commands::Generate { target, direct, .. } => {
                    assert!(direct, "{flag} should enable direct mode");
                    assert_eq!(target, PathBuf::from("/tmp/proj"));
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn test_help_is_not_an_error_kind() {
        let err = Cli::try_parse_from(["aidocs", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_unknown_flavor_rejected() {
        assert!(Cli::try_parse_from(["aidocs", "generate", "--flavor", "fancy"]).is_err());
    }

    #[test]
    fn test_customize_values_flatten() {
        let cli = parse(&[
            "aidocs",
            "customize",
            "--name",
            "Acme",
            "--frontend",
            "React",
            "--yes",
        ]);
        match cli.command {
            Commands::Customize { values, yes, .. } => {
                assert!(yes);
                let values = values.into_values();
                assert_eq!(values.name.as_deref(), Some("Acme"));
                assert_eq!(values.frontend.as_deref(), Some("React"));
                assert!(values.goal.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flavor_flag_overrides_config() {
        let config = DocsConfig {
            flavor: Flavor::Universal,
            ..DocsConfig::default()
        };
        assert_eq!(resolve_flavor(None, &config), Flavor::Universal);
        assert_eq!(
            resolve_flavor(Some(FlavorChoice::Ready), &config),
            Flavor::Ready
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["aidocs", "status", "-vv", "--config", "other.json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("other.json"));
    }
}
