use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use abaplink_core::config::{self, DocUrlConfig};
use abaplink_core::url_map;

/// Top-level CLI for the abaplink URL mapper.
#[derive(Debug, Parser)]
#[command(name = "abaplink")]
#[command(about = "abaplink: map ABAP documentation sources to help.sap.com URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Map a documentation source file to its help.sap.com URL.
    Map {
        /// Library identifier, used for registry lookup and version sniffing.
        library_id: String,

        /// Relative source file path, e.g. "md/abeninfo.md".
        file: String,

        /// Optional fragment appended to the URL as "#anchor".
        #[arg(long)]
        anchor: Option<String>,

        /// Override the registry path_pattern hint.
        #[arg(long)]
        path_pattern: Option<String>,

        /// Override the registry base_url hint.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show the version tag the sniffing heuristics detect for a library.
    Version {
        /// Library identifier.
        library_id: String,

        /// Override the registry path_pattern hint.
        #[arg(long)]
        path_pattern: Option<String>,

        /// Override the registry base_url hint.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print the library registry path.
    ConfigPath,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Map {
                library_id,
                file,
                anchor,
                path_pattern,
                base_url,
            } => {
                let cfg = hints_for(&library_id, path_pattern, base_url)?;
                tracing::debug!("mapping {} for library {}", file, library_id);
                match url_map::map_to_url(&library_id, &file, &cfg, anchor.as_deref()) {
                    Some(url) => println!("{url}"),
                    None => anyhow::bail!("no deterministic URL mapping for {file}"),
                }
            }
            CliCommand::Version {
                library_id,
                path_pattern,
                base_url,
            } => {
                let cfg = hints_for(&library_id, path_pattern, base_url)?;
                match url_map::extract_version(&library_id, &cfg) {
                    Some(version) => println!("{version}"),
                    None => println!("undetermined"),
                }
            }
            CliCommand::ConfigPath => {
                println!("{}", config::registry_path()?.display());
            }
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "abaplink", &mut std::io::stdout());
            }
        }

        Ok(())
    }
}

/// Registry hints for a library, with explicit CLI flags taking precedence
/// over whatever the registry file holds.
fn hints_for(
    library_id: &str,
    path_pattern: Option<String>,
    base_url: Option<String>,
) -> Result<DocUrlConfig> {
    let registry = config::load_or_init()?;
    tracing::debug!("loaded registry with {} libraries", registry.libraries.len());

    let mut cfg = registry.hints(library_id);
    if path_pattern.is_some() {
        cfg.path_pattern = path_pattern;
    }
    if base_url.is_some() {
        cfg.base_url = base_url;
    }
    Ok(cfg)
}
