//! vista CLI: render debugger value snapshots through the pattern registry.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{Format, VistaConfig};

#[derive(Parser)]
#[command(name = "vista", version, about = "Pretty-printer for debugger values")]
struct Cli {
    /// Configuration file (default: nearest vista.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a value snapshot
    Inspect {
        /// Snapshot file (JSON)
        snapshot: PathBuf,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Maximum nesting depth to expand
        #[arg(long)]
        max_depth: Option<usize>,
        /// Maximum children shown per value
        #[arg(long)]
        max_children: Option<usize>,
        /// Label of the root value
        #[arg(long, default_value = "value")]
        label: String,
    },
    /// List registered patterns in match order
    Patterns {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Parse a type signature and show which pattern matches it
    Signature {
        /// Signature as the debugger prints it
        raw: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, source) = load_config(cli.config.as_deref(), &cwd)?;
    init_tracing(&config.log.filter);
    if let Some(path) = source {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }
    let registry = config.registry()?;

    match cli.command {
        Commands::Inspect {
            snapshot,
            format,
            max_depth,
            max_children,
            label,
        } => {
            let options = config.inspect_options(max_depth, max_children);
            let format = format.unwrap_or(config.inspect.format);
            commands::inspect::run(&registry, &snapshot, &label, options, format)
        }

        Commands::Patterns { format } => {
            commands::patterns::run(&registry, format.unwrap_or(config.inspect.format))
        }

        Commands::Signature { raw } => commands::signature::run(&registry, &raw),
    }
}

/// The configuration and the file it came from, if any.
fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<(VistaConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((VistaConfig::load(path)?, Some(path.to_path_buf())));
    }
    match VistaConfig::find_and_load(cwd)? {
        Some((config, path)) => Ok((config, Some(path))),
        None => Ok((VistaConfig::default(), None)),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "byte_order": "little",
        "root": {
            "type": "Magnum::Math::Matrix3<float>",
            "fields": [{
                "name": "_data",
                "type": "Magnum::Math::Vector<3, float> [3]",
                "elements": [
                    { "type": "Magnum::Math::Vector<3, float>",
                      "fields": [{ "name": "_data", "type": "float [3]",
                                   "elements": [{ "type": "float", "text": "1" },
                                                { "type": "float", "text": "0" },
                                                { "type": "float", "text": "0" }] }] },
                    { "type": "Magnum::Math::Vector<3, float>" },
                    { "type": "Magnum::Math::Vector<3, float>" }
                ]
            }]
        }
    }"#;

    #[test]
    fn explicit_config_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn inspect_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let registry = VistaConfig::default().registry().unwrap();
        let options = Default::default();
        let rendered = commands::inspect::render(&registry, &path, "m", options).unwrap();
        assert_eq!(
            rendered.text.as_deref(),
            Some("Matrix with 3 rows and 3 columns")
        );
        assert_eq!(rendered.children[0].text.as_deref(), Some("(1, 0, 0)"));
        assert!(rendered.children[1].error.is_some());
    }

    #[test]
    fn inspect_reports_bad_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"root\": 1 }").unwrap();
        let registry = VistaConfig::default().registry().unwrap();
        let options = Default::default();
        let err = commands::inspect::render(&registry, &path, "m", options).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn cli_parses_inspect_flags() {
        let cli = Cli::try_parse_from([
            "vista",
            "--config",
            "x.toml",
            "inspect",
            "s.json",
            "--format",
            "json",
            "--max-depth",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("x.toml")));
        match cli.command {
            Commands::Inspect {
                format, max_depth, ..
            } => {
                assert_eq!(format, Some(Format::Json));
                assert_eq!(max_depth, Some(2));
            }
            _ => panic!("expected inspect"),
        }
    }
}
