//! `vista.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vista_render::{InspectOptions, Registry, Shape};

/// Name of the configuration file searched for upward from the working
/// directory.
pub const CONFIG_FILE: &str = "vista.toml";

/// Output format of the reporting commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// The top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VistaConfig {
    #[serde(default)]
    pub inspect: InspectConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Extra name patterns routed to builtin renderers.
    #[serde(default, rename = "alias")]
    pub aliases: Vec<AliasConfig>,
}

/// `[inspect]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_children")]
    pub max_children: usize,
    #[serde(default)]
    pub format: Format,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_children: default_max_children(),
            format: Format::default(),
        }
    }
}

fn default_max_depth() -> usize {
    InspectOptions::default().max_depth
}

fn default_max_children() -> usize {
    InspectOptions::default().max_children
}

/// `[log]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

/// One `[[alias]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Regular expression over the bare type name.
    pub pattern: String,
    /// Label of the builtin binding whose renderer is reused.
    pub renderer: String,
    /// Parameter shape (default: anything).
    #[serde(default = "default_shape")]
    pub shape: String,
}

fn default_shape() -> String {
    "...".to_string()
}

impl VistaConfig {
    /// Load from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for a `vista.toml`, parse and return
    /// it along with its path.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing vista.toml")
    }

    /// The builtin registry extended with the configured aliases.
    pub fn registry(&self) -> Result<Registry> {
        let mut registry = Registry::builtin();
        for alias in &self.aliases {
            let shape: Shape = alias
                .shape
                .parse()
                .with_context(|| format!("alias '{}'", alias.pattern))?;
            let label = alias.pattern.clone();
            registry
                .alias(label, &alias.pattern, shape, &alias.renderer)
                .with_context(|| format!("alias '{}'", alias.pattern))?;
        }
        Ok(registry)
    }

    /// Inspection limits, with command-line overrides applied.
    pub fn inspect_options(
        &self,
        max_depth: Option<usize>,
        max_children: Option<usize>,
    ) -> InspectOptions {
        InspectOptions {
            max_depth: max_depth.unwrap_or(self.inspect.max_depth),
            max_children: max_children.unwrap_or(self.inspect.max_children),
        }
    }
}
