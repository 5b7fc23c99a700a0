//! `vista inspect`: render a snapshot file.

use std::path::Path;

use anyhow::{Context, Result};
use vista_core::Snapshot;
use vista_render::{InspectOptions, Inspector, Registry, Rendered};

use crate::config::Format;

/// Load `path` and render its root value.
pub fn render(
    registry: &Registry,
    path: &Path,
    label: &str,
    options: InspectOptions,
) -> Result<Rendered> {
    let snapshot = Snapshot::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let root = snapshot.root_value();
    Ok(Inspector::new(registry, options).inspect(label, &root))
}

pub fn run(
    registry: &Registry,
    path: &Path,
    label: &str,
    options: InspectOptions,
    format: Format,
) -> Result<()> {
    let rendered = render(registry, path, label, options)?;
    match format {
        Format::Text => print!("{rendered}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
    }
    Ok(())
}
