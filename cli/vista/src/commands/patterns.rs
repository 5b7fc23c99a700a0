//! `vista patterns`: the registry as a host would see it.

use anyhow::Result;
use vista_render::{announce, PatternInfo, Registry, RegistrationSink};

use crate::config::Format;

/// Collects announced patterns for printing.
#[derive(Debug, Default)]
pub struct PatternListing {
    collection: Option<String>,
    patterns: Vec<PatternInfo>,
}

impl RegistrationSink for PatternListing {
    fn is_registered(&self, collection: &str) -> bool {
        self.collection.as_deref() == Some(collection)
    }

    fn add_pattern(&mut self, collection: &str, pattern: &PatternInfo) {
        self.collection = Some(collection.to_string());
        self.patterns.push(pattern.clone());
    }
}

pub fn run(registry: &Registry, format: Format) -> Result<()> {
    let mut listing = PatternListing::default();
    announce(registry, &mut listing);

    match format {
        Format::Text => {
            let width = listing
                .patterns
                .iter()
                .map(|p| p.label.len())
                .max()
                .unwrap_or(0);
            for (i, info) in listing.patterns.iter().enumerate() {
                println!("{:>3}  {:<width$}  {}", i + 1, info.label, info.pattern);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&listing.patterns)?),
    }
    Ok(())
}
