//! `vista signature`: show how a type signature is parsed and matched.

use anyhow::{Context, Result};
use vista_core::{strip_qualifiers, Parameter, TypeSignature};
use vista_render::Registry;

/// Describe the parse and the first matching binding.
pub fn describe(registry: &Registry, raw: &str) -> Result<String> {
    let stripped = strip_qualifiers(raw);
    let signature = TypeSignature::parse(stripped).with_context(|| format!("parsing '{raw}'"))?;

    let mut out = String::new();
    out.push_str(&format!("name: {}\n", signature.name));
    for (i, param) in signature.parameters.iter().enumerate() {
        let kind = match param {
            Parameter::Integer(_) => "integer",
            Parameter::Type(_) => "type",
        };
        out.push_str(&format!("  [{i}] {kind}: {param}\n"));
    }
    match registry.binding_for(&signature) {
        Some(binding) => {
            let info = binding.info();
            out.push_str(&format!("renderer: {} ({})\n", info.label, info.pattern));
        }
        None => out.push_str("renderer: default\n"),
    }
    Ok(out)
}

pub fn run(registry: &Registry, raw: &str) -> Result<()> {
    print!("{}", describe(registry, raw)?);
    Ok(())
}
