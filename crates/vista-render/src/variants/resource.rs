//! Resource handles and their hashed keys.

use vista_core::{decode, Result, Value};

use crate::renderer::{Renderer, Target};

/// Bytes of a key digest that are shown.
pub const DIGEST_LEN: usize = 8;

/// `Resource<T, U>`: the key it refers to and its load state.
#[derive(Debug)]
pub struct ResourceRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_resource<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ResourceRenderer { target }))
}

impl Renderer for ResourceRenderer<'_> {
    fn kind(&self) -> &'static str {
        "resource"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!(
            "Resource key {} (state: {})",
            self.target.field_text("_key")?,
            self.target.field_text("_state")?
        ))
    }
}

/// `ResourceKey`: leading digest bytes in lowercase hex.
#[derive(Debug)]
pub struct ResourceKeyRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_key<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ResourceKeyRenderer { target }))
}

impl Renderer for ResourceKeyRenderer<'_> {
    fn kind(&self) -> &'static str {
        "resource-key"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let digest = self.target.value.field("_digest")?.raw_bytes()?;
        decode::hex_digest(&digest, DIGEST_LEN)
    }
}
