//! Images and image views, compressed or not.

use vista_core::{Result, Value};

use crate::renderer::{Renderer, Target};

#[derive(Debug)]
pub struct ImageRenderer<'v> {
    target: Target<'v>,
}

pub fn construct<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ImageRenderer { target }))
}

impl Renderer for ImageRenderer<'_> {
    fn kind(&self) -> &'static str {
        "image"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!(
            "{} of size {} and format {}",
            self.target.type_text(),
            self.target.field_text("_size")?,
            self.target.field_text("_format")?
        ))
    }
}
