//! Catch-all renderer for values no binding recognises.

use vista_core::Value;

use crate::renderer::Renderer;

/// Prints only the value's type; has no children.
#[derive(Debug)]
pub struct DefaultRenderer<'v> {
    value: &'v dyn Value,
}

impl<'v> DefaultRenderer<'v> {
    pub fn new(value: &'v dyn Value) -> Self {
        Self { value }
    }
}

impl Renderer for DefaultRenderer<'_> {
    fn kind(&self) -> &'static str {
        "default"
    }

    fn value(&self) -> &dyn Value {
        self.value
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
