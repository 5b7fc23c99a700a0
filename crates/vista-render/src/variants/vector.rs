//! Fixed-size vectors and colors.

use vista_core::{Result, Value};

use super::{count_param, name_count};
use crate::renderer::{Renderer, Target};

/// `Vector2/3/4`, `Color3/4` and the generic `Vector<N, T>`.
#[derive(Debug)]
pub struct VectorRenderer<'v> {
    target: Target<'v>,
    dimensions: usize,
}

pub fn construct<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    let dimensions = match name_count(&target.signature, "dimension") {
        Ok(n) => n,
        Err(_) => count_param(&target.signature, 0, "dimension")?,
    };
    Ok(Box::new(VectorRenderer { target, dimensions }))
}

impl Renderer for VectorRenderer<'_> {
    fn kind(&self) -> &'static str {
        "vector"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let data = self.target.value.field("_data")?;
        let components = (0..self.dimensions)
            .map(|i| {
                let component = data.element(i)?;
                self.target.registry.text_of(component.as_ref())
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", components.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use vista_core::Node;

    use crate::registry::registry;
    use crate::testing::{floats, text, value, vector3};

    #[test]
    fn vector3_components() {
        assert_eq!(text(vector3(["1", "2.5", "-3"])), "(1, 2.5, -3)");
    }

    #[test]
    fn color_uses_name_digit() {
        let color = Node::new("Magnum::Math::Color4<float>")
            .with_field("_data", floats(&["0.5", "0.25", "0", "1"]));
        assert_eq!(text(color), "(0.5, 0.25, 0, 1)");
    }

    #[test]
    fn generic_vector_uses_first_parameter() {
        let v = Node::new("Magnum::Math::Vector<5, float>")
            .with_field("_data", floats(&["1", "2", "3", "4", "5"]));
        assert_eq!(text(v), "(1, 2, 3, 4, 5)");
    }

    #[test]
    fn extra_storage_is_ignored() {
        let v = Node::new("Magnum::Math::Vector2<int>")
            .with_field("_data", floats(&["7", "8", "9"]));
        assert_eq!(text(v), "(7, 8)");
    }

    #[test]
    fn short_storage_fails_this_value_only() {
        let v = value(
            Node::new("Magnum::Math::Vector4<float>").with_field("_data", floats(&["1", "2"])),
        );
        let err = registry().resolve(&v).to_text().unwrap_err();
        assert!(matches!(
            err,
            vista_core::InspectError::IndexOutOfRange { index: 2, .. }
        ));
    }

    #[test]
    fn negative_dimension_falls_back() {
        let v = value(Node::new("Magnum::Math::Vector<-1, float>"));
        assert!(registry().resolve(&v).is_fallback());
    }
}
