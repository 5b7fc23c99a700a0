//! Axis-aligned ranges and view frusta.

use vista_core::{Result, Value};

use crate::renderer::{ChildValue, Children, Renderer, Target};

/// `Range<N, T>`, `Range2D<T>` and `Range3D<T>`.
#[derive(Debug)]
pub struct RangeRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_range<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(RangeRenderer { target }))
}

impl Renderer for RangeRenderer<'_> {
    fn kind(&self) -> &'static str {
        "range"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!(
            "Range (min: {}, max: {})",
            self.target.field_text("_min")?,
            self.target.field_text("_max")?
        ))
    }
}

/// Frustum planes in storage order.
pub const FRUSTUM_PLANES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// `Frustum<T>`: six clip planes, labelled by side. Keeps the default text.
#[derive(Debug)]
pub struct FrustumRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_frustum<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(FrustumRenderer { target }))
}

impl Renderer for FrustumRenderer<'_> {
    fn kind(&self) -> &'static str {
        "frustum"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn child_count(&self) -> Option<usize> {
        Some(FRUSTUM_PLANES.len())
    }

    fn children(&self) -> Result<Option<Children<'_>>> {
        let data = self.target.value.field("_data")?;
        Ok(Some(Children::from_fn(
            FRUSTUM_PLANES.len(),
            |i| FRUSTUM_PLANES[i].to_string(),
            move |i| data.element(i).map(ChildValue::Value),
        )))
    }
}

#[cfg(test)]
mod tests {
    use vista_core::Node;

    use crate::testing::{child_labels, child_texts, floats, text, vector3};

    #[test]
    fn range_renders_nested_corners() {
        let range = Node::new("Magnum::Math::Range3D<float>")
            .with_field("_min", vector3(["0", "0", "0"]))
            .with_field("_max", vector3(["1", "2", "3"]));
        assert_eq!(text(range), "Range (min: (0, 0, 0), max: (1, 2, 3))");
    }

    #[test]
    fn one_dimensional_range() {
        let range = Node::new("Magnum::Math::Range<1, int>")
            .with_field("_min", Node::scalar("int", "-4"))
            .with_field("_max", Node::scalar("int", "4"));
        assert_eq!(text(range), "Range (min: -4, max: 4)");
    }

    fn frustum() -> Node {
        let plane = |d: &str| {
            Node::new("Magnum::Math::Vector4<float>")
                .with_field("_data", floats(&["0", "0", "1", d]))
        };
        Node::new("Magnum::Math::Frustum<float>").with_field(
            "_data",
            Node::array(
                "Magnum::Math::Vector4<float> [6]",
                ["1", "2", "3", "4", "5", "6"].map(plane),
            ),
        )
    }

    #[test]
    fn frustum_keeps_default_text() {
        assert_eq!(text(frustum()), "Magnum::Math::Frustum<float>");
    }

    #[test]
    fn frustum_planes_in_fixed_order() {
        assert_eq!(
            child_labels(frustum()),
            vec!["left", "right", "bottom", "top", "near", "far"]
        );
        assert_eq!(child_texts(frustum())[5], "(0, 0, 1, 6)");
    }
}
