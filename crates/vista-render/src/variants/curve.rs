//! Bézier and cubic Hermite curves.

use vista_core::{Result, Value};

use super::count_param;
use crate::renderer::{index_label, ChildValue, Children, Renderer, Target};

/// `Bezier<K, D, T>`: a curve of order `K` in `D` dimensions, with `K + 1`
/// control points in `_data`.
#[derive(Debug)]
pub struct BezierRenderer<'v> {
    target: Target<'v>,
    order: usize,
    dimensions: usize,
}

pub fn construct_bezier<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    let order = count_param(&target.signature, 0, "curve order")?;
    let dimensions = count_param(&target.signature, 1, "dimension")?;
    Ok(Box::new(BezierRenderer {
        target,
        order,
        dimensions,
    }))
}

impl Renderer for BezierRenderer<'_> {
    fn kind(&self) -> &'static str {
        "bezier"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!(
            "{}-order, {}-dimensional Bézier curve",
            self.order, self.dimensions
        ))
    }

    fn child_count(&self) -> Option<usize> {
        Some(self.order + 1)
    }

    fn children(&self) -> Result<Option<Children<'_>>> {
        let data = self.target.value.field("_data")?;
        Ok(Some(Children::from_fn(self.order + 1, index_label, move |i| {
            data.element(i).map(ChildValue::Value)
        })))
    }
}

/// `CubicHermite<T>`: a spline point with its two tangents.
#[derive(Debug)]
pub struct CubicHermiteRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_cubic_hermite<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(CubicHermiteRenderer { target }))
}

impl Renderer for CubicHermiteRenderer<'_> {
    fn kind(&self) -> &'static str {
        "cubic-hermite"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let t = &self.target;
        Ok(format!(
            "Cubic Hermite curve with spline point {}, in-tangent {}, and out-tangent {}",
            t.field_text("_point")?,
            t.field_text("_inTangent")?,
            t.field_text("_outTangent")?
        ))
    }
}
