//! Square and rectangular matrices, stored as an array of column vectors.

use vista_core::{Result, Value};

use super::{count_param, name_count};
use crate::renderer::{index_label, ChildValue, Children, Renderer, Target};

#[derive(Debug)]
pub struct MatrixRenderer<'v> {
    target: Target<'v>,
    rows: usize,
    columns: usize,
}

/// `Matrix<N, T>`, `Matrix3/4<T>` and `RectangularMatrix<R, C, T>`.
///
/// Rows come from the first integer parameter, or the digit in the name when
/// there is none. Columns come from a second integer parameter, which only
/// the rectangular form has; otherwise the matrix is square.
pub fn construct<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    let signature = &target.signature;
    let rows = if signature.integer(0).is_some() {
        count_param(signature, 0, "row count")?
    } else {
        name_count(signature, "row count")?
    };
    let columns = match signature.integer(1) {
        Some(_) => count_param(signature, 1, "column count")?,
        None => rows,
    };
    Ok(Box::new(MatrixRenderer {
        target,
        rows,
        columns,
    }))
}

impl Renderer for MatrixRenderer<'_> {
    fn kind(&self) -> &'static str {
        "matrix"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!(
            "Matrix with {} rows and {} columns",
            self.rows, self.columns
        ))
    }

    fn child_count(&self) -> Option<usize> {
        Some(self.rows)
    }

    fn children(&self) -> Result<Option<Children<'_>>> {
        let data = self.target.value.field("_data")?;
        Ok(Some(Children::from_fn(self.rows, index_label, move |row| {
            data.element(row).map(ChildValue::Value)
        })))
    }
}

#[cfg(test)]
mod tests {
    use vista_core::Node;

    use crate::registry::registry;
    use crate::testing::{child_labels, child_texts, floats, text, value};

    fn column(components: &[&str]) -> Node {
        Node::new(format!("Magnum::Math::Vector<{}, float>", components.len()))
            .with_field("_data", floats(components))
    }

    fn rectangular() -> Node {
        Node::new("Magnum::Math::RectangularMatrix<2, 3, float>").with_field(
            "_data",
            Node::array(
                "Magnum::Math::Vector<3, float> [2]",
                [column(&["1", "2", "3"]), column(&["4", "5", "6"])],
            ),
        )
    }

    #[test]
    fn rectangular_rows_and_columns() {
        assert_eq!(text(rectangular()), "Matrix with 2 rows and 3 columns");
        assert_eq!(child_labels(rectangular()), vec!["[0]", "[1]"]);
    }

    #[test]
    fn rows_render_through_the_registry() {
        assert_eq!(child_texts(rectangular()), vec!["(1, 2, 3)", "(4, 5, 6)"]);
    }

    #[test]
    fn square_matrix_from_name_digit() {
        let m = Node::new("Magnum::Math::Matrix3<float>");
        assert_eq!(text(m), "Matrix with 3 rows and 3 columns");
    }

    #[test]
    fn generic_square_matrix() {
        let m = Node::new("Magnum::Math::Matrix<4, double>");
        assert_eq!(text(m), "Matrix with 4 rows and 4 columns");
    }

    #[test]
    fn children_without_storage_fail() {
        let v = value(Node::new("Magnum::Math::Matrix4<float>"));
        let renderer = registry().resolve(&v);
        assert_eq!(renderer.kind(), "matrix");
        assert!(renderer.children().is_err());
    }

    #[test]
    fn a_missing_row_fails_alone() {
        let node = Node::new("Magnum::Math::Matrix<2, float>").with_field(
            "_data",
            Node::array("Magnum::Math::Vector<2, float> [1]", [column(&["1", "2"])]),
        );
        let v = value(node);
        let renderer = registry().resolve(&v);
        assert_eq!(renderer.child_count(), Some(2));
        let rows: Vec<_> = renderer.children().unwrap().unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].value.is_ok());
        assert_eq!(rows[1].label, "[1]");
        assert!(rows[1].value.is_err());
    }
}
