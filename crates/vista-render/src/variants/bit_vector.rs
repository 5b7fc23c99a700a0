//! Packed bit arrays.

use vista_core::{decode, Result, Value};

use super::count_param;
use crate::renderer::{index_label, ChildValue, Children, Renderer, Target};

/// `BitVector<N>`: `N` bits packed eight per byte in `_data`, least
/// significant bit first.
#[derive(Debug)]
pub struct BitVectorRenderer<'v> {
    target: Target<'v>,
    size: usize,
}

pub fn construct<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    let size = count_param(&target.signature, 0, "bit count")?;
    Ok(Box::new(BitVectorRenderer { target, size }))
}

impl Renderer for BitVectorRenderer<'_> {
    fn kind(&self) -> &'static str {
        "bit-vector"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(format!("BitVector of size {}", self.size))
    }

    fn child_count(&self) -> Option<usize> {
        Some(self.size)
    }

    fn children(&self) -> Result<Option<Children<'_>>> {
        let bytes = self.target.value.field("_data")?.raw_bytes()?;
        let expected = decode::packed_len(self.size);
        if bytes.len() < expected {
            tracing::debug!(
                have = bytes.len(),
                expected,
                "bit storage shorter than declared size"
            );
        }
        Ok(Some(Children::from_fn(self.size, index_label, move |i| {
            decode::bit(&bytes, i).map(ChildValue::Bool)
        })))
    }
}

#[cfg(test)]
mod tests {
    use vista_core::Node;

    use crate::registry::registry;
    use crate::renderer::ChildValue;
    use crate::testing::{child_texts, text, value};

    fn bits(size: usize, bytes: &[u8]) -> Node {
        let storage = Node::new(format!("unsigned char [{}]", bytes.len()))
            .with_bytes(bytes);
        Node::new(format!("Magnum::Math::BitVector<{size}>"))
            .with_field("_data", storage)
    }

    #[test]
    fn size_from_parameter() {
        assert_eq!(text(bits(10, &[0b101, 0])), "BitVector of size 10");
    }

    #[test]
    fn bits_are_lsb_first() {
        let texts = child_texts(bits(10, &[0b0000_0101, 0b0000_0010]));
        assert_eq!(texts.len(), 10);
        assert_eq!(&texts[..3], &["true", "false", "true"]);
        assert_eq!(texts[8], "false");
        assert_eq!(texts[9], "true");
    }

    #[test]
    fn bits_beyond_storage_fail_individually() {
        let v = value(bits(10, &[0xFF]));
        let renderer = registry().resolve(&v);
        let children: Vec<_> = renderer.children().unwrap().unwrap().collect();
        assert_eq!(children.len(), 10);
        assert!(children[..8]
            .iter()
            .all(|c| matches!(c.value, Ok(ChildValue::Bool(true)))));
        assert_eq!(children[8].label, "[8]");
        assert!(children[8].value.is_err());
        assert!(children[9].value.is_err());
    }

    #[test]
    fn bytes_gathered_from_elements() {
        let node = Node::new("Magnum::Math::BitVector<3>").with_field(
            "_data",
            Node::array(
                "unsigned char [1]",
                [Node::new("unsigned char").with_bytes([0b110])],
            ),
        );
        assert_eq!(child_texts(node), vec!["false", "true", "true"]);
    }
}
