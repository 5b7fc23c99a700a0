//! Renderer trait and the lazy child sequence.

use vista_core::{Result, TypeSignature, Value};

use crate::registry::Registry;

/// Everything a renderer constructor gets to work with.
pub struct Target<'v> {
    /// The value being rendered.
    pub value: &'v dyn Value,
    /// The value's parsed, qualifier-free signature.
    pub signature: TypeSignature,
    /// Registry used to render nested fields.
    pub registry: &'v Registry,
}

impl<'v> Target<'v> {
    /// Render a named field the way the host would show it: through a
    /// matching renderer if one exists, otherwise with the host's own text.
    pub fn field_text(&self, name: &str) -> Result<String> {
        let field = self.value.field(name)?;
        self.registry.text_of(field.as_ref())
    }

    /// The value's type as displayed in descriptive text.
    pub fn type_text(&self) -> String {
        self.value.canonical_signature()
    }
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("value", &self.value)
            .field("signature", &self.signature.to_string())
            .finish()
    }
}

/// Turns one value into display text and, optionally, labelled children.
pub trait Renderer {
    /// Short name of this renderer variant.
    fn kind(&self) -> &'static str;

    /// The value this renderer is bound to.
    fn value(&self) -> &dyn Value;

    /// One descriptive line. Defaults to the value's type.
    fn to_text(&self) -> Result<String> {
        Ok(self.value().canonical_signature())
    }

    /// Number of children, known from the signature alone without reading
    /// the value. `None` for values without children.
    fn child_count(&self) -> Option<usize> {
        None
    }

    /// Child sequence, for structurally nested values.
    fn children(&self) -> Result<Option<Children<'_>>> {
        Ok(None)
    }

    /// Whether this is the catch-all renderer for unrecognised types.
    fn is_fallback(&self) -> bool {
        false
    }
}

/// The payload of a child entry.
#[derive(Debug)]
pub enum ChildValue {
    /// A host value, to be resolved again by the caller.
    Value(Box<dyn Value>),
    /// A value synthesized by the renderer (bit-vector bits).
    Bool(bool),
}

/// One labelled child. The label is known even when fetching fails.
#[derive(Debug)]
pub struct Child {
    /// `[0]`, `[1]`, … or a semantic name such as `left`.
    pub label: String,
    pub value: Result<ChildValue>,
}

/// Index label in brackets.
pub fn index_label(index: usize) -> String {
    format!("[{index}]")
}

/// A finite, size-known, non-restartable sequence of children.
///
/// Each entry is fetched from the host only when the iterator reaches it,
/// and a failure affects that entry alone.
pub struct Children<'a> {
    remaining: usize,
    label: Box<dyn Fn(usize) -> String + 'a>,
    fetch: Box<dyn FnMut(usize) -> Result<ChildValue> + 'a>,
    next_index: usize,
}

impl<'a> Children<'a> {
    /// `len` children, the `i`-th labelled `label(i)` and produced by
    /// `fetch(i)`.
    pub fn from_fn(
        len: usize,
        label: impl Fn(usize) -> String + 'a,
        fetch: impl FnMut(usize) -> Result<ChildValue> + 'a,
    ) -> Self {
        Self {
            remaining: len,
            label: Box::new(label),
            fetch: Box::new(fetch),
            next_index: 0,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = Child;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.next_index;
        self.next_index += 1;
        Some(Child {
            label: (self.label)(index),
            value: (self.fetch)(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl std::fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Children")
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_core::InspectError;

    #[test]
    fn children_are_lazy_and_sized() {
        let mut calls = Vec::new();
        {
            let mut children = Children::from_fn(3, index_label, |i| {
                calls.push(i);
                Ok(ChildValue::Bool(i % 2 == 0))
            });
            assert_eq!(children.len(), 3);
            let first = children.next().unwrap();
            assert_eq!(first.label, "[0]");
            assert!(matches!(first.value, Ok(ChildValue::Bool(true))));
            assert_eq!(children.len(), 2);
        }
        assert_eq!(calls, vec![0]);
    }

    #[test]
    fn a_failed_child_keeps_its_label() {
        let names = ["near", "far"];
        let children = Children::from_fn(
            2,
            |i| names[i].to_string(),
            |i| {
                if i == 1 {
                    Err(InspectError::decode("plane 1", "missing"))
                } else {
                    Ok(ChildValue::Bool(true))
                }
            },
        );
        let results: Vec<Child> = children.collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].value.is_ok());
        assert_eq!(results[1].label, "far");
        assert!(results[1].value.is_err());
    }

    #[test]
    fn exhausted_sequence_stays_exhausted() {
        let mut children = Children::from_fn(1, index_label, |_| Ok(ChildValue::Bool(false)));
        assert!(children.next().is_some());
        assert!(children.next().is_none());
        assert!(children.next().is_none());
    }
}
