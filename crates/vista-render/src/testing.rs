//! Snapshot builders shared by the renderer tests.

use vista_core::{ByteOrder, Node, SnapshotValue};

use crate::registry::registry;
use crate::renderer::ChildValue;

pub(crate) fn value(node: Node) -> SnapshotValue {
    SnapshotValue::new(node, ByteOrder::Little)
}

/// A `float [N]` array with the given host texts.
pub(crate) fn floats(texts: &[&str]) -> Node {
    Node::array(
        format!("float [{}]", texts.len()),
        texts.iter().map(|t| Node::scalar("float", *t)),
    )
}

pub(crate) fn vector3(components: [&str; 3]) -> Node {
    Node::new("Magnum::Math::Vector3<float>").with_field("_data", floats(&components))
}

/// Text of `node` as rendered through the builtin registry.
pub(crate) fn text(node: Node) -> String {
    let v = value(node);
    let text = registry().resolve(&v).to_text().unwrap();
    text
}

/// Labels of every child of `node`, in order.
pub(crate) fn child_labels(node: Node) -> Vec<String> {
    let v = value(node);
    let renderer = registry().resolve(&v);
    let children = renderer.children().unwrap().expect("renderer has children");
    let labels = children.map(|c| c.label).collect();
    labels
}

/// Host text of each child value, or `true`/`false` for synthesized bits.
pub(crate) fn child_texts(node: Node) -> Vec<String> {
    let v = value(node);
    let renderer = registry().resolve(&v);
    let children = renderer.children().unwrap().expect("renderer has children");
    let texts = children
        .map(|c| match c.value.unwrap() {
            ChildValue::Value(child) => registry().text_of(child.as_ref()).unwrap(),
            ChildValue::Bool(bit) => bit.to_string(),
        })
        .collect();
    texts
}
