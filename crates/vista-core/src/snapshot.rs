//! In-memory value host backed by a JSON snapshot.
//!
//! A snapshot captures a value tree as a debugger would expose it: every node
//! carries its type signature, and optionally the host's textual rendering,
//! its raw bytes, named fields and indexed elements.
//!
//! ```json
//! {
//!   "byte_order": "little",
//!   "root": {
//!     "type": "Magnum::Math::Vector3<float>",
//!     "fields": [
//!       { "name": "_data", "type": "float [3]",
//!         "elements": [{ "type": "float", "text": "1" },
//!                      { "type": "float", "text": "2" },
//!                      { "type": "float", "text": "3" }] }
//!     ]
//!   }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{InspectError, Result};
use crate::value::{ByteOrder, Value};

/// A captured value tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Byte order of the captured program.
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// The inspected value.
    pub root: Node,
}

impl Snapshot {
    pub fn new(byte_order: ByteOrder, root: Node) -> Self {
        Self { byte_order, root }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A host handle to the root value.
    pub fn root_value(&self) -> SnapshotValue {
        SnapshotValue::new(self.root.clone(), self.byte_order)
    }
}

/// One value in a snapshot tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Type signature as the host prints it.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Host rendering of a scalar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Raw object representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u8>>,
    /// Named fields, in layout order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Array elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Node>,
}

/// A named field of a [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(flatten)]
    pub node: Node,
}

impl Node {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// A scalar with a host rendering.
    pub fn scalar(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(type_name).with_text(text)
    }

    /// An array of elements.
    pub fn array(type_name: impl Into<String>, elements: impl IntoIterator<Item = Node>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            ..Self::new(type_name)
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = Some(bytes.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, node: Node) -> Self {
        self.fields.push(Field {
            name: name.into(),
            node,
        });
        self
    }

    fn collect_bytes(&self) -> Option<Vec<u8>> {
        if let Some(bytes) = &self.bytes {
            return Some(bytes.clone());
        }
        let parts: Vec<&Node> = if !self.elements.is_empty() {
            self.elements.iter().collect()
        } else if !self.fields.is_empty() {
            self.fields.iter().map(|f| &f.node).collect()
        } else {
            return None;
        };
        let mut out = Vec::new();
        for part in parts {
            out.extend(part.collect_bytes()?);
        }
        Some(out)
    }

    fn render_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        if !self.elements.is_empty() {
            let items: Vec<String> = self.elements.iter().map(Node::render_text).collect();
            return format!("{{{}}}", items.join(", "));
        }
        if !self.fields.is_empty() {
            let items: Vec<String> = self
                .fields
                .iter()
                .map(|f| format!("{} = {}", f.name, f.node.render_text()))
                .collect();
            return format!("{{{}}}", items.join(", "));
        }
        match &self.bytes {
            Some(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
                format!("0x{hex}")
            }
            None => "{}".to_string(),
        }
    }
}

/// One step from a node to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Field(usize),
    Element(usize),
}

/// A [`Value`] handle into a snapshot tree.
///
/// Handles share the tree and address their node by the path from the root,
/// so descending never copies a subtree.
#[derive(Debug, Clone)]
pub struct SnapshotValue {
    root: Arc<Node>,
    path: Vec<Step>,
    byte_order: ByteOrder,
}

impl SnapshotValue {
    pub fn new(node: Node, byte_order: ByteOrder) -> Self {
        Self {
            root: Arc::new(node),
            path: Vec::new(),
            byte_order,
        }
    }

    fn node(&self) -> &Node {
        self.path.iter().fold(&*self.root, |node, step| match *step {
            Step::Field(i) => &node.fields[i].node,
            Step::Element(i) => &node.elements[i],
        })
    }

    fn child(&self, step: Step) -> Box<dyn Value> {
        let mut path = self.path.clone();
        path.push(step);
        Box::new(SnapshotValue {
            root: Arc::clone(&self.root),
            path,
            byte_order: self.byte_order,
        })
    }
}

impl Value for SnapshotValue {
    fn type_signature(&self) -> String {
        self.node().type_name.clone()
    }

    fn field(&self, name: &str) -> Result<Box<dyn Value>> {
        let node = self.node();
        match node.fields.iter().position(|f| f.name == name) {
            Some(i) => Ok(self.child(Step::Field(i))),
            None => Err(InspectError::FieldAccess {
                signature: node.type_name.clone(),
                field: name.to_string(),
            }),
        }
    }

    fn element(&self, index: usize) -> Result<Box<dyn Value>> {
        let node = self.node();
        if index < node.elements.len() {
            Ok(self.child(Step::Element(index)))
        } else {
            Err(InspectError::IndexOutOfRange {
                signature: node.type_name.clone(),
                index,
                len: node.elements.len(),
            })
        }
    }

    fn raw_bytes(&self) -> Result<Vec<u8>> {
        let node = self.node();
        node.collect_bytes().ok_or_else(|| {
            InspectError::decode(
                format!("raw bytes of '{}'", node.type_name),
                "value has no byte representation",
            )
        })
    }

    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn to_text(&self) -> String {
        self.node().render_text()
    }

    fn field_names(&self) -> Vec<String> {
        self.node().fields.iter().map(|f| f.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector3() -> Node {
        Node::new("const Magnum::Math::Vector3<float> &").with_field(
            "_data",
            Node::array(
                "float [3]",
                ["1", "2.5", "-3"].map(|t| Node::scalar("float", t)),
            ),
        )
    }

    #[test]
    fn field_and_element_access() {
        let value = SnapshotValue::new(vector3(), ByteOrder::Little);
        assert_eq!(value.canonical_signature(), "Magnum::Math::Vector3<float>");
        let data = value.field("_data").unwrap();
        assert_eq!(data.element(1).unwrap().to_text(), "2.5");
        assert_eq!(value.field_names(), vec!["_data".to_string()]);
    }

    #[test]
    fn missing_field_and_index() {
        let value = SnapshotValue::new(vector3(), ByteOrder::Little);
        assert!(matches!(
            value.field("_missing").unwrap_err(),
            InspectError::FieldAccess { .. }
        ));
        let data = value.field("_data").unwrap();
        assert!(matches!(
            data.element(3).unwrap_err(),
            InspectError::IndexOutOfRange { index: 3, len: 3, .. }
        ));
    }

    #[test]
    fn aggregate_text() {
        let value = SnapshotValue::new(vector3(), ByteOrder::Little);
        assert_eq!(value.to_text(), "{_data = {1, 2.5, -3}}");
    }

    #[test]
    fn raw_bytes_concatenate_elements() {
        let byte = |b: u8| Node::new("unsigned char").with_bytes([b]);
        let node = Node::array("unsigned char [2]", [byte(0x05), byte(0x02)]);
        let value = SnapshotValue::new(node, ByteOrder::Big);
        assert_eq!(value.raw_bytes().unwrap(), vec![0x05, 0x02]);
        assert_eq!(value.read_uint(2).unwrap(), 0x0502);
    }

    #[test]
    fn children_share_the_tree() {
        let value = SnapshotValue::new(vector3(), ByteOrder::Little);
        let data = value.field("_data").unwrap();
        let third = data.element(2).unwrap();
        assert_eq!(third.to_text(), "-3");

        let child = SnapshotValue {
            root: Arc::clone(&value.root),
            path: vec![Step::Field(0), Step::Element(2)],
            byte_order: value.byte_order,
        };
        assert!(Arc::ptr_eq(&child.root, &value.root));
        assert_eq!(child.to_text(), third.to_text());
        assert_eq!(Arc::strong_count(&value.root), 4);
    }

    #[test]
    fn built_snapshot_serializes() {
        let snapshot = Snapshot::new(ByteOrder::Big, Node::scalar("int", "4"));
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"byte_order\": \"big\""));
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn raw_bytes_missing() {
        let value = SnapshotValue::new(Node::scalar("float", "1"), ByteOrder::Little);
        assert!(value.raw_bytes().is_err());
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "byte_order": "big",
            "root": {
                "type": "Magnum::Math::Half",
                "fields": [
                    { "name": "_data", "type": "unsigned short", "bytes": [60, 0] }
                ]
            }
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.byte_order, ByteOrder::Big);
        let half = snapshot.root_value().field("_data").unwrap();
        assert_eq!(half.read_uint(2).unwrap(), 0x3C00);

        let reparsed = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, snapshot);
    }

    #[test]
    fn byte_order_defaults_to_little() {
        let json = r#"{ "root": { "type": "int", "text": "4" } }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.byte_order, ByteOrder::Little);
        assert_eq!(snapshot.root_value().to_text(), "4");
    }
}
