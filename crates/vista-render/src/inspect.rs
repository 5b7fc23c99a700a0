//! Recursive inspection: resolve a value, then every child it exposes.
//!
//! This is the host side of dispatch. Renderers only hand back raw child
//! values; the inspector resubmits each one to the registry, so nesting of
//! any depth composes without the variants knowing about each other.

use serde::Serialize;
use vista_core::Value;

use crate::registry::Registry;
use crate::renderer::{ChildValue, Renderer};

/// Limits applied while walking a value tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Nodes at this depth are not expanded.
    pub max_depth: usize,
    /// Children past this count are not fetched.
    pub max_children: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_children: 256,
        }
    }
}

/// One inspected value and its rendered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub label: String,
    /// Renderer variant that produced this node.
    pub kind: String,
    /// The value's type as reported by the host.
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Failure while rendering this node only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Rendered>,
    /// Set when depth or child limits cut this node short.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl Rendered {
    fn new(label: String, kind: &str, signature: String) -> Self {
        Self {
            label,
            kind: kind.to_string(),
            signature,
            text: None,
            error: None,
            children: Vec::new(),
            truncated: false,
        }
    }

    fn record_error(&mut self, error: impl std::fmt::Display) {
        let message = error.to_string();
        self.error = Some(match self.error.take() {
            Some(previous) => format!("{previous}; {message}"),
            None => message,
        });
    }

    /// The direct child with `label`.
    pub fn child(&self, label: &str) -> Option<&Rendered> {
        self.children.iter().find(|c| c.label == label)
    }

    fn write_tree(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        write!(f, "{pad}{} = ", self.label)?;
        match (&self.text, &self.error) {
            (Some(text), Some(error)) => writeln!(f, "{text} <error: {error}>")?,
            (Some(text), None) => writeln!(f, "{text}")?,
            (None, Some(error)) => writeln!(f, "<error: {error}>")?,
            (None, None) => writeln!(f, "{}", self.signature)?,
        }
        for child in &self.children {
            child.write_tree(f, indent + 1)?;
        }
        if self.truncated {
            writeln!(f, "{pad}  ...")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_tree(f, 0)
    }
}

/// Walks values through a registry.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'r> {
    registry: &'r Registry,
    options: InspectOptions,
}

impl<'r> Inspector<'r> {
    pub fn new(registry: &'r Registry, options: InspectOptions) -> Self {
        Self { registry, options }
    }

    /// Render `value` and, within the configured limits, its children.
    pub fn inspect(&self, label: &str, value: &dyn Value) -> Rendered {
        self.visit(label.to_string(), value, 0)
    }

    fn visit(&self, label: String, value: &dyn Value, depth: usize) -> Rendered {
        let renderer = self.registry.resolve(value);
        let mut node = Rendered::new(label, renderer.kind(), value.type_signature());
        if renderer.is_fallback() {
            self.visit_plain(&mut node, value, depth);
        } else {
            self.visit_rendered(&mut node, renderer.as_ref(), depth);
        }
        node
    }

    /// Unrecognised values show the host's own text and their fields.
    fn visit_plain(&self, node: &mut Rendered, value: &dyn Value, depth: usize) {
        node.text = Some(value.to_text());
        let names = value.field_names();
        if names.is_empty() {
            return;
        }
        if depth >= self.options.max_depth {
            node.truncated = true;
            return;
        }
        for (i, name) in names.into_iter().enumerate() {
            if i == self.options.max_children {
                node.truncated = true;
                break;
            }
            match value.field(&name) {
                Ok(field) => node.children.push(self.visit(name, field.as_ref(), depth + 1)),
                Err(e) => node.children.push(failed(name, e)),
            }
        }
    }

    fn visit_rendered(&self, node: &mut Rendered, renderer: &dyn Renderer, depth: usize) {
        match renderer.to_text() {
            Ok(text) => node.text = Some(text),
            Err(e) => {
                tracing::debug!(label = %node.label, "text failed: {e}");
                node.record_error(e);
            }
        }

        let Some(count) = renderer.child_count() else {
            return;
        };
        if depth >= self.options.max_depth {
            node.truncated = count > 0;
            return;
        }

        let mut children = match renderer.children() {
            Ok(Some(children)) => children,
            Ok(None) => return,
            Err(e) => {
                tracing::debug!(label = %node.label, "children failed: {e}");
                node.record_error(e);
                return;
            }
        };
        for child in children.by_ref().take(self.options.max_children) {
            let rendered = match child.value {
                Ok(ChildValue::Value(value)) => self.visit(child.label, value.as_ref(), depth + 1),
                Ok(ChildValue::Bool(bit)) => {
                    let mut leaf = Rendered::new(child.label, "bool", "bool".to_string());
                    leaf.text = Some(bit.to_string());
                    leaf
                }
                Err(e) => failed(child.label, e),
            };
            node.children.push(rendered);
        }
        node.truncated = children.len() > 0;
    }
}

fn failed(label: String, error: vista_core::InspectError) -> Rendered {
    tracing::debug!(%label, "child failed: {error}");
    let mut node = Rendered::new(label, "error", String::new());
    node.record_error(error);
    node
}
