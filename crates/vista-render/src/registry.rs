//! Ordered pattern → renderer bindings.
//!
//! Bindings are scanned in registration order and the first whose name
//! pattern and parameter shape both match wins, so a specific binding must be
//! registered before a broader one that would shadow it.

use std::sync::OnceLock;

use serde::Serialize;
use vista_core::{Result, TypeSignature, Value};

use crate::error::RenderError;
use crate::pattern::{NamePattern, ParamKind, Shape, Tail};
use crate::renderer::{Renderer, Target};
use crate::variants::{
    animation, bit_vector, complex, curve, fallback::DefaultRenderer, geometry, image, matrix,
    resource, scalar, vector,
};

/// Namespace of every builtin pattern.
pub const NAMESPACE: &str = "Magnum";

/// Builds a renderer for a matched value.
pub type Construct = for<'v> fn(Target<'v>) -> Result<Box<dyn Renderer + 'v>>;

/// A name pattern and shape bound to a renderer constructor.
#[derive(Clone)]
pub struct Binding {
    /// Human-readable label, unique within a registry.
    pub label: String,
    pub name: NamePattern,
    pub shape: Shape,
    construct: Construct,
}

impl Binding {
    pub fn matches(&self, signature: &TypeSignature) -> bool {
        self.name.matches(&signature.name) && self.shape.matches(signature)
    }

    pub fn info(&self) -> PatternInfo {
        let shape = self.shape.to_string();
        let pattern = if shape.is_empty() {
            self.name.to_string()
        } else {
            format!("{}<{shape}>", self.name)
        };
        PatternInfo {
            label: self.label.clone(),
            pattern,
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("label", &self.label)
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Description of a binding as announced to a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub label: String,
    pub pattern: String,
}

/// An ordered collection of bindings.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    bindings: Vec<Binding>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        name: NamePattern,
        shape: Shape,
        construct: Construct,
    ) -> &mut Self {
        self.bindings.push(Binding {
            label: label.into(),
            name,
            shape,
            construct,
        });
        self
    }

    /// Append a binding that reuses the renderer of the binding labelled
    /// `target` for names matching the regular expression `pattern`.
    pub fn alias(
        &mut self,
        label: impl Into<String>,
        pattern: &str,
        shape: Shape,
        target: &str,
    ) -> std::result::Result<&mut Self, RenderError> {
        let construct = self
            .bindings
            .iter()
            .find(|b| b.label == target)
            .map(|b| b.construct)
            .ok_or_else(|| RenderError::UnknownBinding {
                label: target.to_string(),
            })?;
        let name = NamePattern::regex(pattern)?;
        Ok(self.register(label, name, shape, construct))
    }

    /// All bindings, in registration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The first binding matching a parsed signature.
    pub fn binding_for(&self, signature: &TypeSignature) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.matches(signature))
    }

    /// Construct the renderer of the first matching binding, if any.
    ///
    /// Unparsable signatures and constructor failures count as "no match".
    pub fn find<'v>(&'v self, value: &'v dyn Value) -> Option<Box<dyn Renderer + 'v>> {
        let raw = value.canonical_signature();
        let signature = match TypeSignature::parse(&raw) {
            Ok(signature) => signature,
            Err(e) => {
                tracing::debug!("signature not parsed, using fallback: {e}");
                return None;
            }
        };

        let binding = self.binding_for(&signature)?;
        tracing::debug!(binding = %binding.label, signature = %raw, "resolved renderer");
        let target = Target {
            value,
            signature,
            registry: self,
        };
        match (binding.construct)(target) {
            Ok(renderer) => Some(renderer),
            Err(e) => {
                tracing::warn!(binding = %binding.label, "renderer construction failed: {e}");
                None
            }
        }
    }

    /// Like [`Registry::find`], but never fails: unmatched values get a
    /// renderer that prints only their type.
    pub fn resolve<'v>(&'v self, value: &'v dyn Value) -> Box<dyn Renderer + 'v> {
        match self.find(value) {
            Some(renderer) => renderer,
            None => Box::new(DefaultRenderer::new(value)),
        }
    }

    /// Text of a value as a host would print it: the matching renderer's
    /// text, or the host's own rendering if nothing matches.
    pub fn text_of(&self, value: &dyn Value) -> Result<String> {
        match self.find(value) {
            Some(renderer) => renderer.to_text(),
            None => Ok(value.to_text()),
        }
    }

    /// The builtin catalogue. Every label is its name below [`NAMESPACE`].
    pub fn builtin() -> Self {
        let mut registry = Registry::new();
        let int = ParamKind::Integer;
        let none = Shape::none();
        let some = Shape::some();
        let images = Shape::new(vec![int], Tail::Any);
        let bits = Shape::new(vec![int], Tail::Exact);
        let pair = Shape::new(vec![ParamKind::Any; 2], Tail::Any);
        let rank = Shape::integers_then_some;
        let mut add = |label: &str, shape: &Shape, construct: Construct| {
            let name = NamePattern::exact(format!("{NAMESPACE}::{label}"));
            registry.register(label, name, shape.clone(), construct);
        };

        add("CompressedImage", &images, image::construct);
        add("CompressedImageView", &images, image::construct);
        add("Image", &images, image::construct);
        add("ImageView", &images, image::construct);
        add("Resource", &pair, resource::construct_resource);
        add("ResourceKey", &none, resource::construct_key);
        add("Timeline", &none, animation::construct_timeline);
        add("Animation::Track", &some, animation::construct_track);
        add("Math::Bezier", &rank(2), curve::construct_bezier);
        add("Math::BitVector", &bits, bit_vector::construct);
        add("Math::Color3", &some, vector::construct);
        add("Math::Color4", &some, vector::construct);
        add("Math::Complex", &some, complex::construct_complex);
        add("Math::CubicHermite", &some, curve::construct_cubic_hermite);
        add("Math::Deg", &some, scalar::construct_unit);
        add("Math::DualComplex", &some, complex::construct_dual);
        add("Math::DualQuaternion", &some, complex::construct_dual);
        add("Math::Frustum", &some, geometry::construct_frustum);
        add("Math::Half", &none, scalar::construct_half);
        add("Math::Matrix", &rank(1), matrix::construct);
        add("Math::Matrix3", &some, matrix::construct);
        add("Math::Matrix4", &some, matrix::construct);
        add("Math::Quaternion", &some, complex::construct_quaternion);
        add("Math::Rad", &some, scalar::construct_unit);
        add("Math::Range", &rank(1), geometry::construct_range);
        add("Math::Range2D", &some, geometry::construct_range);
        add("Math::Range3D", &some, geometry::construct_range);
        add("Math::RectangularMatrix", &rank(2), matrix::construct);
        add("Math::Unit", &some, scalar::construct_unit);
        add("Math::Vector", &rank(1), vector::construct);
        add("Math::Vector2", &some, vector::construct);
        add("Math::Vector3", &some, vector::construct);
        add("Math::Vector4", &some, vector::construct);

        registry
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide builtin registry, built on first use.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::builtin)
}
