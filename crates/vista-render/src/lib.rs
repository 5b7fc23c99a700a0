//! Renderers for debugger values.
//!
//! A [`Registry`] maps type signatures to [`Renderer`]s through an ordered
//! list of name patterns and parameter shapes. Renderers produce a one-line
//! description and, for nested types, a lazy sequence of labelled children
//! which the [`Inspector`] resolves again through the same registry.

pub mod error;
pub mod host;
pub mod inspect;
pub mod pattern;
pub mod registry;
pub mod renderer;
pub mod variants;

#[cfg(test)]
pub(crate) mod testing;

pub use error::RenderError;
pub use host::{announce, register_all, RegistrationSink, COLLECTION};
pub use inspect::{InspectOptions, Inspector, Rendered};
pub use pattern::{NamePattern, ParamKind, Shape, Tail};
pub use registry::{registry, Binding, Construct, PatternInfo, Registry, NAMESPACE};
pub use renderer::{Child, ChildValue, Children, Renderer, Target};
