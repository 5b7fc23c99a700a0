//! The value-access contract between the inspector and its host.
//!
//! A host (a debugger session, a memory snapshot) hands out values through
//! the [`Value`] trait. The inspector only ever reads: it asks for the type
//! signature, walks named fields and indexed elements, and reinterprets raw
//! bytes with the host's byte order.

use serde::{Deserialize, Serialize};

use crate::decode;
use crate::error::Result;

/// Byte order of the inspected program's memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "little"),
            ByteOrder::Big => write!(f, "big"),
        }
    }
}

/// A live value owned by the host.
///
/// Child handles returned by [`Value::field`] and [`Value::element`] are
/// owned by the caller but still refer to host memory; they must not
/// outlive the inspection request that produced them.
pub trait Value: std::fmt::Debug {
    /// The type signature exactly as the host prints it, qualifiers included.
    fn type_signature(&self) -> String;

    /// Look up a named field.
    fn field(&self, name: &str) -> Result<Box<dyn Value>>;

    /// Look up an element of an array-like value.
    fn element(&self, index: usize) -> Result<Box<dyn Value>>;

    /// The raw object representation.
    fn raw_bytes(&self) -> Result<Vec<u8>>;

    /// Byte order used by [`Value::raw_bytes`].
    fn byte_order(&self) -> ByteOrder;

    /// The host's own textual rendering of this value.
    fn to_text(&self) -> String;

    /// Declared field names, in layout order.
    fn field_names(&self) -> Vec<String>;

    /// The type signature with `const`/`volatile` and reference markers removed.
    fn canonical_signature(&self) -> String {
        strip_qualifiers(&self.type_signature()).to_string()
    }

    /// Decode the raw bytes as an unsigned integer of `width` bytes.
    fn read_uint(&self, width: usize) -> Result<u64> {
        decode::read_uint(&self.raw_bytes()?, width, self.byte_order())
    }

    /// Decode the raw bytes as a C++ `bool`.
    fn read_bool(&self) -> Result<bool> {
        decode::read_bool(&self.raw_bytes()?)
    }
}

/// Strip cv-qualifiers and reference markers from a type signature.
///
/// `const Magnum::Math::Vector3<float> &` → `Magnum::Math::Vector3<float>`
pub fn strip_qualifiers(signature: &str) -> &str {
    let mut s = signature.trim();
    loop {
        let before = s.len();
        for prefix in ["const ", "volatile "] {
            if let Some(rest) = s.strip_prefix(prefix) {
                s = rest.trim_start();
            }
        }
        for suffix in ["&&", "&", " const", " volatile"] {
            if let Some(rest) = s.strip_suffix(suffix) {
                s = rest.trim_end();
            }
        }
        if s.len() == before {
            return s;
        }
    }
}
