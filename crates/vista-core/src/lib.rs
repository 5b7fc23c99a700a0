//! Type signature parsing, value access and numeric decoding for the vista
//! value inspector.
//!
//! ## Modules
//!
//! - [`signature`]: Template-aware type signature parser
//! - [`value`]: The host value-access contract and byte order
//! - [`decode`]: Half-float, packed-bit, integer and digest decoders
//! - [`snapshot`]: JSON-backed in-memory value host
//! - [`error`]: Error taxonomy shared by all inspection code

pub mod decode;
pub mod error;
pub mod signature;
pub mod snapshot;
pub mod value;

// Re-export key types for convenience
pub use error::{InspectError, Result};
pub use signature::{Parameter, TypeSignature};
pub use snapshot::{Node, Snapshot, SnapshotValue};
pub use value::{strip_qualifiers, ByteOrder, Value};
