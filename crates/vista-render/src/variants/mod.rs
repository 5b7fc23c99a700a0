//! Renderer variants, one per recognised semantic type.
//!
//! Every constructor derives its structural parameters (dimensions, rows,
//! bit counts, curve order) from the signature once, and the text and child
//! methods reuse them.

pub mod animation;
pub mod bit_vector;
pub mod complex;
pub mod curve;
pub mod fallback;
pub mod geometry;
pub mod image;
pub mod matrix;
pub mod resource;
pub mod scalar;
pub mod vector;

use vista_core::{InspectError, Result, TypeSignature};

/// A non-negative count taken from the integer parameter at `index`.
pub(crate) fn count_param(signature: &TypeSignature, index: usize, what: &str) -> Result<usize> {
    let raw = signature.integer(index).ok_or_else(|| {
        InspectError::signature(
            &signature.to_string(),
            format!("expected {what} as integer parameter {index}"),
        )
    })?;
    usize::try_from(raw).map_err(|_| {
        InspectError::signature(&signature.to_string(), format!("negative {what} {raw}"))
    })
}

/// A count baked into the bare name (`Vector3`, `Matrix4`).
pub(crate) fn name_count(signature: &TypeSignature, what: &str) -> Result<usize> {
    signature
        .name_digit()
        .map(|d| d as usize)
        .ok_or_else(|| {
            InspectError::signature(
                &signature.to_string(),
                format!("no {what} in name '{}'", signature.unqualified_name()),
            )
        })
}
