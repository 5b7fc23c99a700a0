//! Inspection error types.

/// Errors that can occur while decoding or accessing an inspected value.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Failed to parse a type signature.
    #[error("invalid type signature '{signature}': {detail}")]
    SignatureParse { signature: String, detail: String },

    /// The value has no field with the requested name.
    #[error("no field '{field}' on value of type '{signature}'")]
    FieldAccess { signature: String, field: String },

    /// The requested element index does not exist on the value.
    #[error("index {index} out of range for value of type '{signature}' (length {len})")]
    IndexOutOfRange {
        signature: String,
        index: usize,
        len: usize,
    },

    /// Raw bytes could not be reinterpreted as the requested numeric form.
    #[error("cannot decode {what}: {detail}")]
    Decode { what: String, detail: String },

    /// A snapshot document could not be parsed.
    #[error("snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectError {
    pub fn signature(signature: &str, detail: impl Into<String>) -> Self {
        InspectError::SignatureParse {
            signature: signature.to_string(),
            detail: detail.into(),
        }
    }

    pub fn decode(what: impl Into<String>, detail: impl Into<String>) -> Self {
        InspectError::Decode {
            what: what.into(),
            detail: detail.into(),
        }
    }

    /// Whether this error came from signature parsing (recoverable by
    /// falling back to a default rendering).
    pub fn is_signature_error(&self) -> bool {
        matches!(self, InspectError::SignatureParse { .. })
    }
}

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, InspectError>;
