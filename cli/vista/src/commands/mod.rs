//! CLI command implementations.

pub mod inspect;
pub mod patterns;
pub mod signature;
