//! Canonicalización JSON y hashing del contexto visible.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::hash_value;
