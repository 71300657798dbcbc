//! Public library API for folding typed object graphs into JSON-compatible trees.

/// Reflection traits, structural mapping, encoding strategies, codecs and storage.
pub mod mirror;

#[doc(hidden)]
pub use serde as __serde;
