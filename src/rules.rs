#![forbid(unsafe_code)]

//! Route translation and rewrite rule validation

pub mod translate;
pub mod validate;

// Re-export core types
pub use translate::{PatternTranslator, translate};
pub use validate::{Finding, FindingKind, validate};
