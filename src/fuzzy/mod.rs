// File: src/fuzzy/mod.rs
pub mod distance;
pub mod normalizer;

pub use distance::levenshtein;
pub use normalizer::{Correction, CorrectionKind, Normalized, Normalizer, NormalizerConfig};
