// src/lib.rs

pub mod core;
pub mod error;
pub mod fuzzy;
pub mod intent;
pub mod persistence;
pub mod routing;

pub use crate::core::engine::CommandEngine;
pub use crate::core::lexicon::Lexicon;
pub use crate::core::types::{Command, IntentCategory, ParamValue, Params};
pub use crate::error::{EngineError, Result};
pub use crate::fuzzy::{Normalizer, NormalizerConfig};
pub use crate::intent::{Classifier, IntentGroup};
