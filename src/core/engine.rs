// File: src/core/engine.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::Command;
use crate::error::Result;
use crate::fuzzy::normalizer::{Normalized, Normalizer, NormalizerConfig};
use crate::intent::Classifier;
use crate::persistence::{load_lexicon, save_lexicon};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Normalizer and classifier wired together over one shared lexicon.
///
/// Every method takes `&self`, so one engine can serve many threads.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    lexicon: Arc<Lexicon>,
    normalizer: Normalizer,
    classifier: Classifier,
    lexicon_path: Option<PathBuf>,
}

impl CommandEngine {
    /// An engine over the built-in lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        Self::with_config(lexicon, NormalizerConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: NormalizerConfig) -> Result<Self> {
        let lexicon = Arc::new(lexicon);
        Ok(Self {
            normalizer: Normalizer::with_config(Arc::clone(&lexicon), config),
            classifier: Classifier::new()?,
            lexicon,
            lexicon_path: None,
        })
    }

    /// Loads the lexicon at `path`, falling back to the built-in one when
    /// the file is missing or invalid. The path is remembered for
    /// [`CommandEngine::save_lexicon`].
    pub fn from_file_or_builtin(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let lexicon = load_lexicon(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "using built-in lexicon");
            Lexicon::builtin()
        });
        let mut engine = Self::with_lexicon(lexicon)?;
        engine.lexicon_path = Some(path.to_path_buf());
        Ok(engine)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn normalize_traced(&self, text: &str) -> Normalized {
        self.normalizer.normalize_traced(text)
    }

    /// Classifies already-normalized text.
    pub fn classify(&self, normalized: &str) -> Command {
        self.classifier.classify(normalized)
    }

    /// Normalizes then classifies a raw utterance. The command keeps `raw`
    /// verbatim as its original text.
    pub fn interpret(&self, raw: &str) -> Command {
        let normalized = self.normalizer.normalize(raw);
        self.classifier.classify_utterance(raw, &normalized)
    }

    /// Writes the active lexicon back to the file it was loaded from.
    pub fn save_lexicon(&self) -> Result<()> {
        match &self.lexicon_path {
            Some(path) => save_lexicon(&self.lexicon, path),
            None => Ok(()),
        }
    }
}
