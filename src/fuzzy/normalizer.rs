// File: src/fuzzy/normalizer.rs
use super::distance::levenshtein_chars;
use crate::core::lexicon::Lexicon;
use std::sync::Arc;
use tracing::debug;

/// Thresholds for the fuzzy stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Shorter tokens are never fuzzy-matched.
    pub min_fuzzy_len: usize,
    /// Vocabulary words whose length differs by more than this are skipped.
    pub max_len_gap: usize,
    /// Tokens up to this length use `short_threshold`.
    pub short_word_len: usize,
    pub short_threshold: usize,
    pub long_threshold: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_fuzzy_len: 3,
            max_len_gap: 2,
            short_word_len: 4,
            short_threshold: 1,
            long_threshold: 2,
        }
    }
}

impl NormalizerConfig {
    fn threshold(&self, len: usize) -> usize {
        if len <= self.short_word_len {
            self.short_threshold
        } else {
            self.long_threshold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionKind {
    Known,
    Fuzzy { distance: usize },
}

/// One rewritten token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub kind: CorrectionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub corrections: Vec<Correction>,
}

/// Repairs per-token transcription noise against a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    /// Vocabulary pre-split into chars, in tie-break order.
    targets: Vec<(String, Vec<char>)>,
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_config(lexicon, NormalizerConfig::default())
    }

    pub fn with_config(lexicon: Arc<Lexicon>, config: NormalizerConfig) -> Self {
        let targets = lexicon
            .vocabulary()
            .iter()
            .map(|word| (word.clone(), word.chars().collect()))
            .collect();
        Self {
            lexicon,
            targets,
            config,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalize_traced(text).text
    }

    /// Like [`Normalizer::normalize`], also reporting each token it rewrote.
    pub fn normalize_traced(&self, text: &str) -> Normalized {
        let mut corrections = Vec::new();
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                let token = word.to_lowercase();
                match self.correct_token(&token) {
                    Some((corrected, kind)) => {
                        debug!(original = %token, corrected = %corrected, ?kind, "token corrected");
                        corrections.push(Correction {
                            original: token,
                            corrected: corrected.clone(),
                            kind,
                        });
                        corrected
                    }
                    None => token,
                }
            })
            .collect();

        let text_out = tokens.join(" ");
        if !corrections.is_empty() {
            debug!(before = %text, after = %text_out, "utterance normalized");
        }
        Normalized {
            text: text_out,
            corrections,
        }
    }

    /// Returns the replacement for a lowercase token, or `None` to keep it.
    fn correct_token(&self, token: &str) -> Option<(String, CorrectionKind)> {
        if let Some(target) = self.lexicon.correction(token) {
            return (target != token).then(|| (target.to_string(), CorrectionKind::Known));
        }
        if self.lexicon.is_canonical(token) {
            return None;
        }
        self.nearest(token)
            .map(|(word, distance)| (word.to_string(), CorrectionKind::Fuzzy { distance }))
    }

    fn nearest(&self, token: &str) -> Option<(&str, usize)> {
        let chars: Vec<char> = token.chars().collect();
        let len = chars.len();
        if len < self.config.min_fuzzy_len {
            return None;
        }

        let mut best: Option<(&str, usize)> = None;
        for (word, word_chars) in &self.targets {
            if len.abs_diff(word_chars.len()) > self.config.max_len_gap {
                continue;
            }
            let distance = levenshtein_chars(&chars, word_chars);
            // Strict comparison keeps the first word on ties.
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((word.as_str(), distance));
            }
        }

        best.filter(|&(_, distance)| distance > 0 && distance <= self.config.threshold(len))
    }
}
