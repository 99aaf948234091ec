// File: src/routing.rs
//! Hints for whoever executes commands: what may be cached, what reads as a
//! question, and which language the user spoke.

use crate::core::types::IntentCategory;

/// Categories whose answers depend on the moment they are asked.
const DYNAMIC: &[IntentCategory] = &[
    IntentCategory::System,
    IntentCategory::Screenshot,
    IntentCategory::TimeDate,
    IntentCategory::Weather,
    IntentCategory::AppControl,
    IntentCategory::FileManager,
    IntentCategory::Media,
    IntentCategory::Keyboard,
];

const QUESTION_WORDS: &[&str] = &[
    "nima", "qanday", "haqida", "kim", "qayerda", "necha", "qachon", "search", "google",
    "wikipedia",
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "and", "or", "not", "to", "of", "in", "it",
    "i", "you", "my",
];

/// Whether a response to this category may be stored and replayed.
pub fn is_cacheable(category: IntentCategory) -> bool {
    !DYNAMIC.contains(&category)
}

/// Substring test against question words, or a trailing `?`.
pub fn looks_like_question(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    text.ends_with('?') || QUESTION_WORDS.iter().any(|word| text.contains(word))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Uzbek,
    English,
}

/// English as soon as one token is a common English function word.
pub fn detect_language(text: &str) -> Language {
    let english = text
        .split_whitespace()
        .any(|token| ENGLISH_WORDS.iter().any(|word| token.eq_ignore_ascii_case(word)));
    if english {
        Language::English
    } else {
        Language::Uzbek
    }
}
