// File: src/intent/extract.rs
//! Parameter extraction from matched utterances.

use super::cues::{DEFAULT_ENGINE, FOCUS_WORDS, SEARCH_ENGINES};
use super::patterns::{FOLDER_ALIASES, REMINDER_UNITS};
use regex::{Captures, Regex};

/// First capture group that is non-empty after trimming and does not
/// contain a skip word (a verb or particle rather than a name).
pub fn first_app_name(caps: &Captures<'_>, skip: &Regex) -> Option<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .find(|group| !group.is_empty() && !skip.is_match(group))
        .map(str::to_string)
}

/// Trimmed text of a capture group, if it participated and is non-empty.
pub fn group_text<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

pub fn named_text<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name)
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

/// The first run of ASCII digits, if it fits in an `i64`.
pub fn first_number(text: &str) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Maps a spoken time unit onto `sekund`, `daqiqa` or `soat`.
pub fn canonical_unit(unit: &str) -> &'static str {
    REMINDER_UNITS
        .iter()
        .find(|(spelling, _)| *spelling == unit)
        .map_or("daqiqa", |(_, canonical)| *canonical)
}

pub fn folder_alias(text: &str) -> Option<&'static str> {
    FOLDER_ALIASES.iter().copied().find(|alias| text.contains(alias))
}

pub fn infer_engine(text: &str) -> &'static str {
    SEARCH_ENGINES
        .iter()
        .copied()
        .find(|engine| text.contains(engine))
        .unwrap_or(DEFAULT_ENGINE)
}

const KILL_VERBS: &[&str] = &["yop", "tugat", "stop"];
const PROCESS_NOUNS: &[&str] = &["dastur", "process", "jarayon"];

/// Target of a process kill: the word after `kill`, or the closest word
/// before a closing verb that is not itself a process noun.
pub fn kill_target(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if let Some(index) = words.iter().position(|w| *w == "kill") {
        return words.get(index + 1).map(|w| w.to_string());
    }
    let verb = words.iter().position(|w| KILL_VERBS.contains(w))?;
    words[..verb]
        .iter()
        .rev()
        .find(|w| !PROCESS_NOUNS.iter().any(|noun| w.starts_with(noun)))
        .map(|w| w.to_string())
}

/// Text in front of the first focus keyword found.
pub fn focus_target(text: &str) -> Option<&str> {
    let term = FOCUS_WORDS.iter().find(|term| text.contains(*term))?;
    text.split(term)
        .next()
        .map(str::trim)
        .filter(|app| !app.is_empty())
}

/// Drops the dictation trigger words `yoz` and `deb`.
pub fn strip_typing_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| *w != "yoz" && *w != "deb")
        .collect::<Vec<_>>()
        .join(" ")
}
