// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The high-level action family an utterance is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    TimeDate,
    Weather,
    AppControl,
    FileManager,
    WebSearch,
    Math,
    System,
    Reminder,
    Media,
    Screenshot,
    /// Fallback: anything the pattern tables do not claim.
    AiChat,
    Exit,
    /// Jokes, facts, coin flips and other small utilities.
    Smart,
    Social,
    Keyboard,
    Dictation,
    Unknown,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 18] = [
        IntentCategory::Greeting,
        IntentCategory::TimeDate,
        IntentCategory::Weather,
        IntentCategory::AppControl,
        IntentCategory::FileManager,
        IntentCategory::WebSearch,
        IntentCategory::Math,
        IntentCategory::System,
        IntentCategory::Reminder,
        IntentCategory::Media,
        IntentCategory::Screenshot,
        IntentCategory::AiChat,
        IntentCategory::Exit,
        IntentCategory::Smart,
        IntentCategory::Social,
        IntentCategory::Keyboard,
        IntentCategory::Dictation,
        IntentCategory::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::TimeDate => "time_date",
            IntentCategory::Weather => "weather",
            IntentCategory::AppControl => "app_control",
            IntentCategory::FileManager => "file_manager",
            IntentCategory::WebSearch => "web_search",
            IntentCategory::Math => "math",
            IntentCategory::System => "system",
            IntentCategory::Reminder => "reminder",
            IntentCategory::Media => "media",
            IntentCategory::Screenshot => "screenshot",
            IntentCategory::AiChat => "ai_chat",
            IntentCategory::Exit => "exit",
            IntentCategory::Smart => "smart",
            IntentCategory::Social => "social",
            IntentCategory::Keyboard => "keyboard",
            IntentCategory::Dictation => "dictation",
            IntentCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted parameter. `Null` marks a parameter the pattern
/// promised but the utterance left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(i64),
    Text(String),
    Null,
}

impl ParamValue {
    /// Text parameter, or `Null` when the text is empty after trimming.
    pub fn text_or_null(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ParamValue::Null
        } else {
            ParamValue::Text(trimmed.to_string())
        }
    }

    pub fn from_option(value: Option<&str>) -> Self {
        value.map_or(ParamValue::Null, ParamValue::text_or_null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

pub type Params = BTreeMap<String, ParamValue>;

/// The structured result of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub category: IntentCategory,
    /// Sub-action within the category, e.g. `volume_up` under `system`.
    pub action: String,
    pub params: Params,
    pub raw_text: String,
}

impl Command {
    pub fn new(category: IntentCategory, action: &str, raw_text: &str) -> Self {
        Self {
            category,
            action: action.to_string(),
            params: Params::new(),
            raw_text: raw_text.to_string(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(ParamValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn param_i64(&self, key: &str) -> Option<i64> {
        match self.params.get(key) {
            Some(ParamValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.category == IntentCategory::AiChat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_match_serde() {
        for category in IntentCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_params_serialize_flat() {
        let command = Command::new(IntentCategory::System, "brightness_set", "yorqinlik 50")
            .with_param("level", 50)
            .with_param("app", ParamValue::Null);
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["category"], "system");
        assert_eq!(json["params"]["level"], 50);
        assert!(json["params"]["app"].is_null());
    }

    #[test]
    fn test_text_or_null() {
        assert_eq!(ParamValue::text_or_null("  "), ParamValue::Null);
        assert_eq!(
            ParamValue::text_or_null(" chrome "),
            ParamValue::Text("chrome".to_string())
        );
        assert!(ParamValue::from_option(None).is_null());
    }
}
