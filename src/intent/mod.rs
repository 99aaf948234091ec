// File: src/intent/mod.rs
//! Prioritized intent classification over normalized text.
//!
//! Groups run in [`IntentGroup::ORDER`]; the first group that claims an
//! utterance decides its [`Command`]. Nothing is scored.

pub mod cues;
pub mod extract;
pub mod patterns;

use crate::core::types::{Command, IntentCategory, ParamValue};
use crate::error::Result;
use cues::{resolve, KEYBOARD_ACTIONS, MEDIA_ACTIONS, MEDIA_QUERY, SYSTEM_ACTIONS, TAB_BACKWARD};
use patterns::{compile, AppSource, PatternSet, ReminderKind};
use regex::Regex;
use tracing::{debug, trace};

/// Rule groups in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentGroup {
    Greeting,
    Exit,
    System,
    TimeDate,
    Weather,
    FileManager,
    AppOpen,
    AppClose,
    WebSearch,
    Math,
    Reminder,
    Media,
    Dictation,
    Screenshot,
    Keyboard,
    Smart,
    Social,
}

impl IntentGroup {
    pub const ORDER: [IntentGroup; 17] = [
        IntentGroup::Greeting,
        IntentGroup::Exit,
        IntentGroup::System,
        IntentGroup::TimeDate,
        IntentGroup::Weather,
        IntentGroup::FileManager,
        IntentGroup::AppOpen,
        IntentGroup::AppClose,
        IntentGroup::WebSearch,
        IntentGroup::Math,
        IntentGroup::Reminder,
        IntentGroup::Media,
        IntentGroup::Dictation,
        IntentGroup::Screenshot,
        IntentGroup::Keyboard,
        IntentGroup::Smart,
        IntentGroup::Social,
    ];

    pub fn category(&self) -> IntentCategory {
        match self {
            IntentGroup::Greeting => IntentCategory::Greeting,
            IntentGroup::Exit => IntentCategory::Exit,
            IntentGroup::System => IntentCategory::System,
            IntentGroup::TimeDate => IntentCategory::TimeDate,
            IntentGroup::Weather => IntentCategory::Weather,
            IntentGroup::FileManager => IntentCategory::FileManager,
            IntentGroup::AppOpen | IntentGroup::AppClose => IntentCategory::AppControl,
            IntentGroup::WebSearch => IntentCategory::WebSearch,
            IntentGroup::Math => IntentCategory::Math,
            IntentGroup::Reminder => IntentCategory::Reminder,
            IntentGroup::Media => IntentCategory::Media,
            IntentGroup::Dictation => IntentCategory::Dictation,
            IntentGroup::Screenshot => IntentCategory::Screenshot,
            IntentGroup::Keyboard => IntentCategory::Keyboard,
            IntentGroup::Smart => IntentCategory::Smart,
            IntentGroup::Social => IntentCategory::Social,
        }
    }
}

/// Compiled pattern tables. Built once, then shared read-only.
#[derive(Debug, Clone)]
pub struct Classifier {
    hello: PatternSet,
    goodbye: PatternSet,
    how_are_you: PatternSet,
    exit: PatternSet,
    system: PatternSet,
    time: PatternSet,
    date: PatternSet,
    weather: PatternSet,
    weather_city: Regex,
    folder: PatternSet,
    open_app: PatternSet,
    open_skip: Regex,
    close_app: PatternSet,
    close_skip: Regex,
    web_search: Vec<(Regex, AppSource)>,
    math: PatternSet,
    reminder: Vec<(Regex, ReminderKind)>,
    media: PatternSet,
    media_verbs: Regex,
    dictation: PatternSet,
    screenshot: PatternSet,
    keyboard: PatternSet,
    type_in_app: Regex,
    type_in_app_en: Regex,
    smart: Vec<(&'static str, PatternSet)>,
    social: PatternSet,
}

impl Classifier {
    /// Compiles every table. Fails only on a malformed pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            hello: PatternSet::compile("greeting", patterns::GREETING_HELLO)?,
            goodbye: PatternSet::compile("greeting", patterns::GREETING_GOODBYE)?,
            how_are_you: PatternSet::compile("greeting", patterns::GREETING_HOW_ARE_YOU)?,
            exit: PatternSet::compile("exit", patterns::EXIT)?,
            system: PatternSet::compile("system", patterns::SYSTEM)?,
            time: PatternSet::compile("time_date", patterns::TIME)?,
            date: PatternSet::compile("time_date", patterns::DATE)?,
            weather: PatternSet::compile("weather", patterns::WEATHER)?,
            weather_city: compile("weather", patterns::WEATHER_CITY)?,
            folder: PatternSet::compile("file_manager", patterns::FOLDER)?,
            open_app: PatternSet::compile("app_open", patterns::OPEN_APP)?,
            open_skip: compile("app_open", patterns::OPEN_SKIP_WORDS)?,
            close_app: PatternSet::compile("app_close", patterns::CLOSE_APP)?,
            close_skip: compile("app_close", patterns::CLOSE_SKIP_WORDS)?,
            web_search: patterns::WEB_SEARCH
                .iter()
                .map(|rule| compile("web_search", rule.pattern).map(|re| (re, rule.app)))
                .collect::<Result<_>>()?,
            math: PatternSet::compile("math", patterns::MATH)?,
            reminder: patterns::REMINDER
                .iter()
                .map(|(pattern, kind)| compile("reminder", pattern).map(|re| (re, *kind)))
                .collect::<Result<_>>()?,
            media: PatternSet::compile("media", patterns::MEDIA)?,
            media_verbs: compile("media", patterns::MEDIA_VERBS)?,
            dictation: PatternSet::compile("dictation", patterns::DICTATION)?,
            screenshot: PatternSet::compile("screenshot", patterns::SCREENSHOT)?,
            keyboard: PatternSet::compile("keyboard", patterns::KEYBOARD)?,
            type_in_app: compile("keyboard", patterns::TYPE_IN_APP)?,
            type_in_app_en: compile("keyboard", patterns::TYPE_IN_APP_EN)?,
            smart: patterns::SMART
                .iter()
                .map(|(action, table)| PatternSet::compile("smart", table).map(|set| (*action, set)))
                .collect::<Result<_>>()?,
            social: PatternSet::compile("social", patterns::SOCIAL)?,
        })
    }

    /// Classifies text that serves as both the matched and the reported text.
    pub fn classify(&self, text: &str) -> Command {
        self.classify_utterance(text, text)
    }

    /// Classifies `normalized`, reporting `raw` as the command's original text.
    /// Total: unmatched input becomes an `ai_chat` command carrying `raw`.
    pub fn classify_utterance(&self, raw: &str, normalized: &str) -> Command {
        let text = prepare(normalized);
        for group in IntentGroup::ORDER {
            if let Some(command) = self.try_group(group, &text, raw) {
                debug!(?group, category = %command.category, action = %command.action, "utterance classified");
                return command;
            }
        }
        trace!(text = %text, "no group matched, falling back to chat");
        Command::new(IntentCategory::AiChat, "chat", raw).with_param("message", raw)
    }

    /// Runs a single group in isolation.
    pub fn match_group(&self, group: IntentGroup, text: &str) -> Option<Command> {
        self.try_group(group, &prepare(text), text)
    }

    fn try_group(&self, group: IntentGroup, text: &str, raw: &str) -> Option<Command> {
        let action = |name: &str| Some(Command::new(group.category(), name, raw));
        match group {
            IntentGroup::Greeting => {
                if self.hello.is_match(text) {
                    action("hello")
                } else if self.goodbye.is_match(text) {
                    action("goodbye")
                } else if self.how_are_you.is_match(text) {
                    action("how_are_you")
                } else {
                    None
                }
            }
            IntentGroup::Exit => self.exit.is_match(text).then(|| action("exit")).flatten(),
            IntentGroup::System => self.match_system(text, raw),
            IntentGroup::TimeDate => {
                if self.time.is_match(text) {
                    action("time")
                } else if self.date.is_match(text) {
                    action("date")
                } else {
                    None
                }
            }
            IntentGroup::Weather => {
                if !self.weather.is_match(text) {
                    return None;
                }
                let city = self
                    .weather_city
                    .captures(text)
                    .and_then(|caps| extract::group_text(&caps, 1).map(str::to_string));
                action("current").map(|c| c.with_param("city", ParamValue::from_option(city.as_deref())))
            }
            IntentGroup::FileManager => {
                if !self.folder.is_match(text) {
                    return None;
                }
                let folder = extract::folder_alias(text);
                action("open_folder").map(|c| c.with_param("folder", ParamValue::from_option(folder)))
            }
            IntentGroup::AppOpen => self.match_open(text, raw),
            IntentGroup::AppClose => self.match_close(text, raw),
            IntentGroup::WebSearch => self.match_search(text, raw),
            IntentGroup::Math => {
                if !self.math.is_match(text) {
                    return None;
                }
                action("calculate").map(|c| c.with_param("expression", text))
            }
            IntentGroup::Reminder => self.match_reminder(text, raw),
            IntentGroup::Media => self.match_media(text, raw),
            IntentGroup::Dictation => self.dictation.is_match(text).then(|| action("enable")).flatten(),
            IntentGroup::Screenshot => self.screenshot.is_match(text).then(|| action("capture")).flatten(),
            IntentGroup::Keyboard => self.match_keyboard(text, raw),
            IntentGroup::Smart => self
                .smart
                .iter()
                .find(|(_, table)| table.is_match(text))
                .and_then(|(name, _)| action(*name)),
            IntentGroup::Social => {
                let caps = self.social.first_captures(text)?;
                let platform = extract::group_text(&caps, 1)?;
                action("open").map(|c| c.with_param("platform", platform))
            }
        }
    }

    fn match_system(&self, text: &str, raw: &str) -> Option<Command> {
        if !self.system.is_match(text) {
            return None;
        }
        let name = resolve(SYSTEM_ACTIONS, text).unwrap_or("info");
        let command = Command::new(IntentCategory::System, name, raw);
        let command = match name {
            "brightness_set" => {
                let level = extract::first_number(text).map_or(ParamValue::Null, ParamValue::Number);
                command.with_param("level", level)
            }
            "kill_process" => {
                let app = extract::kill_target(text);
                command.with_param("app", ParamValue::from_option(app.as_deref()))
            }
            "focus_window" => {
                let app = extract::focus_target(text);
                command.with_param("app", ParamValue::from_option(app))
            }
            _ => command,
        };
        Some(command)
    }

    fn app_control_excluded(text: &str) -> bool {
        patterns::APP_CONTROL_EXCLUDED
            .iter()
            .any(|word| text.contains(word))
    }

    fn match_open(&self, text: &str, raw: &str) -> Option<Command> {
        if Self::app_control_excluded(text) {
            return None;
        }
        for (index, caps) in self.open_app.all_captures(text) {
            // Index 0 is `<app> da <target> <verb>`.
            if index == 0 {
                if let (Some(app), Some(target)) =
                    (extract::group_text(&caps, 1), extract::group_text(&caps, 2))
                {
                    return Some(
                        Command::new(IntentCategory::AppControl, "open_context", raw)
                            .with_param("app", app)
                            .with_param("target", target),
                    );
                }
            }
            if let Some(app) = extract::first_app_name(&caps, &self.open_skip) {
                return Some(Command::new(IntentCategory::AppControl, "open", raw).with_param("app", app));
            }
        }
        None
    }

    fn match_close(&self, text: &str, raw: &str) -> Option<Command> {
        if Self::app_control_excluded(text) {
            return None;
        }
        self.close_app
            .all_captures(text)
            .find_map(|(_, caps)| extract::first_app_name(&caps, &self.close_skip))
            .map(|app| Command::new(IntentCategory::AppControl, "close", raw).with_param("app", app))
    }

    fn match_search(&self, text: &str, raw: &str) -> Option<Command> {
        for (regex, source) in &self.web_search {
            let Some(caps) = regex.captures(text) else {
                continue;
            };
            let Some(query) = extract::named_text(&caps, "query") else {
                continue;
            };
            let command = match source {
                AppSource::Fixed(app) => Command::new(IntentCategory::WebSearch, "app_search", raw)
                    .with_param("app", *app),
                AppSource::Captured => match extract::named_text(&caps, "app") {
                    Some(app) => Command::new(IntentCategory::WebSearch, "app_search", raw)
                        .with_param("app", app),
                    None => continue,
                },
                AppSource::Inferred => Command::new(IntentCategory::WebSearch, "search", raw)
                    .with_param("engine", extract::infer_engine(text)),
            };
            return Some(command.with_param("query", query));
        }
        None
    }

    fn match_reminder(&self, text: &str, raw: &str) -> Option<Command> {
        let (caps, kind) = self
            .reminder
            .iter()
            .find_map(|(regex, kind)| regex.captures(text).map(|caps| (caps, *kind)))?;
        let command = match kind {
            ReminderKind::List => Command::new(IntentCategory::Reminder, "list", raw),
            ReminderKind::Timed => {
                let time = extract::named_text(&caps, "value")
                    .and_then(extract::first_number)
                    .map_or(ParamValue::Null, ParamValue::Number);
                let unit = extract::named_text(&caps, "unit").map_or("daqiqa", extract::canonical_unit);
                Command::new(IntentCategory::Reminder, "set", raw)
                    .with_param("time", time)
                    .with_param("unit", unit)
            }
            ReminderKind::Note => {
                let note = extract::named_text(&caps, "text");
                Command::new(IntentCategory::Reminder, "add", raw)
                    .with_param("text", ParamValue::from_option(note))
            }
        };
        Some(command)
    }

    fn match_media(&self, text: &str, raw: &str) -> Option<Command> {
        if !self.media.is_match(text) {
            return None;
        }
        if MEDIA_QUERY.holds(text) {
            let query = self.media.all_captures(text).find_map(|(_, caps)| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().trim())
                    .find(|group| !group.is_empty() && !self.media_verbs.is_match(group))
                    .map(str::to_string)
            });
            if let Some(query) = query {
                return Some(
                    Command::new(IntentCategory::Media, "youtube_music", raw).with_param("query", query),
                );
            }
        }
        let name = resolve(MEDIA_ACTIONS, text).unwrap_or("play");
        Some(Command::new(IntentCategory::Media, name, raw))
    }

    fn match_keyboard(&self, text: &str, raw: &str) -> Option<Command> {
        if !self.keyboard.is_match(text) {
            return None;
        }
        if let Some(name) = resolve(KEYBOARD_ACTIONS, text) {
            let command = Command::new(IntentCategory::Keyboard, name, raw);
            if name == "switch_tab" {
                let direction = if TAB_BACKWARD.holds(text) { "previous" } else { "next" };
                return Some(command.with_param("direction", direction));
            }
            return Some(command);
        }

        let targeted = self
            .type_in_app
            .captures(text)
            .map(|caps| (caps.get(2), caps.get(1)))
            .or_else(|| {
                self.type_in_app_en
                    .captures(text)
                    .map(|caps| (caps.get(1), caps.get(2)))
            })
            .map(|(typed, app)| {
                let typed = typed.map_or("", |m| m.as_str().trim()).to_string();
                let app = app.map(|m| m.as_str().trim()).filter(|a| !a.is_empty());
                (typed, app.map(str::to_string))
            });

        let (typed, app) = match targeted {
            Some(found) => found,
            None => {
                let typed = self.keyboard.all_captures(text).find_map(|(_, caps)| {
                    if caps.len() < 2 {
                        return None;
                    }
                    let typed = match extract::group_text(&caps, 1) {
                        Some(first) => first.to_string(),
                        None => extract::strip_typing_words(caps.get(0).map_or("", |m| m.as_str())),
                    };
                    (!typed.is_empty()).then_some(typed)
                })?;
                (typed, None)
            }
        };
        if typed.is_empty() {
            return None;
        }

        let name = if app.is_some() { "type_in_app" } else { "type" };
        Some(
            Command::new(IntentCategory::Keyboard, name, raw)
                .with_param("text", typed)
                .with_param("app", ParamValue::from_option(app.as_deref())),
        )
    }
}

/// Lowercases and collapses whitespace so callers may pass raw text.
fn prepare(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
