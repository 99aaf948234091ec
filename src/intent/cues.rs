// File: src/intent/cues.rs
//! Ordered `(cue, action)` tables that pick a sub-action once a group has
//! claimed an utterance. The first rule whose cue holds wins.

/// A keyword test over normalized text.
#[derive(Debug, Clone, Copy)]
pub enum Cue {
    /// Any fragment occurs as a substring.
    Any(&'static [&'static str]),
    /// Any word occurs as a whole whitespace-separated token.
    Word(&'static [&'static str]),
    /// The text contains an ASCII digit.
    Digit,
    Both(&'static Cue, &'static Cue),
    Either(&'static Cue, &'static Cue),
    Always,
}

impl Cue {
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Cue::Any(fragments) => fragments.iter().any(|f| text.contains(f)),
            Cue::Word(words) => text.split_whitespace().any(|token| words.contains(&token)),
            Cue::Digit => text.chars().any(|c| c.is_ascii_digit()),
            Cue::Both(a, b) => a.holds(text) && b.holds(text),
            Cue::Either(a, b) => a.holds(text) || b.holds(text),
            Cue::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActionRule {
    pub cue: Cue,
    pub action: &'static str,
}

const fn rule(cue: Cue, action: &'static str) -> ActionRule {
    ActionRule { cue, action }
}

pub fn resolve(rules: &[ActionRule], text: &str) -> Option<&'static str> {
    rules.iter().find(|r| r.cue.holds(text)).map(|r| r.action)
}

// --- System ---

const VOLUME: Cue = Cue::Any(&["ovoz", "volume", "sound"]);
const BRIGHTNESS: Cue = Cue::Any(&["yorqinlik", "yorug'lik", "brightness"]);
const WINDOW: Cue = Cue::Any(&["oyna", "minimize", "kichraytir"]);
const TRASH: Cue = Cue::Any(&["chiqindi", "savatcha", "recycle", "trash"]);
const POWER_OFF: Cue = Cue::Any(&["o'chir", "shutdown", "power off"]);
const MODE: Cue = Cue::Any(&["rejim", "mode"]);

pub const SYSTEM_ACTIONS: &[ActionRule] = &[
    rule(Cue::Any(&["batareya", "akkumulyator", "battery"]), "battery"),
    rule(
        Cue::Both(
            &VOLUME,
            &Cue::Either(
                &Cue::Any(&["o'chir", "mute", "yo'qot", "silence"]),
                &Cue::Word(&["off"]),
            ),
        ),
        "mute",
    ),
    rule(
        Cue::Both(
            &VOLUME,
            &Cue::Either(&Cue::Any(&["yoq", "unmute", "eshitilsin"]), &Cue::Word(&["on"])),
        ),
        "unmute",
    ),
    rule(
        Cue::Both(
            &VOLUME,
            &Cue::Either(
                &Cue::Any(&["to'liq", "maksimum", "100", "full"]),
                &Cue::Word(&["max"]),
            ),
        ),
        "volume_max",
    ),
    rule(
        Cue::Both(
            &VOLUME,
            &Cue::Either(
                &Cue::Any(&[
                    "ko'tar", "baland", "oshir", "qo'sh", "kuchaytir", "increase", "louder",
                    "higher",
                ]),
                &Cue::Word(&["up"]),
            ),
        ),
        "volume_up",
    ),
    rule(VOLUME, "volume_down"),
    rule(Cue::Both(&BRIGHTNESS, &Cue::Digit), "brightness_set"),
    rule(
        Cue::Both(
            &BRIGHTNESS,
            &Cue::Either(
                &Cue::Any(&["oshir", "ko'tar", "baland", "ko'p", "increase"]),
                &Cue::Word(&["up"]),
            ),
        ),
        "brightness_up",
    ),
    rule(
        Cue::Both(
            &BRIGHTNESS,
            &Cue::Either(
                &Cue::Any(&["pasayt", "past", "kamayt", "decrease"]),
                &Cue::Word(&["oz", "down"]),
            ),
        ),
        "brightness_down",
    ),
    rule(BRIGHTNESS, "brightness_set"),
    rule(
        Cue::Both(&WINDOW, &Cue::Any(&["yop", "o'chir", "close", "berkit"])),
        "close_window",
    ),
    rule(WINDOW, "minimize_all"),
    rule(
        Cue::Both(
            &TRASH,
            &Cue::Both(
                &Cue::Any(&["tozala", "bo'shat", "clear", "empty"]),
                &Cue::Any(&["pro", "tozalash"]),
            ),
        ),
        "cleaning_mode",
    ),
    rule(TRASH, "empty_trash"),
    rule(Cue::Any(&["qulfla", "lock", "blokla"]), "lock"),
    rule(Cue::Any(&["gibrid", "hibernate"]), "hibernate"),
    rule(
        Cue::Both(&POWER_OFF, &Cue::Any(&["bekor", "cancel"])),
        "cancel_shutdown",
    ),
    rule(POWER_OFF, "shutdown"),
    rule(Cue::Any(&["qayta", "restart", "reboot"]), "restart"),
    rule(Cue::Any(&["uxla", "sleep"]), "sleep"),
    rule(
        Cue::Both(
            &Cue::Any(&["dasturlar", "process", "apps"]),
            &Cue::Any(&["ko'p", "yeyapti", "ishlat", "list", "hungry"]),
        ),
        "list_processes",
    ),
    rule(
        Cue::Both(
            &Cue::Any(&["yop", "kill", "stop", "tugat"]),
            &Cue::Any(&[
                "dastur", "process", "jarayon", "chrome", "notepad", "telegram", "word", "excel",
            ]),
        ),
        "kill_process",
    ),
    rule(
        Cue::Any(&["internet", "tarmoq", "network", "ping", "wifi"]),
        "network_status",
    ),
    rule(
        Cue::Both(&Cue::Any(&["dars", "o'qish", "study"]), &MODE),
        "study_mode",
    ),
    rule(
        Cue::Both(&Cue::Any(&["tozalash", "cleaning"]), &MODE),
        "cleaning_mode",
    ),
    rule(Cue::Any(FOCUS_WORDS), "focus_window"),
    rule(Cue::Always, "info"),
];

/// Window-focus keywords; the app name is whatever precedes the first one found.
pub const FOCUS_WORDS: &[&str] = &["oldinda", "oldinga", "fokus", "focus", "aktivlashtir", "olga"];

// --- Media ---

/// Utterances naming a song source, where a captured query means "play this".
pub const MEDIA_QUERY: Cue = Cue::Either(
    &Cue::Any(&["youtube", "qo'shig'", "qo'shiq", "musiqa"]),
    &Cue::Word(&["play"]),
);

pub const MEDIA_ACTIONS: &[ActionRule] = &[
    rule(Cue::Any(&["to'xtat", "pauza", "pause", "stop"]), "pause"),
    rule(Cue::Any(&["davom", "resume", "boshla", "play"]), "resume"),
    rule(Cue::Any(&["keyingi", "next"]), "next"),
    rule(Cue::Any(&["oldingi", "previous", "prev"]), "previous"),
    rule(Cue::Always, "play"),
];

// --- Keyboard ---

const TAB: Cue = Cue::Any(&["tab"]);

/// Everything but free typing; `None` from [`resolve`] means "type text".
pub const KEYBOARD_ACTIONS: &[ActionRule] = &[
    rule(Cue::Any(&["nusxa", "copy"]), "copy"),
    rule(Cue::Any(&["joylashtir", "paste"]), "paste"),
    rule(Cue::Either(&Cue::Any(&["kesib"]), &Cue::Word(&["cut"])), "cut"),
    rule(Cue::Any(&["hammasini", "select all"]), "select_all"),
    rule(
        Cue::Both(
            &Cue::Any(&["clipboard"]),
            &Cue::Any(&["qidir", "search", "google"]),
        ),
        "clipboard_search",
    ),
    rule(Cue::Any(&["clipboard"]), "read_clipboard"),
    rule(Cue::Any(&["bekor", "undo"]), "undo"),
    rule(
        Cue::Either(
            &Cue::Both(&Cue::Any(&["qayta"]), &Cue::Any(&["qil"])),
            &Cue::Any(&["redo"]),
        ),
        "redo",
    ),
    rule(Cue::Any(&["saqla", "save"]), "save"),
    rule(Cue::Any(&["topish", "qidirish", "find"]), "find"),
    rule(
        Cue::Any(&[
            "yangi fayl",
            "yangi hujjat",
            "yangi dokument",
            "new file",
            "new document",
        ]),
        "new",
    ),
    rule(Cue::Either(&Cue::Any(&["chop"]), &Cue::Word(&["print"])), "print"),
    rule(Cue::Both(&Cue::Any(&["yangi", "new"]), &TAB), "new_tab"),
    rule(
        Cue::Both(&TAB, &Cue::Any(&["yop", "berkit", "close"])),
        "close_tab",
    ),
    rule(TAB, "switch_tab"),
    rule(Cue::Any(&["sahifa", "refresh", "reload"]), "refresh"),
    rule(Cue::Any(&["manzil", "address"]), "address_bar"),
    rule(
        Cue::Any(&["kattalashtir", "zoom in", "yaqinlashtir"]),
        "zoom_in",
    ),
    rule(
        Cue::Any(&["kichraytir", "zoom out", "uzoqlashtir"]),
        "zoom_out",
    ),
    rule(
        Cue::Either(
            &Cue::Both(&Cue::Any(&["to'liq"]), &Cue::Any(&["ekran"])),
            &Cue::Both(&Cue::Any(&["full"]), &Cue::Any(&["screen"])),
        ),
        "full_screen",
    ),
    rule(
        Cue::Either(
            &Cue::Both(&Cue::Any(&["boshqa"]), &Cue::Any(&["dastur"])),
            &Cue::Any(&["alt tab", "switch app"]),
        ),
        "alt_tab",
    ),
    rule(
        Cue::Both(&Cue::Any(&["ekran"]), &Cue::Any(&["qism"])),
        "screenshot_region",
    ),
];

pub const TAB_BACKWARD: Cue = Cue::Any(&["oldingi", "previous", "prev"]);

// --- Web search ---

/// Engines in inference priority order; google is the default.
pub const SEARCH_ENGINES: &[&str] = &["youtube", "wikipedia"];
pub const DEFAULT_ENGINE: &str = "google";
