// File: src/intent/patterns.rs
//! Pattern tables, one named constant per intent group.
//!
//! All patterns run against normalized (lowercase, single-spaced) text.

use crate::error::{EngineError, Result};
use regex::{Captures, Regex};

pub const GREETING_HELLO: &[&str] = &[
    r"\bsalom\b",
    r"\bassalomu alaykum\b",
    r"\bhayrli kun\b",
    r"\bhayrli tong\b",
    r"\bhayrli kech\b",
    r"\bhey\b",
    r"\bhi\b",
    r"\bhello\b",
    r"\bgood morning\b",
    r"\bgood afternoon\b",
    r"\bgood evening\b",
];

pub const GREETING_GOODBYE: &[&str] = &[
    r"\bxayr\b",
    r"\bko'rishguncha\b",
    r"\brahmat\b",
    r"\byaxshi qol\b",
    r"\bmayli\b",
    r"\bbye\b",
    r"\bgoodbye\b",
    r"\bsee you\b",
];

pub const GREETING_HOW_ARE_YOU: &[&str] = &[
    r"\bqanday\s*(yuribsan|ahvol)",
    r"\bishlar\s+qanday\b",
    r"\bnima\s+gap",
    r"\bqalaysan\b",
    r"\byaxshimisan\b",
    r"how are you",
    r"how's it going",
    r"what's up",
];

pub const EXIT: &[&str] = &[
    r"(chiq|yop|o'chir|exit|dastur.*yop).*\bjarvis\b",
    r"\bjarvis\b.*(chiq|yop|o'chir|exit|quit|close)",
];

pub const SYSTEM: &[&str] = &[
    r"kompyuter.*haqida",
    r"tizim.*ma'lumot",
    r"\bsystem info\b",
    r"\bcomputer info\b",
    r"batareya",
    r"akkumulyator",
    r"battery",
    r"(ovoz|volume|sound).*(ko'tar|baland|oshir|qo'sh|kuchaytir|\bup\b|increase|louder|higher)",
    r"(ovoz|volume|sound).*(pasayt|past|kamayt|ayir|\bdown\b|decrease|lower|quieter)",
    r"(ovoz|volume|sound).*(o'chir|o'chish|yo'qot|mute|\boff\b|silence)",
    r"(ovoz|volume|sound).*(yoq|yoqish|unmute|eshitilsin|\bon\b)",
    r"(ovoz|volume|sound).*(to'liq|maksimum|\bmax\b|100|full)",
    r"yorug'lik|yorqinlik|brightness",
    r"oyna.*(kichraytir|yop|berkit|minimize|close)",
    r"chiqindi|savatcha|recycle.*bin|trash",
    r"kompyuter.*(o'chir|shutdown|power off)",
    r"\b(shutdown|power off)\b",
    r"qayta.*(yoq|ishga|tushir|restart|reboot)",
    r"\b(restart|reboot)\b",
    r"uxla|\bsleep\b|gibrid|hibernate",
    r"qulfla|\block\b|blokla",
    r"(dasturlar|process|apps).*(ko'p|yeyapti|ishlat|list|hungry)",
    r"\bkill\s+\S+",
    r"(process|jarayon).*(yop|tugat|stop)",
    r"\b(internet|tarmoq|network|wifi|ping)\b",
    r"(dars|o'qish|study|tozalash|cleaning).*(rejim|mode)",
    r"\b(oldinda|oldinga|fokus|focus|aktivlashtir|olga)\b",
];

pub const TIME: &[&str] = &[
    r"soat.*necha",
    r"vaqt.*qancha",
    r"hozir.*soat",
    r"soatni.*ayt",
    r"what.*time",
    r"current time",
];

pub const DATE: &[&str] = &[
    r"bugun.*kun",
    r"qaysi.*kun",
    r"hafta.*kun",
    r"bugun.*sana",
    r"sanani.*ayt",
    r"what.*date",
    r"today's date",
];

pub const WEATHER: &[&str] = &[
    r"ob.*havo",
    r"havo.*qanday",
    r"tashqarida.*qanday",
    r"weather",
];

/// City name followed (possibly after a suffix) by the locative `da`.
pub const WEATHER_CITY: &str = r"\b(toshkent|samarqand|buxoro|andijon|farg'ona|namangan|qashqadaryo|surxondaryo|xorazm|navoiy|jizzax|sirdaryo|qoraqalpog'iston|nukus|termiz|qarshi|urganch|guliston).*da\b";

pub const FOLDER: &[&str] = &[
    r"\b(papka|folder|katalog)",
    r"(yuklamalar|downloads|hujjatlar|documents|rasmlar|pictures|musiqa|music|videos|video|ish stoli|desktop)\S*\s*(papka|folder|katalog)",
    r"(yuklamalar|downloads|hujjatlar|documents|rasmlar|pictures|musiqa|music|videos|video|ish stoli|desktop)\S*\s*(och|ochib.*ber|ko'rsat)\b",
    r"\b(open|show)\s+(my\s+)?(downloads|documents|pictures|music|videos|desktop)\b",
];

/// Folder aliases in lookup order; the first one contained in the text wins.
pub const FOLDER_ALIASES: &[&str] = &[
    "yuklamalar", "downloads", "hujjatlar", "documents", "rasmlar", "pictures", "musiqa",
    "music", "video", "videos", "ish stoli", "desktop",
];

/// Index 0 is the contextual form `<app> da <target> <verb>`.
pub const OPEN_APP: &[&str] = &[
    r"(.*)\s+da\s+(.*)\s+\b(och|ishga.*tushir)\b",
    r"\b(och|ochib.*ber|ishga.*tushir|run|start|open|launch)\b\s*(.*)",
    r"(.*)\s*\b(och|ochib.*ber|ishga.*tushir|run|start|open|launch)\b",
    r"(.*)\b(och|ich|ish|open)\b$",
];

pub const OPEN_SKIP_WORDS: &str = r"\b(och|ochib|ber|ishga|tushir|run|start|open|launch|ich|ish|da)\b";

pub const CLOSE_APP: &[&str] = &[
    r"\b(yop|yopib.*ber|o'chir|close|exit|stop|quit)\b\s*(.*)",
    r"(.*)\s*\b(yop|yopib.*ber|o'chir|close|exit|stop|quit)\b",
    r"(.*)\b(yop|yopib|close)\b$",
];

pub const CLOSE_SKIP_WORDS: &str = r"\b(yop|yopib|ber|o'chir|close|exit|stop|quit)\b";

/// Keywords that belong to System window/trash handling; app control leaves
/// utterances containing them alone.
pub const APP_CONTROL_EXCLUDED: &[&str] = &["oyna", "chiqindi", "savatcha"];

/// Where a web-search rule takes its target application from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSource {
    /// The rule names the site itself (`youtube da ... qidir`).
    Fixed(&'static str),
    /// The `app` capture names it (`<app> da <query> qidir`).
    Captured,
    /// General search; the engine is inferred from the text.
    Inferred,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchRule {
    /// Must define a `query` capture; `Captured` rules also define `app`.
    pub pattern: &'static str,
    pub app: AppSource,
}

pub const WEB_SEARCH: &[SearchRule] = &[
    SearchRule {
        pattern: r"google.*da\s+(?P<query>.+)\s*(qidir|izla)",
        app: AppSource::Fixed("google"),
    },
    SearchRule {
        pattern: r"(qidir|izla|search|look up)\s+(?P<query>.+?)\s+((on|in)\s+)?google\b",
        app: AppSource::Inferred,
    },
    SearchRule {
        pattern: r"youtube.*da\s+(?P<query>.+)\s*(qidir|izla|qo'y)",
        app: AppSource::Fixed("youtube"),
    },
    SearchRule {
        pattern: r"wikipedia.*da\s+(?P<query>.+)\s*(haqida|qidir)",
        app: AppSource::Fixed("wikipedia"),
    },
    SearchRule {
        pattern: r"(?P<app>.+)\s*da\s+(?P<query>.+)\s*(qidir|izla|search)",
        app: AppSource::Captured,
    },
    SearchRule {
        pattern: r"search\s+(?P<query>.+?)\s+(on|in)\s+(google|youtube|wikipedia)\b",
        app: AppSource::Inferred,
    },
    SearchRule {
        pattern: r"\b(search|google|find)\s+(?P<query>.+)",
        app: AppSource::Inferred,
    },
    SearchRule {
        pattern: r"(?P<query>.+?)\s+(ni\s+)?(qidir|izla)\b",
        app: AppSource::Inferred,
    },
];

pub const MATH: &[&str] = &[
    r"(\d+)\s*(plyus|\+|qo'sh|plus)\s*(\d+)",
    r"(\d+)\s*(minus|-|ayir)\s*(\d+)",
    r"(\d+)\s*(ko'paytir|ko'pay|\*|marta|times|multiplied by)\s*(\d+)",
    r"(\d+)\s*(bo'l|bo'lib|/|:|divided by)\s*(\d+)",
    r"(\d+)\s*ning\s*(kvadrat|kub|daraja)",
    r"(\d+)\s*foiz\s*(\d+)",
    r"(\d+)\s*(ildiz|sqrt|root)",
    r"calculate\s+(.+)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    /// Reads back saved reminders.
    List,
    /// Defines `value` and `unit` captures.
    Timed,
    /// Defines a `text` capture.
    Note,
}

pub const REMINDER: &[(&str, ReminderKind)] = &[
    (r"eslatmalar\S*.*(o'qi|ko'rsat|ayt)", ReminderKind::List),
    (r"\b(list|show)\s+reminders\b", ReminderKind::List),
    (
        r"(?P<value>\d+)\s*(?P<unit>daqiqa|minut|soat|sekund|soniya|minute|hour|second)\S*.*eslatib",
        ReminderKind::Timed,
    ),
    (
        r"remind me in (?P<value>\d+)\s*(?P<unit>minute|hour|second|min|hr|sec)",
        ReminderKind::Timed,
    ),
    (r"eslatma\s*(yoz|qo'sh)\s*[:.]?\s*(?P<text>.*)", ReminderKind::Note),
    (r"set reminder\s*[:.]?\s*(?P<text>.*)", ReminderKind::Note),
];

/// Unit spellings and the canonical unit each one maps to.
pub const REMINDER_UNITS: &[(&str, &str)] = &[
    ("sekund", "sekund"),
    ("soniya", "sekund"),
    ("second", "sekund"),
    ("sec", "sekund"),
    ("daqiqa", "daqiqa"),
    ("minut", "daqiqa"),
    ("minute", "daqiqa"),
    ("min", "daqiqa"),
    ("soat", "soat"),
    ("hour", "soat"),
    ("hr", "soat"),
];

pub const MEDIA: &[&str] = &[
    r"musiqa\s*(qo'y|ijro|och|play)",
    r"youtube.*da\s+(.+)\s*(qo'y|ijro|och|play)",
    r"(.+)\s*(qo'shig'ini|musiqasini)\s*(qo'y|ijro|och)",
    r"(to'xtat|pauza|pause|\bstop\b)",
    r"(davom.*et|\bplay\b|resume|boshla)",
    r"keyingi\s*(trek|qo'shiq|musiqa|track)|next\s*(track|song)",
    r"oldingi\s*(trek|qo'shiq|musiqa|track)|previous\s*(track|song)",
    r"play\s+(.+)",
];

/// A capture starting with one of these is a verb, a transport word or a bare
/// media noun, not a song query.
pub const MEDIA_VERBS: &str = r"^(qo'y|ijro|och|play|qo'shig'ini|musiqasini|trek|track|qo'shiq|musiqa|song|to'xtat|pauza|pause|stop|davom|resume|boshla|keyingi|oldingi|next|previous)";

pub const DICTATION: &[&str] = &[
    r"yozish.*(rejim|mode).*(yoq|start|boshla|kir)",
    r"diktovka.*(rejim|mode|yoq|start)",
    r"dictation.*(mode|start|on)",
    r"start.*dictation",
    r"text.*input.*mode",
];

pub const SCREENSHOT: &[&str] = &[r"(skrinshot|screenshot|ekran.*surat|ekran.*ol)"];

pub const KEYBOARD: &[&str] = &[
    // typing
    r"(.*)\s*da\s*(.*)\s*deb\s*yoz\b",
    r"\byoz\b\s*[:.]?\s*(.+)",
    r"(.+)\s*deb\s*yoz\b",
    r"\btype\s+(.*)\s+in\s+(.*)",
    r"\btype\s+(.+)",
    // clipboard
    r"nusxa\s*(ol|ko'chir|copy)|\bcopy\b",
    r"joylashtir|\bpaste\b",
    r"hammasini\s*tanla|select all",
    r"kesib\s*ol|\bcut\b",
    r"clipboard.*(o'qi|ko'rsat|read)",
    r"clipboard.*(qidir|search|google)",
    // editing
    r"bekor\s*qil|\bundo\b",
    r"qayta\s*qil|\bredo\b",
    r"\bsaqla|\bsave\b",
    r"\btopish\b|\bqidirish\b|\bfind\b",
    r"yangi\s*(fayl|hujjat|dokument)|new\s*(file|document)",
    r"chop\s*(et|qil)|\bprint\b",
    // browser tabs
    r"yangi\s*tab|new\s*tab",
    r"\btab\S*.*(yop|berkit|close)",
    r"\btab\S*.*(almashtir|o'zgartir|switch|keyingi|oldingi)",
    r"sahifa\S*.*(yangila|refresh|qayta|reload)|\b(refresh|reload)\b",
    r"manzil\s*satri|address\s*bar",
    // zoom and windows
    r"kattalashtir|zoom\s*in|yaqinlashtir",
    r"kichraytir|zoom\s*out|uzoqlashtir",
    r"to'liq\s*ekran|full\s*screen",
    r"boshqa\s*dastur|alt\s*tab|switch\s*app",
    r"ekran\s*qism|screenshot\s*region",
];

/// `<app> da <text> deb yoz`
pub const TYPE_IN_APP: &str = r"(.*)\s+da\s+(.*)\s+deb\s+yoz";
/// `type <text> in <app>`
pub const TYPE_IN_APP_EN: &str = r"type\s+(.*)\s+in\s+(.*)";

pub const SMART: &[(&str, &[&str])] = &[
    ("joke", &[r"hazil", r"kuldur", r"anekdot", r"qiziq.*gap"]),
    ("motivation", &[r"motivatsiya", r"ruhlantir", r"ilhom", r"kuch.*ber"]),
    ("fact", &[r"fakt", r"qiziqarli", r"bilasanmi"]),
    ("coin", &[r"tanga.*tashla", r"bosh.*yoki.*yozuv", r"flip.*coin"]),
    ("dice", &[r"zar.*tashla", r"kub.*tashla", r"roll.*dice"]),
    ("random", &[r"tasodifiy.*son", r"random"]),
    ("day_info", &[r"yil.*kun", r"hafta.*nomer"]),
    ("ip", &[r"\bip\b.*(manzil|address)"]),
    (
        "password",
        &[
            r"parol.*(yarat|generatsiya)",
            r"generate.*password",
            r"kuchli.*parol",
        ],
    ),
    (
        "translate",
        &[
            r"tarjima\s*(qil|etib)",
            r"translate",
            r"inglizcha.*(ayt|bo'l)",
            r"ruscha.*(ayt|bo'l)",
        ],
    ),
    (
        "disk",
        &[r"disk.*(hajm|joy|space)", r"xotira.*(qancha|hajm)", r"bo'sh.*joy"],
    ),
    (
        "uptime",
        &[
            r"kompyuter.*qancha.*vaqt",
            r"tizim.*vaqt",
            r"uptime",
            r"qachon.*yoqilgan",
        ],
    ),
    (
        "running_apps",
        &[
            r"ishlab.*turgan.*dastur",
            r"ochiq.*dastur",
            r"running.*app",
            r"qaysi.*dastur.*ochiq",
        ],
    ),
    (
        "timer",
        &[
            r"taymer|timer",
            r"(\d+)\s*(soniya|daqiqa|minut).*taymer",
        ],
    ),
];

pub const SOCIAL: &[&str] = &[
    r"\b(youtube|telegram|instagram|facebook|twitter|tiktok|linkedin|github)\b\s*\b(och|ochib.*ber|ishga.*tushir)\b",
];

pub(crate) fn compile(group: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| EngineError::InvalidPattern {
        group,
        pattern: pattern.to_string(),
        source,
    })
}

/// An ordered list of compiled patterns belonging to one group.
#[derive(Debug, Clone)]
pub struct PatternSet {
    group: &'static str,
    regexes: Vec<Regex>,
}

impl PatternSet {
    pub fn compile(group: &'static str, patterns: &[&str]) -> Result<Self> {
        let regexes = patterns
            .iter()
            .map(|pattern| compile(group, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { group, regexes })
    }

    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(text))
    }

    /// Captures of the first pattern (in table order) that matches.
    pub fn first_captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regexes.iter().find_map(|re| re.captures(text))
    }

    /// Captures of every matching pattern, in table order, with its index.
    pub fn all_captures<'a, 't>(
        &'a self,
        text: &'t str,
    ) -> impl Iterator<Item = (usize, Captures<'t>)> + 'a
    where
        't: 'a,
    {
        self.regexes
            .iter()
            .enumerate()
            .filter_map(move |(index, re)| re.captures(text).map(|caps| (index, caps)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> PatternSet {
        PatternSet::compile("test", patterns).unwrap()
    }

    #[test]
    fn test_every_table_compiles() {
        let tables: &[&[&str]] = &[
            GREETING_HELLO,
            GREETING_GOODBYE,
            GREETING_HOW_ARE_YOU,
            EXIT,
            SYSTEM,
            TIME,
            DATE,
            WEATHER,
            FOLDER,
            OPEN_APP,
            CLOSE_APP,
            MATH,
            MEDIA,
            DICTATION,
            SCREENSHOT,
            KEYBOARD,
            SOCIAL,
        ];
        for table in tables {
            assert_eq!(set(table).len(), table.len());
        }
        for single in [
            WEATHER_CITY,
            OPEN_SKIP_WORDS,
            CLOSE_SKIP_WORDS,
            MEDIA_VERBS,
            TYPE_IN_APP,
            TYPE_IN_APP_EN,
        ] {
            compile("test", single).unwrap();
        }
        for (_, patterns) in SMART {
            set(patterns);
        }
    }

    #[test]
    fn test_capture_names_present() {
        for rule in WEB_SEARCH {
            let re = compile("web_search", rule.pattern).unwrap();
            let names: Vec<_> = re.capture_names().flatten().collect();
            assert!(names.contains(&"query"), "{}", rule.pattern);
            assert_eq!(
                names.contains(&"app"),
                rule.app == AppSource::Captured,
                "{}",
                rule.pattern
            );
        }
        for (pattern, kind) in REMINDER {
            let re = compile("reminder", pattern).unwrap();
            let names: Vec<_> = re.capture_names().flatten().collect();
            match kind {
                ReminderKind::Timed => {
                    assert!(names.contains(&"value") && names.contains(&"unit"))
                }
                ReminderKind::Note => assert!(names.contains(&"text")),
                ReminderKind::List => assert!(names.is_empty()),
            }
        }
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let err = PatternSet::compile("broken", &[r"(unclosed"]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPattern { group: "broken", .. }));
    }

    #[test]
    fn test_greeting_tables() {
        assert!(set(GREETING_HELLO).is_match("salom"));
        assert!(set(GREETING_HELLO).is_match("assalomu alaykum jarvis"));
        assert!(!set(GREETING_HELLO).is_match("salomatlik"));
        assert!(set(GREETING_GOODBYE).is_match("katta rahmat"));
        assert!(set(GREETING_HOW_ARE_YOU).is_match("how are you"));
    }

    #[test]
    fn test_exit_needs_name_and_verb() {
        let exit = set(EXIT);
        assert!(exit.is_match("jarvis yopil"));
        assert!(exit.is_match("dasturdan chiq jarvis"));
        assert!(!exit.is_match("jarvis"));
        assert!(!exit.is_match("chrome yop"));
    }

    #[test]
    fn test_system_table() {
        let system = set(SYSTEM);
        for text in [
            "batareya qancha",
            "kompyuter ovozni ko'tar",
            "volume up",
            "yorqinlik 50",
            "oyna kichraytir",
            "kompyuter qulfla",
            "kill chrome",
            "internet ishlayaptimi",
            "dars rejimi",
            "chrome oldinga",
        ] {
            assert!(system.is_match(text), "{text}");
        }
        assert!(!system.is_match("chrome ochib ber"));
        assert!(!system.is_match("internetda qidir"));
    }

    #[test]
    fn test_folder_table_needs_noun_or_verb() {
        let folder = set(FOLDER);
        assert!(folder.is_match("yuklamalar papkasini och"));
        assert!(folder.is_match("hujjatlarni och"));
        assert!(folder.is_match("open downloads"));
        assert!(!folder.is_match("musiqa qo'y"));
    }

    #[test]
    fn test_open_app_context_form() {
        let re = compile("app_open", OPEN_APP[0]).unwrap();
        let caps = re.captures("chrome da youtube och").unwrap();
        assert_eq!(&caps[1], "chrome");
        assert_eq!(&caps[2], "youtube");
    }

    #[test]
    fn test_skip_words() {
        let open_skip = compile("app_open", OPEN_SKIP_WORDS).unwrap();
        assert!(open_skip.is_match("ochib ber"));
        assert!(!open_skip.is_match("chrome"));
        let close_skip = compile("app_close", CLOSE_SKIP_WORDS).unwrap();
        assert!(close_skip.is_match("yopib ber"));
        assert!(!close_skip.is_match("telegram"));
    }

    #[test]
    fn test_math_operators() {
        let math = set(MATH);
        for text in ["5 plyus 5", "10 minus 3", "4 * 2", "9 bo'lib 3", "5 ning kvadrati", "16 ildiz"] {
            assert!(math.is_match(text), "{text}");
        }
        assert!(!math.is_match("besh plyus besh"));
    }

    #[test]
    fn test_weather_city() {
        let city = compile("weather", WEATHER_CITY).unwrap();
        assert_eq!(&city.captures("toshkentda ob-havo").unwrap()[1], "toshkent");
        assert!(city.captures("toshkent ob-havo qanday").is_none());
    }

    #[test]
    fn test_all_captures_preserves_order() {
        let patterns = set(&[r"(a)", r"(b)", r"(a)b"]);
        let hits: Vec<usize> = patterns.all_captures("ab").map(|(i, _)| i).collect();
        assert_eq!(hits, vec![0, 1, 2]);
    }
}
