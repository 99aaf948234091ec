// File: src/core/lexicon.rs
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Domain keywords, in fuzzy tie-break order.
pub const BUILTIN_VOCABULARY: &[&str] = &[
    // system
    "ovoz", "ovozni", "batareya", "akkumulyator", "skrinshot", "screenshot",
    "kompyuter", "yorqinlik", "yorug'lik", "brightness",
    "oyna", "qulfla", "uxla", "shutdown", "restart", "hibernate",
    "chiqindi", "savatcha", "minimize", "volume", "sound",
    // verbs
    "ko'tar", "baland", "oshir", "pasayt", "kamayt", "o'chir",
    "kuchaytir", "maksimum", "mute", "unmute", "turn", "up", "down", "off", "on",
    "och", "ochib", "yop", "yopib", "ishga", "tushir", "open", "close", "start", "run",
    // time and date
    "soat", "vaqt", "sana", "bugun", "hafta", "time", "date", "today",
    // greetings
    "salom", "hayrli", "rahmat", "xayr", "hello", "hi", "thanks", "goodbye",
    // everything else
    "qidir", "izla", "search", "google", "youtube", "wikipedia", "find",
    "musiqa", "music", "play", "pause", "pauza", "stop", "resume",
    "papka", "folder", "yuklamalar", "downloads", "hujjatlar", "documents",
    "eslatma", "reminder", "taymer", "timer", "remind",
    "hazil", "motivatsiya", "fakt", "parol", "joke", "fact", "password",
    "tarjima", "translate", "telegram", "instagram",
    "nusxa", "copy", "joylashtir", "paste", "saqlash", "save",
    "jarvis", "dastur", "dasturlar", "process", "app", "apps",
    "internet", "tarmoq", "network", "wifi",
    "ekran", "kattalashtir", "kichraytir", "screen", "zoom",
    "ob-havo", "havo", "haqida", "tizim", "weather", "about", "system",
];

/// Words the pattern tables listen for. They are kept exactly as heard but,
/// unlike [`BUILTIN_VOCABULARY`], never pull other tokens towards them.
pub const BUILTIN_PROTECTED: &[&str] = &[
    "computer", "daqiqa", "davom", "document", "dokument", "eslatib", "hozir",
    "ishlab", "ishlar", "ishlat", "ko'chir", "ko'pay", "kun", "louder", "manzil",
    "marta", "mayli", "minute", "nomer", "o'chish", "ochiq", "past", "processes",
    "qayta", "qiziq", "reminders", "sanani", "sekund", "soatni", "son", "space",
    "stoli", "surat", "tanga", "tanla", "times", "today's", "turgan", "uptime",
    "yoq", "you", "yoz",
    "chiq", "kub", "lower", "minus", "minut", "o'qish", "power", "qaysi",
    "satri", "second", "song", "tashla", "tugat", "yangi", "yarat", "yozuv",
    "boshla", "going", "input", "qarshi", "tong", "yangila", "yoqish",
    "boshqa", "topish", "yaxshi", "yozish",
];

/// Frequent speech-to-text mistakes and the word that was meant.
pub const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("ovos", "ovoz"), ("avoz", "ovoz"), ("ovz", "ovoz"), ("ovozi", "ovozni"),
    ("ooz", "ovoz"), ("ovs", "ovoz"),
    ("baterya", "batareya"), ("batarya", "batareya"), ("batarey", "batareya"),
    ("baterea", "batareya"), ("batariya", "batareya"),
    ("skrishot", "skrinshot"), ("skrenshot", "skrinshot"), ("skrinshod", "skrinshot"),
    ("skinshot", "skrinshot"), ("screnshot", "screenshot"), ("skreenshot", "screenshot"),
    ("komputer", "kompyuter"), ("komyuter", "kompyuter"),
    ("kotar", "ko'tar"), ("kotor", "ko'tar"), ("kutar", "ko'tar"),
    ("kotarildi", "ko'tarildi"),
    ("pasayd", "pasayt"), ("posayt", "pasayt"), ("posait", "pasayt"),
    ("uchir", "o'chir"), ("ochir", "o'chir"),
    ("kuchaitir", "kuchaytir"),
    ("yorkinlik", "yorqinlik"), ("yorkinliq", "yorqinlik"),
    ("yoruglik", "yorug'lik"), ("yoruqlik", "yorug'lik"),
    ("yopip", "yopib"),
    ("ochip", "ochib"), ("ochi", "ochib"),
    ("qulfa", "qulfla"), ("qufla", "qulfla"),
    ("shutdaun", "shutdown"),
    ("restrt", "restart"), ("ristart", "restart"), ("restar", "restart"),
    ("minimaliz", "minimize"), ("minimays", "minimize"),
    ("chiqudi", "chiqindi"), ("chiqndi", "chiqindi"),
    ("savatchi", "savatcha"), ("savachi", "savatcha"),
    ("musika", "musiqa"), ("muzika", "musiqa"), ("musqa", "musiqa"),
    ("qidirish", "qidir"), ("qidiri", "qidir"),
    ("telgram", "telegram"), ("telegran", "telegram"), ("telagram", "telegram"),
    ("instgram", "instagram"), ("insagram", "instagram"),
    ("yutub", "youtube"), ("yutube", "youtube"), ("yutup", "youtube"),
    ("gugul", "google"), ("gugl", "google"),
    ("vikipediya", "wikipedia"), ("vikipedia", "wikipedia"),
    ("taymar", "taymer"), ("tamer", "taymer"),
    ("tarjma", "tarjima"),
    ("hzil", "hazil"), ("hazl", "hazil"),
    ("motivatsya", "motivatsiya"),
    ("paral", "parol"), ("porol", "parol"),
    ("internt", "internet"), ("intarnet", "internet"),
    ("tarmok", "tarmoq"),
    ("slom", "salom"), ("salam", "salom"),
    ("rahma", "rahmat"), ("raxmat", "rahmat"),
    ("xayrli", "hayrli"),
    ("saat", "soat"), ("soaat", "soat"), ("soet", "soat"),
    ("bugn", "bugun"),
    ("elatma", "eslatma"), ("esltma", "eslatma"),
    ("obhavo", "ob-havo"),
    ("ekrn", "ekran"), ("ekron", "ekran"),
    ("yuklaml", "yuklamalar"), ("yuklama", "yuklamalar"),
    ("papke", "papka"), ("popka", "papka"),
    ("nushxa", "nusxa"), ("nusha", "nusxa"),
    ("saqlsh", "saqlash"), ("saqla", "saqlash"),
    ("dasur", "dastur"), ("datur", "dastur"), ("dastor", "dastur"),
    ("haqda", "haqida"),
    // English
    ("volum", "volume"), ("volumme", "volume"),
    ("brayness", "brightness"), ("brigtness", "brightness"),
    ("screnshoot", "screenshot"),
];

/// The normalizer's word tables: fuzzy targets plus exact corrections.
///
/// Every accepted lexicon keeps normalization idempotent: a word the
/// normalizer can emit is never rewritten again on a second pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LexiconFile", into = "LexiconFile")]
pub struct Lexicon {
    vocabulary: Vec<String>,
    corrections: HashMap<String, String>,
    /// Vocabulary plus every correction target.
    canonical: HashSet<String>,
}

/// On-disk shape of a lexicon.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    vocabulary: Vec<String>,
    #[serde(default)]
    corrections: BTreeMap<String, String>,
}

impl Lexicon {
    /// Builds a validated lexicon. Entries are trimmed and lowercased, empty
    /// and repeated vocabulary words are dropped, and for repeated correction
    /// keys the last mapping wins.
    pub fn new<V, C, K, T>(vocabulary: V, corrections: C) -> Result<Self>
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        C: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for word in vocabulary {
            let word = clean(word.as_ref());
            if word.is_empty() {
                continue;
            }
            check_single_token("vocabulary word", &word)?;
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        let mut map = HashMap::new();
        for (key, target) in corrections {
            let key = clean(key.as_ref());
            let target = clean(target.as_ref());
            if key.is_empty() {
                continue;
            }
            check_single_token("correction key", &key)?;
            if target.is_empty() {
                return Err(EngineError::InvalidLexicon(format!(
                    "correction '{key}' has an empty target"
                )));
            }
            check_single_token("correction target", &target)?;
            map.insert(key, target);
        }

        let lexicon = Self::from_parts(words, map);
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// The shipped tables.
    pub fn builtin() -> Self {
        let vocabulary = BUILTIN_VOCABULARY.iter().map(|w| w.to_string()).collect();
        let corrections = BUILTIN_PROTECTED
            .iter()
            .map(|w| (*w, *w))
            .chain(BUILTIN_CORRECTIONS.iter().copied())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::from_parts(vocabulary, corrections)
    }

    /// No words at all: normalization only case-folds.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), HashMap::new())
    }

    fn from_parts(vocabulary: Vec<String>, corrections: HashMap<String, String>) -> Self {
        let canonical = vocabulary
            .iter()
            .chain(corrections.values())
            .cloned()
            .collect();
        Self {
            vocabulary,
            corrections,
            canonical,
        }
    }

    /// Rejects tables whose output could be rewritten on a second pass.
    pub fn validate(&self) -> Result<()> {
        for (key, target) in &self.corrections {
            if let Some(next) = self.corrections.get(target) {
                if next != target {
                    return Err(EngineError::InvalidLexicon(format!(
                        "chained correction '{key}' -> '{target}' -> '{next}'"
                    )));
                }
            }
        }
        for word in &self.vocabulary {
            if let Some(target) = self.corrections.get(word) {
                if target != word {
                    return Err(EngineError::InvalidLexicon(format!(
                        "vocabulary word '{word}' is also corrected to '{target}'"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn corrections(&self) -> &HashMap<String, String> {
        &self.corrections
    }

    pub fn correction(&self, token: &str) -> Option<&str> {
        self.corrections.get(token).map(String::as_str)
    }

    pub fn is_canonical(&self, token: &str) -> bool {
        self.canonical.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty() && self.corrections.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<LexiconFile> for Lexicon {
    type Error = EngineError;

    fn try_from(file: LexiconFile) -> Result<Self> {
        Lexicon::new(file.vocabulary, file.corrections)
    }
}

impl From<Lexicon> for LexiconFile {
    fn from(lexicon: Lexicon) -> Self {
        LexiconFile {
            vocabulary: lexicon.vocabulary,
            corrections: lexicon.corrections.into_iter().collect(),
        }
    }
}

fn clean(entry: &str) -> String {
    entry.trim().to_lowercase()
}

fn check_single_token(what: &str, entry: &str) -> Result<()> {
    if entry.contains(char::is_whitespace) {
        return Err(EngineError::InvalidLexicon(format!(
            "{what} '{entry}' contains whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        let corrections = BUILTIN_PROTECTED
            .iter()
            .map(|w| (*w, *w))
            .chain(BUILTIN_CORRECTIONS.iter().copied());
        let rebuilt = Lexicon::new(BUILTIN_VOCABULARY, corrections).unwrap();
        assert_eq!(rebuilt, Lexicon::builtin());
        assert_eq!(rebuilt.vocabulary().len(), BUILTIN_VOCABULARY.len());
    }

    #[test]
    fn test_protected_words_are_not_fuzzy_targets() {
        let lexicon = Lexicon::builtin();
        for word in ["yoz", "kun", "son", "sekund", "o'qish"] {
            assert!(lexicon.is_canonical(word), "{word}");
            assert!(!lexicon.vocabulary().iter().any(|v| v == word), "{word}");
        }
        assert!(BUILTIN_PROTECTED
            .iter()
            .all(|w| !BUILTIN_CORRECTIONS.iter().any(|(key, _)| key == w)));
    }

    #[test]
    fn test_targets_are_canonical() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_canonical("ko'tar"));
        // Only reachable as a correction target.
        assert!(lexicon.is_canonical("ko'tarildi"));
        assert!(!lexicon.is_canonical("kotar"));
        assert_eq!(lexicon.correction("kotar"), Some("ko'tar"));
    }

    #[test]
    fn test_entries_are_cleaned() {
        let lexicon = Lexicon::new(["  Ovoz ", "ovoz", ""], [(" OVOS", "Ovoz ")]).unwrap();
        assert_eq!(lexicon.vocabulary(), ["ovoz".to_string()]);
        assert_eq!(lexicon.correction("ovos"), Some("ovoz"));
    }

    #[test]
    fn test_last_duplicate_correction_wins() {
        let lexicon = Lexicon::new(["a1", "b1"], [("x", "a1"), ("x", "b1")]).unwrap();
        assert_eq!(lexicon.correction("x"), Some("b1"));
    }

    #[test]
    fn test_rejects_chained_corrections() {
        let err = Lexicon::new(Vec::<&str>::new(), [("a", "b"), ("b", "c")]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidLexicon(_)));
    }

    #[test]
    fn test_rejects_corrected_vocabulary_word() {
        let err = Lexicon::new(["saqla"], [("saqla", "saqlash")]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidLexicon(_)));
        // Identity mappings are harmless.
        assert!(Lexicon::new(["salom"], [("salom", "salom")]).is_ok());
    }

    #[test]
    fn test_rejects_multi_word_entries() {
        assert!(Lexicon::new(["ish stoli"], Vec::<(&str, &str)>::new()).is_err());
        assert!(Lexicon::new(Vec::<&str>::new(), [("x", "")]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let lexicon = Lexicon::new(["ovoz"], [("ovos", "ovoz")]).unwrap();
        let json = serde_json::to_value(&lexicon).unwrap();
        assert_eq!(json["vocabulary"][0], "ovoz");
        assert_eq!(json["corrections"]["ovos"], "ovoz");

        let bad = r#"{"vocabulary": [], "corrections": {"a": "b", "b": "c"}}"#;
        assert!(serde_json::from_str::<Lexicon>(bad).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(Lexicon::empty().is_empty());
        assert!(!Lexicon::builtin().is_empty());
    }
}
